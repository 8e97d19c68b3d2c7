use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::charts::{bar_chart, BarConfig, BarDatum, ChartSurface, Margin};
use crate::components::{CategoryChips, FilterSelect};
use crate::core::filter::{FilterKey, FilterPolicy, FilterSelection};
use crate::core::records::distinct_text;

const POLICY: FilterPolicy = FilterPolicy::Exclusive;
const CHART_WIDTH: f64 = 680.0;
const CHART_HEIGHT: f64 = 540.0;

fn chart_config() -> BarConfig {
    BarConfig {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        margin: Margin::new(40.0, 40.0, 100.0, 60.0),
        padding: 0.2,
        fill: "#60A5FA".to_string(),
        rotate_x_labels: true,
        x_title: Some("Sectors".to_string()),
        y_title: Some("Intensity".to_string()),
    }
}

#[component]
pub fn Analytics() -> Element {
    let data = use_resource(|| async {
        match api::list_records().await {
            Ok(records) => records,
            Err(err) => {
                tracing::error!("record fetch failed: {err}");
                Vec::new()
            }
        }
    });
    let selection = use_signal(FilterSelection::default);

    let records = use_memo(move || data().unwrap_or_default());
    let filtered = use_memo(move || POLICY.apply(&records(), &selection()));
    let countries = use_memo(move || distinct_text(&records(), FilterKey::Country));

    let primitives = use_memo(move || {
        let bars: Vec<BarDatum> = filtered()
            .iter()
            .map(|record| BarDatum {
                category: record.sector.clone(),
                value: record.intensity.unwrap_or(0.0),
            })
            .collect();
        bar_chart(&bars, &chart_config())
    });

    if data().is_none() {
        return rsx! {
            div { class: "page__loading", div { class: "spinner" } }
        };
    }

    rsx! {
        section { class: "page page-analytics",
            div { class: "report__columns",
                div { class: "report__main",
                    div { class: "report-card",
                        div { class: "report-card__header",
                            h2 { "Intensity by Sector" }
                            FilterSelect {
                                filter_key: FilterKey::Country,
                                placeholder: "All Countries",
                                options: countries(),
                                selection,
                                policy: POLICY,
                            }
                        }
                        ChartSurface {
                            width: CHART_WIDTH,
                            height: CHART_HEIGHT,
                            primitives: primitives(),
                        }
                    }
                }
                aside { class: "report__side",
                    CategoryChips { title: "Countries in Dataset", values: countries() }
                }
            }
        }
    }
}
