use api::Record;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::charts::{
    pie_chart, scatter_chart, ChartSurface, Margin, PieConfig, PieSlice, ScatterConfig,
    ScatterPoint,
};
use crate::components::{CategoryChips, FilterSelect};
use crate::core::aggregate::group_sum;
use crate::core::filter::{
    format_record_date, parse_record_date, FilterKey, FilterPolicy, FilterSelection,
};
use crate::core::records::distinct_text;

const POLICY: FilterPolicy = FilterPolicy::Exclusive;
const PIE_SIZE: f64 = 500.0;
const SCATTER_WIDTH: f64 = 730.0;
const SCATTER_HEIGHT: f64 = 580.0;

fn pie_config() -> PieConfig {
    PieConfig {
        width: PIE_SIZE,
        height: PIE_SIZE,
        inner_radius: 0.0,
        labels: true,
    }
}

fn scatter_config() -> ScatterConfig {
    ScatterConfig {
        width: SCATTER_WIDTH,
        height: SCATTER_HEIGHT,
        margin: Margin::new(20.0, 70.0, 60.0, 60.0),
        fill: "skyblue".to_string(),
        opacity: 0.7,
        radius_range: (2.0, 20.0),
    }
}

#[component]
pub fn Academy() -> Element {
    let data = use_resource(|| async {
        match api::list_records().await {
            Ok(records) => records,
            Err(err) => {
                tracing::error!("record fetch failed: {err}");
                Vec::new()
            }
        }
    });
    let mut selection = use_signal(FilterSelection::default);

    let records = use_memo(move || data().unwrap_or_default());
    let filtered = use_memo(move || POLICY.apply(&records(), &selection()));
    let countries = use_memo(move || distinct_text(&records(), FilterKey::Country));
    let sectors = use_memo(move || distinct_text(&records(), FilterKey::Sector));
    let pestles = use_memo(move || distinct_text(&records(), FilterKey::Pestle));

    let pie_primitives = use_memo(move || {
        // The sector pie follows only the country select, not the page's
        // filtered subset.
        let country = selection().value(FilterKey::Country).to_string();
        let source: Vec<Record> = if country.is_empty() {
            records()
        } else {
            records()
                .into_iter()
                .filter(|record| record.country == country)
                .collect()
        };
        let groups = group_sum(
            &source,
            |record| record.sector.clone(),
            |record| record.intensity.unwrap_or(0.0),
        );
        let slices: Vec<PieSlice> = groups
            .into_iter()
            .map(|(sector, intensity)| PieSlice {
                label: sector.clone(),
                value: intensity,
                color_key: sector,
            })
            .collect();
        pie_chart(&slices, &pie_config())
    });

    let scatter_primitives = use_memo(move || {
        let points: Vec<ScatterPoint> = filtered()
            .iter()
            .filter_map(|record| {
                Some(ScatterPoint {
                    x: record.likelihood?,
                    y: record.impact?,
                    size: record.relevance.unwrap_or(0.0),
                })
            })
            .collect();
        scatter_chart(&points, &scatter_config())
    });

    let start_value = selection()
        .start_date
        .map(format_record_date)
        .unwrap_or_default();
    let end_value = selection()
        .end_date
        .map(format_record_date)
        .unwrap_or_default();

    if data().is_none() {
        return rsx! {
            div { class: "page__loading", div { class: "spinner" } }
        };
    }

    rsx! {
        section { class: "page page-academy",
            div { class: "report__columns",
                div { class: "report__main",
                    div { class: "report-card",
                        div { class: "report-card__header",
                            h2 { "Sector Chart" }
                            FilterSelect {
                                filter_key: FilterKey::Country,
                                placeholder: "All Countries",
                                options: countries(),
                                selection,
                                policy: POLICY,
                            }
                        }
                        ChartSurface {
                            width: PIE_SIZE,
                            height: PIE_SIZE,
                            primitives: pie_primitives(),
                        }
                    }

                    div { class: "report-card",
                        div { class: "report-card__header",
                            h2 { "Relevance vs Impact" }
                            div { class: "report-card__controls",
                                FilterSelect {
                                    filter_key: FilterKey::Pestle,
                                    placeholder: "Select Pestle",
                                    options: pestles(),
                                    selection,
                                    policy: POLICY,
                                }
                                FilterSelect {
                                    filter_key: FilterKey::Sector,
                                    placeholder: "Select Sector",
                                    options: sectors(),
                                    selection,
                                    policy: POLICY,
                                }
                                div { class: "filter-date",
                                    label { class: "filter-date__label", r#for: "start-date", "From" }
                                    input {
                                        id: "start-date",
                                        r#type: "date",
                                        value: "{start_value}",
                                        oninput: move |evt| {
                                            let mut next = selection();
                                            next.start_date = parse_record_date(&evt.value());
                                            selection.set(next);
                                        },
                                    }
                                    label { class: "filter-date__label", r#for: "end-date", "To" }
                                    input {
                                        id: "end-date",
                                        r#type: "date",
                                        value: "{end_value}",
                                        oninput: move |evt| {
                                            let mut next = selection();
                                            next.end_date = parse_record_date(&evt.value());
                                            selection.set(next);
                                        },
                                    }
                                }
                            }
                        }
                        ChartSurface {
                            width: SCATTER_WIDTH,
                            height: SCATTER_HEIGHT,
                            primitives: scatter_primitives(),
                        }
                    }
                }

                aside { class: "report__side",
                    CategoryChips { title: "Sectors", values: sectors() }
                    CategoryChips {
                        title: "Pestles",
                        values: pestles(),
                        limit: 30,
                        accent: "green",
                    }
                }
            }
        }
    }
}
