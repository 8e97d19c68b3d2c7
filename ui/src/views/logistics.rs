use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::charts::{bar_chart, radar_chart, BarConfig, BarDatum, ChartSurface, Margin, RadarConfig};
use crate::components::{CategoryChips, FilterSelect};
use crate::core::filter::{FilterKey, FilterPolicy, FilterSelection};
use crate::core::records::{distinct_numbers, distinct_text};

/// Logistics keeps the first-match quirk: only the first non-empty filter
/// field (in key order) constrains the subset.
const POLICY: FilterPolicy = FilterPolicy::ConjunctiveFirstMatch;
const RADAR_SIZE: f64 = 600.0;
const BAR_SIZE: f64 = 600.0;

fn radar_config() -> RadarConfig {
    RadarConfig {
        width: RADAR_SIZE,
        height: RADAR_SIZE,
        center: (300.0, 300.0),
        radius: 250.0,
        rings: 5,
        fill: "#8ab4f8aa".to_string(),
        stroke: "#3366cc".to_string(),
        stroke_width: 2.0,
        ring_stroke: "#ccc".to_string(),
        dot_fill: "#3366cc".to_string(),
        dot_radius: 3.0,
    }
}

fn bar_config() -> BarConfig {
    BarConfig {
        width: BAR_SIZE,
        height: BAR_SIZE,
        margin: Margin::new(40.0, 20.0, 80.0, 60.0),
        padding: 0.1,
        fill: "#66bb6a".to_string(),
        rotate_x_labels: true,
        x_title: None,
        y_title: None,
    }
}

#[component]
pub fn Logistics() -> Element {
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
    let intensities = use_memo(move || distinct_numbers(&records(), FilterKey::Intensity));
    let topics = use_memo(move || distinct_text(&records(), FilterKey::Topic));
    let end_years = use_memo(move || distinct_text(&records(), FilterKey::EndYear));
    let sources = use_memo(move || distinct_text(&records(), FilterKey::Source));
    let regions = use_memo(move || distinct_text(&records(), FilterKey::Region));

    let radar_primitives = use_memo(move || {
        let values: Vec<f64> = filtered()
            .iter()
            .map(|record| record.intensity.unwrap_or(0.0))
            .collect();
        radar_chart(&values, &radar_config())
    });

    let bar_primitives = use_memo(move || {
        let bars: Vec<BarDatum> = filtered()
            .iter()
            .map(|record| BarDatum {
                category: record.end_year.clone(),
                value: record.intensity.unwrap_or(0.0),
            })
            .collect();
        bar_chart(&bars, &bar_config())
    });

    if data().is_none() {
        return rsx! {
            div { class: "page__loading", div { class: "spinner" } }
        };
    }

    rsx! {
        section { class: "page page-logistics",
            div { class: "report__columns",
                div { class: "report__main",
                    div { class: "report-card",
                        div { class: "report-card__header",
                            h2 { "Radar Chart (Topic)" }
                            div { class: "report-card__controls",
                                FilterSelect {
                                    filter_key: FilterKey::Intensity,
                                    placeholder: "Select",
                                    options: intensities(),
                                    selection,
                                    policy: POLICY,
                                }
                                FilterSelect {
                                    filter_key: FilterKey::Topic,
                                    placeholder: "Select",
                                    options: topics(),
                                    selection,
                                    policy: POLICY,
                                }
                            }
                        }
                        ChartSurface {
                            width: RADAR_SIZE,
                            height: RADAR_SIZE,
                            primitives: radar_primitives(),
                        }
                    }

                    div { class: "report-card",
                        div { class: "report-card__header",
                            h2 { "Bar Chart (Intensity over End Year)" }
                            FilterSelect {
                                filter_key: FilterKey::EndYear,
                                placeholder: "Select",
                                options: end_years(),
                                selection,
                                policy: POLICY,
                            }
                        }
                        ChartSurface {
                            width: BAR_SIZE,
                            height: BAR_SIZE,
                            primitives: bar_primitives(),
                        }
                    }
                }

                aside { class: "report__side",
                    CategoryChips { title: "Sources", values: sources(), limit: 35 }
                    CategoryChips {
                        title: "Regions",
                        values: regions(),
                        limit: 30,
                        accent: "green",
                    }
                }
            }
        }
    }
}
