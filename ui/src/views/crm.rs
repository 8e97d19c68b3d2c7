use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::charts::{pie_chart, radar_chart, ChartSurface, PieConfig, PieSlice, RadarConfig};
use crate::components::{CategoryChips, FilterSelect};
use crate::core::filter::{FilterKey, FilterPolicy, FilterSelection};
use crate::core::records::distinct_text;

const POLICY: FilterPolicy = FilterPolicy::ConjunctiveAll;
const RADAR_WIDTH: f64 = 460.0;
const RADAR_HEIGHT: f64 = 480.0;
const PIE_SIZE: f64 = 400.0;

fn radar_config() -> RadarConfig {
    RadarConfig {
        width: RADAR_WIDTH,
        height: RADAR_HEIGHT,
        center: (230.0, 220.0),
        radius: 200.0,
        rings: 5,
        fill: "#93C5FD66".to_string(),
        stroke: "#3B82F6".to_string(),
        stroke_width: 2.0,
        ring_stroke: "#ddd".to_string(),
        dot_fill: "#2563EB".to_string(),
        dot_radius: 3.0,
    }
}

fn pie_config() -> PieConfig {
    PieConfig {
        width: PIE_SIZE,
        height: PIE_SIZE,
        inner_radius: 0.0,
        labels: false,
    }
}

#[component]
pub fn Crm() -> Element {
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
    let sources = use_memo(move || distinct_text(&records(), FilterKey::Source));
    let regions = use_memo(move || distinct_text(&records(), FilterKey::Region));

    let radar_primitives = use_memo(move || {
        let values: Vec<f64> = filtered()
            .iter()
            .map(|record| record.intensity.unwrap_or(0.0))
            .collect();
        radar_chart(&values, &radar_config())
    });

    let pie_primitives = use_memo(move || {
        // One slice per record; zero or missing intensity still earns a
        // sliver, colored by the record's region.
        let slices: Vec<PieSlice> = filtered()
            .iter()
            .map(|record| PieSlice {
                label: record.region.clone(),
                value: record.intensity.filter(|v| *v != 0.0).unwrap_or(1.0),
                color_key: record.region.clone(),
            })
            .collect();
        pie_chart(&slices, &pie_config())
    });

    if data().is_none() {
        return rsx! {
            div { class: "page__loading", div { class: "spinner" } }
        };
    }

    rsx! {
        section { class: "page page-crm",
            div { class: "report__columns",
                div { class: "report__main",
                    div { class: "report-card",
                        div { class: "report-card__header",
                            h2 { "Radar Chart (Intensity)" }
                            FilterSelect {
                                filter_key: FilterKey::Source,
                                placeholder: "All Sources",
                                options: sources(),
                                selection,
                                policy: POLICY,
                            }
                        }
                        ChartSurface {
                            width: RADAR_WIDTH,
                            height: RADAR_HEIGHT,
                            primitives: radar_primitives(),
                        }
                    }

                    div { class: "report-card",
                        div { class: "report-card__header",
                            h2 { "Region Chart" }
                            FilterSelect {
                                filter_key: FilterKey::Region,
                                placeholder: "All Regions",
                                options: regions(),
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
                }

                aside { class: "report__side",
                    CategoryChips { title: "Regions", values: regions() }
                    CategoryChips {
                        title: "Sources",
                        values: sources(),
                        limit: 30,
                        accent: "green",
                    }
                }
            }
        }
    }
}
