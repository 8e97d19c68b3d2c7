//! End-to-end pipeline scenarios: records through filtering, aggregation,
//! and chart-primitive generation, without a drawing surface.

use api::Record;
use ui::charts::{
    bar_chart, pie_chart, pie_layout, radar_chart, scatter_chart, BarConfig, BarDatum, Margin,
    PieConfig, PieSlice, RadarConfig, ScatterConfig, ScatterPoint,
};
use ui::core::aggregate::group_sum;
use ui::core::filter::{parse_record_date, FilterKey, FilterPolicy, FilterSelection};
use ui::core::records::{distinct_numbers, distinct_text};

fn record(country: &str, sector: &str, intensity: f64) -> Record {
    Record {
        country: country.to_string(),
        sector: sector.to_string(),
        intensity: Some(intensity),
        ..Record::default()
    }
}

fn bar_config() -> BarConfig {
    BarConfig {
        width: 680.0,
        height: 540.0,
        margin: Margin::new(40.0, 40.0, 100.0, 60.0),
        padding: 0.2,
        fill: "#60A5FA".to_string(),
        rotate_x_labels: true,
        x_title: None,
        y_title: None,
    }
}

fn pie_config() -> PieConfig {
    PieConfig {
        width: 500.0,
        height: 500.0,
        inner_radius: 0.0,
        labels: true,
    }
}

fn radar_config() -> RadarConfig {
    RadarConfig {
        width: 600.0,
        height: 600.0,
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

fn scatter_config() -> ScatterConfig {
    ScatterConfig {
        width: 730.0,
        height: 580.0,
        margin: Margin::new(20.0, 70.0, 60.0, 60.0),
        fill: "skyblue".to_string(),
        opacity: 0.7,
        radius_range: (2.0, 20.0),
    }
}

#[test]
fn filter_then_group_matches_the_reference_scenario() {
    let records = vec![
        record("A", "Energy", 10.0),
        record("A", "Water", 5.0),
        record("B", "Energy", 7.0),
    ];

    let selection =
        FilterPolicy::Exclusive.set_filter(&FilterSelection::default(), FilterKey::Country, "A");
    let filtered = FilterPolicy::Exclusive.apply(&records, &selection);
    assert_eq!(filtered.len(), 2);

    let groups = group_sum(
        &filtered,
        |r| r.sector.clone(),
        |r| r.intensity.unwrap_or(0.0),
    );
    assert_eq!(
        groups,
        vec![("Energy".to_string(), 10.0), ("Water".to_string(), 5.0)]
    );

    // The grouped slices drive a pie whose spans stay proportional.
    let slices: Vec<PieSlice> = groups
        .into_iter()
        .map(|(sector, intensity)| PieSlice {
            label: sector.clone(),
            value: intensity,
            color_key: sector,
        })
        .collect();
    let arcs = pie_layout(&slices);
    assert_eq!(arcs.len(), 2);
    let span0 = arcs[0].end_angle - arcs[0].start_angle;
    let span1 = arcs[1].end_angle - arcs[1].start_angle;
    assert!((span0 / span1 - 2.0).abs() < 1e-9);
}

#[test]
fn empty_fetch_renders_nothing_and_offers_no_options() {
    let records: Vec<Record> = Vec::new();
    let selection = FilterSelection::default();
    let filtered = FilterPolicy::ConjunctiveAll.apply(&records, &selection);
    assert!(filtered.is_empty());

    // No chart draws a single primitive.
    let bars: Vec<BarDatum> = Vec::new();
    assert!(bar_chart(&bars, &bar_config()).is_empty());
    assert!(pie_chart(&[], &pie_config()).is_empty());
    assert!(radar_chart(&[], &radar_config()).is_empty());
    let points: Vec<ScatterPoint> = Vec::new();
    assert!(scatter_chart(&points, &scatter_config()).is_empty());

    // Dropdowns have nothing to offer beyond their "All" placeholder.
    assert!(distinct_text(&records, FilterKey::Country).is_empty());
    assert!(distinct_numbers(&records, FilterKey::Intensity).is_empty());
}

#[test]
fn date_range_passes_only_parseable_dates_inside_the_range() {
    let dates = ["2020-06-01", "2021-01-01", "invalid"];
    let records: Vec<Record> = dates
        .iter()
        .map(|date| Record {
            date: date.to_string(),
            ..Record::default()
        })
        .collect();

    let mut selection = FilterSelection::default();
    selection.start_date = parse_record_date("2020-01-01");
    selection.end_date = parse_record_date("2020-12-31");
    assert!(selection.start_date.is_some() && selection.end_date.is_some());

    let filtered = FilterPolicy::ConjunctiveAll.apply(&records, &selection);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, "2020-06-01");
}

#[test]
fn wire_records_flow_through_the_whole_pipeline() {
    let raw = serde_json::json!([
        {"country": "India", "sector": "Energy", "topic": "oil",
         "intensity": 6, "likelihood": 3, "impact": 2, "relevance": "4",
         "region": "Northern America", "source": "EIA", "end_year": "2027",
         "pestle": "Industries", "date": "2017-01-20"},
        {"country": "India", "sector": "Energy", "topic": "gas",
         "intensity": "2", "likelihood": 1, "impact": 4, "relevance": 3,
         "region": "World", "source": "EIA", "end_year": "", "pestle": "Industries",
         "date": "2017-01-20"},
        {"country": "Brazil", "sector": "Water", "topic": "policy",
         "intensity": 5, "likelihood": 2, "impact": 1, "relevance": 2,
         "region": "South America", "source": "WRI", "end_year": "2030",
         "pestle": "Environment", "date": "not a date"}
    ]);
    let records: Vec<Record> = serde_json::from_value(raw).expect("records should deserialize");

    let policy = FilterPolicy::ConjunctiveAll;
    let selection = policy.set_filter(&FilterSelection::default(), FilterKey::Country, "India");
    let filtered = policy.apply(&records, &selection);
    assert_eq!(filtered.len(), 2);

    // Numeric dropdown options keep first-appearance order.
    assert_eq!(
        distinct_numbers(&records, FilterKey::Intensity),
        vec!["6".to_string(), "2".to_string(), "5".to_string()]
    );

    let points: Vec<ScatterPoint> = filtered
        .iter()
        .filter_map(|record| {
            Some(ScatterPoint {
                x: record.likelihood?,
                y: record.impact?,
                size: record.relevance.unwrap_or(0.0),
            })
        })
        .collect();
    let primitives = scatter_chart(&points, &scatter_config());
    assert!(!primitives.is_empty());

    let values: Vec<f64> = filtered
        .iter()
        .map(|record| record.intensity.unwrap_or(0.0))
        .collect();
    assert_eq!(values, vec![6.0, 2.0]);
    assert!(!radar_chart(&values, &radar_config()).is_empty());
}
