//! Pie and donut rendering from aggregate slices.

use std::f64::consts::TAU;

use crate::charts::{Primitive, TextAnchor};
use crate::core::scale::OrdinalColorScale;

const OUTER_INSET: f64 = 10.0;
const LABEL_INSET: f64 = 40.0;
const LABEL_SIZE: f64 = 10.0;
const LABEL_FILL: &str = "#111827";

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Category driving color assignment; may differ from `label` (e.g. a
    /// per-record pie colored by region).
    pub color_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieConfig {
    pub width: f64,
    pub height: f64,
    /// Zero for a full pie, positive for a donut.
    pub inner_radius: f64,
    pub labels: bool,
}

/// One laid-out arc: `index` points back into the input slice order.
/// Angles are radians from 12 o'clock, clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcDatum {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Computes the angular layout: arcs in descending-value order, each span
/// proportional to its value, together covering the full turn.
pub fn pie_layout(slices: &[PieSlice]) -> Vec<ArcDatum> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..slices.len()).collect();
    order.sort_by(|a, b| {
        slices[*b]
            .value
            .partial_cmp(&slices[*a].value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut angle = 0.0;
    order
        .into_iter()
        .map(|index| {
            let span = slices[index].value / total * TAU;
            let arc = ArcDatum {
                index,
                start_angle: angle,
                end_angle: angle + span,
            };
            angle = arc.end_angle;
            arc
        })
        .collect()
}

pub fn pie_chart(slices: &[PieSlice], config: &PieConfig) -> Vec<Primitive> {
    if slices.is_empty() {
        return Vec::new();
    }

    let center = (config.width / 2.0, config.height / 2.0);
    let raw_radius = config.width.min(config.height) / 2.0;
    let outer_radius = raw_radius - OUTER_INSET;
    let label_radius = raw_radius - LABEL_INSET;

    let mut colors = OrdinalColorScale::new();
    let mut primitives = Vec::new();
    for arc in pie_layout(slices) {
        let slice = &slices[arc.index];
        // Color assignment follows arc layout order, so the color scale sees
        // categories in the same order the arcs are drawn.
        let fill = colors.color(&slice.color_key).to_string();
        if arc.end_angle - arc.start_angle <= 0.0 {
            continue;
        }
        primitives.push(Primitive::Path {
            d: arc_path(
                center,
                outer_radius,
                config.inner_radius,
                arc.start_angle,
                arc.end_angle,
            ),
            fill,
            stroke: "none".to_string(),
            stroke_width: 0.0,
        });
        if config.labels {
            let mid = (arc.start_angle + arc.end_angle) / 2.0;
            let (x, y) = point(center, label_radius, mid);
            primitives.push(Primitive::Text {
                x,
                y,
                content: slice.label.clone(),
                size: LABEL_SIZE,
                fill: LABEL_FILL.to_string(),
                anchor: TextAnchor::Middle,
                rotate: None,
            });
        }
    }
    primitives
}

fn point(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 + radius * angle.sin(),
        center.1 - radius * angle.cos(),
    )
}

/// Arc outline as two half-span arcs, which stays well-formed even for a
/// single slice spanning the full turn.
fn arc_path(center: (f64, f64), outer: f64, inner: f64, start: f64, end: f64) -> String {
    let mid = (start + end) / 2.0;
    let (x0, y0) = point(center, outer, start);
    let (xm, ym) = point(center, outer, mid);
    let (x1, y1) = point(center, outer, end);
    let mut d = format!(
        "M{x0:.3},{y0:.3} A{outer:.3},{outer:.3} 0 0 1 {xm:.3},{ym:.3} \
         A{outer:.3},{outer:.3} 0 0 1 {x1:.3},{y1:.3}"
    );
    if inner > 0.0 {
        let (ix1, iy1) = point(center, inner, end);
        let (ixm, iym) = point(center, inner, mid);
        let (ix0, iy0) = point(center, inner, start);
        d.push_str(&format!(
            " L{ix1:.3},{iy1:.3} A{inner:.3},{inner:.3} 0 0 0 {ixm:.3},{iym:.3} \
             A{inner:.3},{inner:.3} 0 0 0 {ix0:.3},{iy0:.3} Z"
        ));
    } else {
        d.push_str(&format!(" L{:.3},{:.3} Z", center.0, center.1));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, value: f64) -> PieSlice {
        PieSlice {
            label: label.to_string(),
            value,
            color_key: label.to_string(),
        }
    }

    fn config() -> PieConfig {
        PieConfig {
            width: 500.0,
            height: 500.0,
            inner_radius: 0.0,
            labels: true,
        }
    }

    #[test]
    fn spans_are_proportional_and_cover_the_full_turn() {
        let slices = vec![slice("a", 1.0), slice("b", 3.0)];
        let arcs = pie_layout(&slices);

        assert_eq!(arcs.len(), 2);
        // Largest value first.
        assert_eq!(arcs[0].index, 1);
        let span0 = arcs[0].end_angle - arcs[0].start_angle;
        let span1 = arcs[1].end_angle - arcs[1].start_angle;
        assert!((span0 - TAU * 0.75).abs() < 1e-9);
        assert!((span1 - TAU * 0.25).abs() < 1e-9);
        assert!((arcs[1].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn chart_emits_one_arc_and_one_label_per_slice() {
        let slices = vec![slice("a", 1.0), slice("b", 2.0), slice("c", 3.0)];
        let primitives = pie_chart(&slices, &config());

        let paths = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Path { .. }))
            .count();
        let labels = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Text { .. }))
            .count();
        assert_eq!(paths, 3);
        assert_eq!(labels, 3);
    }

    #[test]
    fn single_slice_covers_the_whole_circle_without_failing() {
        let slices = vec![slice("only", 5.0)];
        let arcs = pie_layout(&slices);
        assert_eq!(arcs.len(), 1);
        assert!((arcs[0].end_angle - TAU).abs() < 1e-9);

        let primitives = pie_chart(&slices, &config());
        assert!(primitives
            .iter()
            .any(|p| matches!(p, Primitive::Path { .. })));
    }

    #[test]
    fn empty_or_zero_valued_input_draws_nothing() {
        assert!(pie_chart(&[], &config()).is_empty());
        assert!(pie_chart(&[slice("a", 0.0)], &config()).is_empty());
    }

    #[test]
    fn donut_paths_mention_the_inner_radius() {
        let slices = vec![slice("a", 1.0), slice("b", 1.0)];
        let donut = PieConfig {
            inner_radius: 80.0,
            ..config()
        };
        let primitives = pie_chart(&slices, &donut);
        let Primitive::Path { d, .. } = &primitives[0] else {
            panic!("expected a path first");
        };
        assert!(d.contains("A80.000,80.000"));
    }
}
