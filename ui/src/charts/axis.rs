//! Shared axis generation for the rectangular charts.

use crate::charts::{Primitive, TextAnchor};
use crate::core::format::number_text;
use crate::core::scale::{BandScale, LinearScale};

const TICK_LENGTH: f64 = 6.0;
const LABEL_SIZE: f64 = 10.0;
const AXIS_STROKE: &str = "#374151";
const LABEL_FILL: &str = "#374151";

/// Bottom axis over a band scale. `origin` is the surface position of the
/// band range's left end at the axis baseline. Long category labels are
/// rotated −45° and end-anchored so they stay legible.
pub(crate) fn bottom_band(
    scale: &BandScale,
    origin: (f64, f64),
    width: f64,
    rotate_labels: bool,
) -> Vec<Primitive> {
    let (ox, oy) = origin;
    let mut primitives = vec![Primitive::Line {
        x1: ox,
        y1: oy,
        x2: ox + width,
        y2: oy,
        stroke: AXIS_STROKE.to_string(),
    }];

    for category in scale.domain() {
        let Some(center) = scale.center(category) else {
            continue;
        };
        let x = ox + center;
        primitives.push(Primitive::Line {
            x1: x,
            y1: oy,
            x2: x,
            y2: oy + TICK_LENGTH,
            stroke: AXIS_STROKE.to_string(),
        });
        primitives.push(Primitive::Text {
            x,
            y: oy + TICK_LENGTH + LABEL_SIZE,
            content: category.clone(),
            size: LABEL_SIZE,
            fill: LABEL_FILL.to_string(),
            anchor: if rotate_labels {
                TextAnchor::End
            } else {
                TextAnchor::Middle
            },
            rotate: rotate_labels.then_some(-45.0),
        });
    }
    primitives
}

/// Bottom axis over a linear scale whose range spans the inner width.
pub(crate) fn bottom_linear(
    scale: &LinearScale,
    origin: (f64, f64),
    tick_count: usize,
) -> Vec<Primitive> {
    let (ox, oy) = origin;
    let (r0, r1) = scale.range;
    let mut primitives = vec![Primitive::Line {
        x1: ox + r0.min(r1),
        y1: oy,
        x2: ox + r0.max(r1),
        y2: oy,
        stroke: AXIS_STROKE.to_string(),
    }];

    for tick in scale.ticks(tick_count) {
        let x = ox + scale.scale(tick);
        primitives.push(Primitive::Line {
            x1: x,
            y1: oy,
            x2: x,
            y2: oy + TICK_LENGTH,
            stroke: AXIS_STROKE.to_string(),
        });
        primitives.push(Primitive::Text {
            x,
            y: oy + TICK_LENGTH + LABEL_SIZE,
            content: number_text(tick),
            size: LABEL_SIZE,
            fill: LABEL_FILL.to_string(),
            anchor: TextAnchor::Middle,
            rotate: None,
        });
    }
    primitives
}

/// Left axis over a linear scale whose range spans the inner height
/// (typically inverted: larger values map to smaller y).
pub(crate) fn left_linear(
    scale: &LinearScale,
    origin: (f64, f64),
    tick_count: usize,
) -> Vec<Primitive> {
    let (ox, oy) = origin;
    let (r0, r1) = scale.range;
    let mut primitives = vec![Primitive::Line {
        x1: ox,
        y1: oy + r0.min(r1),
        x2: ox,
        y2: oy + r0.max(r1),
        stroke: AXIS_STROKE.to_string(),
    }];

    for tick in scale.ticks(tick_count) {
        let y = oy + scale.scale(tick);
        primitives.push(Primitive::Line {
            x1: ox - TICK_LENGTH,
            y1: y,
            x2: ox,
            y2: y,
            stroke: AXIS_STROKE.to_string(),
        });
        primitives.push(Primitive::Text {
            x: ox - TICK_LENGTH - 3.0,
            y: y + 3.0,
            content: number_text(tick),
            size: LABEL_SIZE,
            fill: LABEL_FILL.to_string(),
            anchor: TextAnchor::End,
            rotate: None,
        });
    }
    primitives
}
