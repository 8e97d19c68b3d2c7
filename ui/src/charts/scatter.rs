//! Scatter rendering: two linear position encodings plus a square-root
//! radius encoding, so point area tracks the size field.

use crate::charts::{axis, Margin, Primitive};
use crate::core::scale::{self, LinearScale, SqrtScale};

const TICK_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub fill: String,
    pub opacity: f64,
    pub radius_range: (f64, f64),
}

pub fn scatter_chart(points: &[ScatterPoint], config: &ScatterConfig) -> Vec<Primitive> {
    if points.is_empty() {
        return Vec::new();
    }

    let inner_width = config.width - config.margin.left - config.margin.right;
    let inner_height = config.height - config.margin.top - config.margin.bottom;
    let origin = (config.margin.left, config.margin.top);

    // Domains are the true observed extents of the current subset,
    // recomputed on every render.
    let x_domain = scale::extent(points.iter().map(|p| p.x)).unwrap_or((0.0, 1.0));
    let y_domain = scale::extent(points.iter().map(|p| p.y)).unwrap_or((0.0, 1.0));
    let x = LinearScale::new(x_domain, (0.0, inner_width));
    let y = LinearScale::new(y_domain, (inner_height, 0.0));

    let max_size = scale::max(points.iter().map(|p| p.size))
        .filter(|max| *max != 0.0)
        .unwrap_or(1.0);
    let r = SqrtScale::new(max_size, config.radius_range);

    let mut primitives = Vec::new();
    primitives.extend(axis::bottom_linear(
        &x,
        (origin.0, origin.1 + inner_height),
        TICK_COUNT,
    ));
    primitives.extend(axis::left_linear(&y, origin, TICK_COUNT));

    for point in points {
        primitives.push(Primitive::Circle {
            cx: origin.0 + x.scale(point.x),
            cy: origin.1 + y.scale(point.y),
            r: r.scale(point.size),
            fill: config.fill.clone(),
            stroke: "none".to_string(),
            opacity: config.opacity,
        });
    }

    primitives
}
