//! Closed radial line ("radar") rendering over an ordered value sequence.

use std::f64::consts::{PI, TAU};

use crate::charts::Primitive;
use crate::core::scale::{self, LinearScale};

#[derive(Debug, Clone, PartialEq)]
pub struct RadarConfig {
    pub width: f64,
    pub height: f64,
    pub center: (f64, f64),
    pub radius: f64,
    /// Concentric reference circles behind the polygon.
    pub rings: usize,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub ring_stroke: String,
    pub dot_fill: String,
    pub dot_radius: f64,
}

/// Spoke positions in surface coordinates: item `i` sits at angle
/// `i · 2π/n` from 12 o'clock, scaled to `[0, radius]` by value. The slice
/// angle depends on the number of plotted items in this pass, so the same
/// item can land on a different spoke across renders.
pub fn radar_vertices(values: &[f64], config: &RadarConfig) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = scale::max(values.iter().copied())
        .filter(|max| *max != 0.0)
        .unwrap_or(1.0);
    let radial = LinearScale::new((0.0, max), (0.0, config.radius));
    let slice = TAU / values.len() as f64;
    let (cx, cy) = config.center;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let angle = index as f64 * slice - PI / 2.0;
            let r = radial.scale(*value);
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}

pub fn radar_chart(values: &[f64], config: &RadarConfig) -> Vec<Primitive> {
    let vertices = radar_vertices(values, config);
    if vertices.is_empty() {
        return Vec::new();
    }
    let (cx, cy) = config.center;

    let mut primitives = Vec::new();
    for ring in 1..=config.rings {
        primitives.push(Primitive::Circle {
            cx,
            cy,
            r: config.radius * ring as f64 / config.rings as f64,
            fill: "none".to_string(),
            stroke: config.ring_stroke.clone(),
            opacity: 1.0,
        });
    }

    let mut d = String::new();
    for (index, (x, y)) in vertices.iter().enumerate() {
        let command = if index == 0 { "M" } else { " L" };
        d.push_str(&format!("{command}{x:.3},{y:.3}"));
    }
    d.push_str(" Z");
    primitives.push(Primitive::Path {
        d,
        fill: config.fill.clone(),
        stroke: config.stroke.clone(),
        stroke_width: config.stroke_width,
    });

    for (x, y) in &vertices {
        primitives.push(Primitive::Circle {
            cx: *x,
            cy: *y,
            r: config.dot_radius,
            fill: config.dot_fill.clone(),
            stroke: "none".to_string(),
            opacity: 1.0,
        });
    }

    primitives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RadarConfig {
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

    #[test]
    fn spokes_sit_at_even_angles() {
        let config = config();
        let values = vec![5.0, 5.0, 5.0, 5.0];
        let vertices = radar_vertices(&values, &config);
        let (cx, cy) = config.center;
        let r = config.radius;

        // Four equal values at max ⇒ top, right, bottom, left of the circle.
        let expected = [
            (cx, cy - r),
            (cx + r, cy),
            (cx, cy + r),
            (cx - r, cy),
        ];
        for ((x, y), (ex, ey)) in vertices.iter().zip(expected) {
            assert!((x - ex).abs() < 1e-9, "x: {x} vs {ex}");
            assert!((y - ey).abs() < 1e-9, "y: {y} vs {ey}");
        }
    }

    #[test]
    fn polygon_is_closed_and_drawn_after_the_rings() {
        let config = config();
        let primitives = radar_chart(&[1.0, 2.0, 3.0], &config);

        // Five rings first.
        for primitive in primitives.iter().take(config.rings) {
            assert!(matches!(primitive, Primitive::Circle { fill, .. } if fill.as_str() == "none"));
        }
        let Primitive::Path { d, .. } = &primitives[config.rings] else {
            panic!("polygon follows the rings");
        };
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));

        // One dot per vertex after the polygon.
        let dots = primitives[config.rings + 1..]
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(dots, 3);
    }

    #[test]
    fn single_value_degenerates_without_failing() {
        let primitives = radar_chart(&[7.0], &config());
        assert!(primitives
            .iter()
            .any(|p| matches!(p, Primitive::Path { .. })));
    }

    #[test]
    fn empty_input_draws_nothing() {
        assert!(radar_chart(&[], &config()).is_empty());
    }

    #[test]
    fn all_zero_values_use_a_unit_domain() {
        let config = config();
        let vertices = radar_vertices(&[0.0, 0.0], &config);
        for (x, y) in vertices {
            assert!((x - config.center.0).abs() < 1e-9);
            assert!((y - config.center.1).abs() < 1e-9);
        }
    }
}
