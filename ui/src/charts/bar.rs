//! Vertical bar chart over categorical bands.

use crate::charts::{axis, Margin, Primitive, TextAnchor};
use crate::core::scale::{self, BandScale, LinearScale};

const Y_TICK_COUNT: usize = 10;
const TITLE_SIZE: f64 = 12.0;
const TITLE_FILL: &str = "#111827";

/// One bar's worth of input. Pages feed either one datum per record or one
/// per aggregate group; duplicate categories share a band and overdraw,
/// exactly like positioning duplicate rows on one band.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Inter-band padding fraction.
    pub padding: f64,
    pub fill: String,
    pub rotate_x_labels: bool,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

pub fn bar_chart(data: &[BarDatum], config: &BarConfig) -> Vec<Primitive> {
    if data.is_empty() {
        return Vec::new();
    }

    let inner_width = config.width - config.margin.left - config.margin.right;
    let inner_height = config.height - config.margin.top - config.margin.bottom;
    let origin = (config.margin.left, config.margin.top);

    let mut categories: Vec<String> = Vec::new();
    for datum in data {
        if !categories.contains(&datum.category) {
            categories.push(datum.category.clone());
        }
    }
    let x = BandScale::new(categories, inner_width, config.padding);

    let max_value = scale::max(data.iter().map(|d| d.value))
        .filter(|max| *max != 0.0)
        .unwrap_or(1.0);
    let y = LinearScale::new((0.0, max_value), (inner_height, 0.0));

    let mut primitives = Vec::new();
    primitives.extend(axis::bottom_band(
        &x,
        (origin.0, origin.1 + inner_height),
        inner_width,
        config.rotate_x_labels,
    ));
    primitives.extend(axis::left_linear(&y, origin, Y_TICK_COUNT));

    for datum in data {
        let Some(offset) = x.offset(&datum.category) else {
            continue;
        };
        let top = y.scale(datum.value);
        primitives.push(Primitive::Rect {
            x: origin.0 + offset,
            y: origin.1 + top,
            width: x.bandwidth(),
            height: inner_height - top,
            fill: config.fill.clone(),
        });
    }

    if let Some(title) = &config.x_title {
        primitives.push(Primitive::Text {
            x: origin.0 + inner_width / 2.0,
            y: origin.1 + inner_height + 60.0,
            content: title.clone(),
            size: TITLE_SIZE,
            fill: TITLE_FILL.to_string(),
            anchor: TextAnchor::Middle,
            rotate: None,
        });
    }
    if let Some(title) = &config.y_title {
        primitives.push(Primitive::Text {
            x: origin.0 - 40.0,
            y: origin.1 + inner_height / 2.0,
            content: title.clone(),
            size: TITLE_SIZE,
            fill: TITLE_FILL.to_string(),
            anchor: TextAnchor::Middle,
            rotate: Some(-90.0),
        });
    }

    primitives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(category: &str, value: f64) -> BarDatum {
        BarDatum {
            category: category.to_string(),
            value,
        }
    }

    fn config() -> BarConfig {
        BarConfig {
            width: 680.0,
            height: 540.0,
            margin: Margin::new(40.0, 40.0, 100.0, 60.0),
            padding: 0.2,
            fill: "#60A5FA".to_string(),
            rotate_x_labels: true,
            x_title: Some("Sectors".to_string()),
            y_title: Some("Intensity".to_string()),
        }
    }

    fn rects(primitives: &[Primitive]) -> Vec<&Primitive> {
        primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
            .collect()
    }

    #[test]
    fn one_bar_per_datum_with_heights_from_the_inverted_scale() {
        let config = config();
        let data = vec![datum("Energy", 10.0), datum("Water", 5.0)];
        let primitives = bar_chart(&data, &config);

        let bars = rects(&primitives);
        assert_eq!(bars.len(), 2);

        let inner_height = config.height - config.margin.top - config.margin.bottom;
        let Primitive::Rect { y, height, .. } = bars[0] else {
            unreachable!()
        };
        // Tallest bar spans the full inner height.
        assert!((height - inner_height).abs() < 1e-9);
        assert!((y - config.margin.top).abs() < 1e-9);

        let Primitive::Rect { height, .. } = bars[1] else {
            unreachable!()
        };
        assert!((height - inner_height / 2.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_categories_share_a_band() {
        let data = vec![datum("Energy", 10.0), datum("Energy", 4.0)];
        let primitives = bar_chart(&data, &config());
        let bars = rects(&primitives);
        assert_eq!(bars.len(), 2);

        let Primitive::Rect { x: x0, .. } = bars[0] else {
            unreachable!()
        };
        let Primitive::Rect { x: x1, .. } = bars[1] else {
            unreachable!()
        };
        assert_eq!(x0, x1);
    }

    #[test]
    fn axes_are_emitted_before_bars() {
        let data = vec![datum("Energy", 10.0)];
        let primitives = bar_chart(&data, &config());
        let first_rect = primitives
            .iter()
            .position(|p| matches!(p, Primitive::Rect { .. }))
            .expect("a bar is drawn");
        let first_line = primitives
            .iter()
            .position(|p| matches!(p, Primitive::Line { .. }))
            .expect("axes are drawn");
        assert!(first_line < first_rect);
    }

    #[test]
    fn empty_input_draws_nothing() {
        assert!(bar_chart(&[], &config()).is_empty());
    }

    #[test]
    fn all_zero_values_fall_back_to_a_unit_domain() {
        let data = vec![datum("Energy", 0.0)];
        let primitives = bar_chart(&data, &config());
        let bars = rects(&primitives);
        let Primitive::Rect { height, .. } = bars[0] else {
            unreachable!()
        };
        assert!((height - 0.0).abs() < 1e-9);
    }
}
