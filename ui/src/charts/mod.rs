//! Declarative chart primitives and the SVG surface adapter.
//!
//! Chart builders are pure functions from data to a flat primitive list in
//! surface coordinates. [`ChartSurface`] is the only piece that touches the
//! DOM: it wholesale-replaces its children from the list on every render,
//! so repeated renders never accumulate stale drawing state.

mod axis;
mod bar;
mod pie;
mod radar;
mod scatter;

pub use bar::{bar_chart, BarConfig, BarDatum};
pub use pie::{pie_chart, pie_layout, ArcDatum, PieConfig, PieSlice};
pub use radar::{radar_chart, RadarConfig};
pub use scatter::{scatter_chart, ScatterConfig, ScatterPoint};

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One SVG-shaped drawing instruction in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        stroke: String,
        opacity: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
    },
    Path {
        d: String,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        fill: String,
        anchor: TextAnchor,
        /// Degrees, rotated about the text's own anchor point.
        rotate: Option<f64>,
    },
}

/// One chart instance bound to one drawing surface. The surface is rebuilt
/// from scratch whenever the primitive list changes.
#[component]
pub fn ChartSurface(width: f64, height: f64, primitives: Vec<Primitive>) -> Element {
    rsx! {
        svg {
            class: "chart-surface",
            view_box: "0 0 {width} {height}",
            width: "{width}",
            height: "{height}",
            for (index, primitive) in primitives.iter().enumerate() {
                {primitive_node(index, primitive)}
            }
        }
    }
}

fn primitive_node(index: usize, primitive: &Primitive) -> Element {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => rsx! {
            rect {
                key: "{index}",
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                fill: "{fill}",
            }
        },
        Primitive::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            opacity,
        } => rsx! {
            circle {
                key: "{index}",
                cx: "{cx}",
                cy: "{cy}",
                r: "{r}",
                fill: "{fill}",
                stroke: "{stroke}",
                "opacity": "{opacity}",
            }
        },
        Primitive::Line { x1, y1, x2, y2, stroke } => rsx! {
            line {
                key: "{index}",
                x1: "{x1}",
                y1: "{y1}",
                x2: "{x2}",
                y2: "{y2}",
                stroke: "{stroke}",
                "stroke-width": "1",
            }
        },
        Primitive::Path {
            d,
            fill,
            stroke,
            stroke_width,
        } => rsx! {
            path {
                key: "{index}",
                d: "{d}",
                fill: "{fill}",
                stroke: "{stroke}",
                "stroke-width": "{stroke_width}",
            }
        },
        Primitive::Text {
            x,
            y,
            content,
            size,
            fill,
            anchor,
            rotate,
        } => {
            let transform = rotate
                .map(|degrees| format!("rotate({degrees}, {x}, {y})"))
                .unwrap_or_default();
            rsx! {
                text {
                    key: "{index}",
                    x: "{x}",
                    y: "{y}",
                    fill: "{fill}",
                    "transform": "{transform}",
                    "font-size": "{size}",
                    "text-anchor": anchor.as_str(),
                    "{content}"
                }
            }
        }
    }
}
