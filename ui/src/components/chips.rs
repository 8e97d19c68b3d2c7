use dioxus::prelude::*;

/// Capped category chip list for the report side panels. The values come
/// from the derived distinct-value lists, so the panel only ever shows
/// categories actually present in the dataset.
#[component]
pub fn CategoryChips(
    title: String,
    values: Vec<String>,
    limit: Option<usize>,
    #[props(default = String::from("blue"))] accent: String,
) -> Element {
    let shown: Vec<String> = match limit {
        Some(limit) => values.iter().take(limit).cloned().collect(),
        None => values,
    };

    rsx! {
        div { class: "panel-card",
            h4 { class: "panel-card__title", "{title}" }
            div { class: "panel-card__chips",
                for (index, value) in shown.iter().enumerate() {
                    span { key: "{index}", class: "chip chip--{accent}", "{value}" }
                }
            }
        }
    }
}
