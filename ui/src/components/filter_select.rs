use dioxus::prelude::*;

use crate::core::filter::{FilterKey, FilterPolicy, FilterSelection};

/// One dropdown bound to a page's selection signal through that page's
/// [`FilterPolicy`]. Picking the placeholder clears the key.
#[component]
pub fn FilterSelect(
    filter_key: FilterKey,
    placeholder: String,
    options: Vec<String>,
    selection: Signal<FilterSelection>,
    policy: FilterPolicy,
) -> Element {
    let mut selection = selection;
    let current = selection().value(filter_key).to_string();

    rsx! {
        div { class: "filter-select",
            label {
                class: "filter-select__label",
                r#for: "filter-{filter_key.as_str()}",
                {filter_key.label()}
            }
            select {
                id: "filter-{filter_key.as_str()}",
                class: "filter-select__input",
                value: "{current}",
                oninput: move |evt| {
                    let next = policy.set_filter(&selection(), filter_key, &evt.value());
                    selection.set(next);
                },
                option { value: "", "{placeholder}" }
                for (index, choice) in options.iter().enumerate() {
                    option { key: "{index}", value: "{choice}", "{choice}" }
                }
            }
        }
    }
}
