use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Flips the `Signal<Theme>` the shell provides via context; the shell maps
/// the theme onto a wrapper class.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let icon = if theme() == Theme::Dark { "☀" } else { "☾" };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            aria_label: "Toggle color theme",
            onclick: move |_| {
                let next = theme().flipped();
                theme.set(next);
            },
            "{icon}"
        }
    }
}
