use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Shell stylesheet (sidebar + topbar).
const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// Platform shells can register a `NavBuilder` providing fully constructed
/// `Link` elements, so `ui` does not need to know each platform's `Route`
/// enum. Each closure receives the label to render inside the link.
///
/// If no builder is registered, any raw `children` passed to [`AppSidebar`]
/// are rendered instead.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub analytics: fn(label: &str) -> Element,
    pub academy: fn(label: &str) -> Element,
    pub crm: fn(label: &str) -> Element,
    pub logistics: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppSidebar(children: Element) -> Element {
    let mut reports_open = use_signal(|| true);

    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let analytics = (builder.analytics)("Analytics");
        let academy = (builder.academy)("Academy");
        let crm = (builder.crm)("CRM");
        let logistics = (builder.logistics)("Logistics");

        rsx! {
            nav { class: "sidebar__links",
                {home}
                button {
                    r#type: "button",
                    class: "sidebar__group-toggle",
                    onclick: move |_| {
                        let open = reports_open();
                        reports_open.set(!open);
                    },
                    span { "Dashboard" }
                    span { class: "sidebar__group-caret", aria_hidden: "true",
                        {if reports_open() { "▾" } else { "▸" }}
                    }
                }
                if reports_open() {
                    div { class: "sidebar__group",
                        {analytics}
                        {academy}
                        {crm}
                        {logistics}
                    }
                }
            }
        }
        .expect("AppSidebar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }

        aside { class: "sidebar",
            div { class: "sidebar__brand",
                span { class: "sidebar__brand-mark", "Pulseboard" }
                span { class: "sidebar__brand-subtitle", "Insights dashboard" }
            }
            if let Some(nav) = internal_nav {
                {nav}
            } else {
                nav { class: "sidebar__links", {children} }
            }
        }
    }
}
