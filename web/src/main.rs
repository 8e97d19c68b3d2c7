use dioxus::prelude::*;

use ui::components::app_sidebar::{register_nav, NavBuilder};
use ui::components::{AppHeader, AppSidebar, Theme};
use ui::views::{Academy, Analytics, Crm, Home, Login, Logistics};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/dashboard/analytics")]
    Analytics {},
    #[route("/dashboard/academy")]
    Academy {},
    #[route("/dashboard/crm")]
    Crm {},
    #[route("/dashboard/logistics")]
    Logistics {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Analytics {},
        "{label}"
    })
}
fn nav_academy(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Academy {},
        "{label}"
    })
}
fn nav_crm(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Crm {},
        "{label}"
    })
}
fn nav_logistics(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Logistics {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Register the sidebar navigation builder so `ui` can render typed
    // links without knowing this crate's `Route` enum.
    register_nav(NavBuilder {
        home: nav_home,
        analytics: nav_analytics,
        academy: nav_academy,
        crm: nav_crm,
        logistics: nav_logistics,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell: sidebar plus header around the routed page, with the color
/// theme provided to everything below.
#[component]
fn Shell() -> Element {
    let theme = use_context_provider(|| Signal::new(Theme::Light));

    rsx! {
        div { class: "app app--{theme().class()}",
            AppSidebar {}
            div { class: "app__main",
                AppHeader {}
                main { class: "app__content", Outlet::<Route> {} }
            }
        }
    }
}
