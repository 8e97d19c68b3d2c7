use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn AppHeader() -> Element {
    let mut session = use_resource(|| async { api::current_user().await.ok().flatten() });
    let navigator = use_navigator();

    let user = session().flatten();

    rsx! {
        header { class: "topbar",
            div { class: "topbar__title", "Insights" }
            div { class: "topbar__actions",
                ThemeToggle {}
                {match user {
                    Some(user) => rsx! {
                        span { class: "topbar__user", "{user.email}" }
                        button {
                            r#type: "button",
                            class: "topbar__button",
                            onclick: move |_| {
                                spawn(async move {
                                    if let Err(err) = api::logout().await {
                                        tracing::warn!("logout failed: {err}");
                                    }
                                    session.restart();
                                });
                            },
                            "Log out"
                        }
                    },
                    None => rsx! {
                        button {
                            r#type: "button",
                            class: "topbar__button",
                            onclick: move |_| {
                                let _ = navigator.push("/login");
                            },
                            "Log in"
                        }
                    },
                }}
            }
        }
    }
}
