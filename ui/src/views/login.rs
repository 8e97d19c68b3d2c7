use dioxus::logger::tracing;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut feedback = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut mode = use_signal(|| Mode::Login);
    let navigator = use_navigator();

    let submit = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        feedback.set(None);
        let email_value = email();
        let password_value = password();
        spawn(async move {
            let outcome = match mode() {
                Mode::Login => api::login(email_value, password_value).await.map(|user| {
                    tracing::info!("logged in as {}", user.email);
                }),
                Mode::Signup => api::signup(email_value, password_value).await,
            };
            busy.set(false);
            match outcome {
                Ok(()) if mode() == Mode::Login => {
                    let _ = navigator.push("/dashboard/analytics");
                }
                Ok(()) => {
                    feedback.set(Some("Account created. Log in to continue.".to_string()));
                    mode.set(Mode::Login);
                }
                Err(err) => feedback.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        section { class: "page page-login",
            div { class: "login-card",
                h1 {
                    {match mode() {
                        Mode::Login => "Log in",
                        Mode::Signup => "Create account",
                    }}
                }

                label { class: "login-card__label", r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "login-card__label", r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(message) = feedback() {
                    p { class: "login-card__feedback", "{message}" }
                }

                button {
                    r#type: "button",
                    class: "login-card__submit",
                    disabled: busy(),
                    onclick: submit,
                    {if busy() { "Working…" } else { "Continue" }}
                }
                button {
                    r#type: "button",
                    class: "login-card__mode",
                    onclick: move |_| {
                        let next = match mode() {
                            Mode::Login => Mode::Signup,
                            Mode::Signup => Mode::Login,
                        };
                        mode.set(next);
                    },
                    {match mode() {
                        Mode::Login => "Need an account? Sign up",
                        Mode::Signup => "Have an account? Log in",
                    }}
                }
            }
        }
    }
}
