//! Sign-in page: login and registration behind the public-only guard.

use dioxus::prelude::*;

use crate::app::components::{ErrorAlert, Layout};
use crate::app::contexts::use_auth;
use crate::app::guard::PublicRoute;
use crate::domain::RegisterRequest;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Login,
    Register,
}

/// Sign-in page component.
#[component]
pub fn SignIn() -> Element {
    rsx! {
        PublicRoute {
            SignInContent {}
        }
    }
}

#[component]
fn SignInContent() -> Element {
    let mut tab = use_signal(|| Tab::Login);
    let mut info = use_signal(|| None::<String>);

    let form = match tab() {
        Tab::Login => rsx! {
            LoginForm {}
        },
        Tab::Register => rsx! {
            RegisterForm {
                on_registered: move |message: Option<String>| {
                    info.set(message);
                    tab.set(Tab::Login);
                },
            }
        },
    };

    rsx! {
        Layout {
            title: "Sign in".to_string(),
            nav_active: "sign-in".to_string(),

            h1 { "Welcome" }
            div {
                button {
                    class: if tab() == Tab::Login { "btn" } else { "btn btn-ghost" },
                    onclick: move |_| tab.set(Tab::Login),
                    "Sign in"
                }
                button {
                    class: if tab() == Tab::Register { "btn" } else { "btn btn-ghost" },
                    onclick: move |_| tab.set(Tab::Register),
                    "Create account"
                }
            }

            if let Some(message) = info() {
                div { class: "alert alert-warning", "{message}" }
            }

            {form}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let busy = auth.snapshot().is_loading();

    let submit = move |_| {
        error.set(None);
        spawn(async move {
            // Success needs no handling here: the public guard redirects as
            // soon as the session becomes authenticated.
            let ok = auth.login(email().trim(), &password()).await;
            if !ok {
                error.set(Some("Invalid email or password".to_string()));
            }
        });
    };

    rsx! {
        div { class: "card",
            if let Some(message) = error() {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            div { class: "form-grid",
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
            }
            button {
                class: "btn",
                disabled: busy,
                onclick: submit,
                if busy { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

#[component]
fn RegisterForm(on_registered: EventHandler<Option<String>>) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut document_type = use_signal(|| "CC".to_string());
    let mut document_number = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let busy = auth.snapshot().is_loading();

    let submit = move |_| {
        error.set(None);
        let request = RegisterRequest {
            email: email().trim().to_string(),
            password: password(),
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
            document_type: document_type(),
            document_number: document_number().trim().to_string(),
            phone_number: phone_number().trim().to_string(),
        };
        spawn(async move {
            let outcome = auth.register(request).await;
            if outcome.ok {
                on_registered.call(outcome.message);
            } else {
                error.set(outcome.message);
            }
        });
    };

    rsx! {
        div { class: "card",
            if let Some(message) = error() {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            div { class: "form-grid",
                input {
                    placeholder: "First name",
                    value: "{first_name}",
                    oninput: move |e| first_name.set(e.value()),
                }
                input {
                    placeholder: "Last name",
                    value: "{last_name}",
                    oninput: move |e| last_name.set(e.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                select {
                    value: "{document_type}",
                    onchange: move |e| document_type.set(e.value()),
                    option { value: "CC", "ID card" }
                    option { value: "CE", "Foreigner ID" }
                    option { value: "PA", "Passport" }
                }
                input {
                    placeholder: "Document number",
                    value: "{document_number}",
                    oninput: move |e| document_number.set(e.value()),
                }
                input {
                    placeholder: "Phone number",
                    value: "{phone_number}",
                    oninput: move |e| phone_number.set(e.value()),
                }
            }
            button {
                class: "btn",
                disabled: busy,
                onclick: submit,
                if busy { "Creating account..." } else { "Create account" }
            }
        }
    }
}
