//! Login form with email/password fields.

use dioxus::prelude::*;

use api::LoginInput;

use crate::{fault_message, navigate_to, use_gateway, use_notifier, use_session_store};

#[component]
pub fn LoginForm() -> Element {
    let store = use_session_store();
    let gateway = use_gateway();
    let notifier = use_notifier();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = {
        let store = store.clone();
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let store = store.clone();
            let gateway = gateway.clone();
            let notifier = notifier.clone();
            spawn(async move {
                error.set(None);

                let address = email().trim().to_string();
                if address.is_empty() || !address.contains('@') {
                    error.set(Some("Please enter a valid email".to_string()));
                    return;
                }
                if password().is_empty() {
                    error.set(Some("Password is required".to_string()));
                    return;
                }

                loading.set(true);
                let input = LoginInput {
                    email: address,
                    password: password(),
                };
                match gateway.login(&input).await {
                    Ok(auth) => {
                        store.set(&auth.access_token, &auth.user.to_session_user());
                        navigate_to("/");
                    }
                    Err(err) => {
                        let message = fault_message(&err, "Login failed");
                        notifier.error(message.clone());
                        error.set(Some(message));
                        loading.set(false);
                    }
                }
            });
        }
    };

    let error_line = match error() {
        Some(message) => rsx! {
            div { class: "form-error", "{message}" }
        },
        None => rsx! {},
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Login" }
                {error_line}
                form { class: "auth-form", onsubmit: handle_submit,
                    div { class: "field",
                        label { class: "field-label", r#for: "email", "Email" }
                        input {
                            class: "field-input",
                            id: "email",
                            name: "email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                            required: true,
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", r#for: "password", "Password" }
                        input {
                            class: "field-input",
                            id: "password",
                            name: "password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                            required: true,
                        }
                    }
                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Logging in..."
                        } else {
                            "Login"
                        }
                    }
                }
                p { class: "auth-footer",
                    "Don't have an account? "
                    a { href: "/register", "Register" }
                }
            }
        }
    }
}
