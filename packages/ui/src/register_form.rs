//! Registration form with name/email/password fields.

use dioxus::prelude::*;

use api::RegisterInput;

use crate::{fault_message, navigate_to, use_gateway, use_notifier, use_session_store};

#[component]
pub fn RegisterForm() -> Element {
    let store = use_session_store();
    let gateway = use_gateway();
    let notifier = use_notifier();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
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

                let n = name().trim().to_string();
                let e = email().trim().to_string();
                let p = password();
                let cp = confirm_password();

                if n.is_empty() {
                    error.set(Some("Name is required".to_string()));
                    return;
                }
                if e.is_empty() || !e.contains('@') {
                    error.set(Some("Please enter a valid email".to_string()));
                    return;
                }
                if p.len() < 8 {
                    error.set(Some("Password must be at least 8 characters".to_string()));
                    return;
                }
                if p != cp {
                    error.set(Some("Passwords do not match".to_string()));
                    return;
                }

                loading.set(true);
                let input = RegisterInput {
                    name: n,
                    email: e,
                    password: p,
                    is_admin: None,
                };
                match gateway.register(&input).await {
                    Ok(auth) => {
                        store.set(&auth.access_token, &auth.user.to_session_user());
                        navigate_to("/");
                    }
                    Err(err) => {
                        let message = fault_message(&err, "Registration failed");
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
                h2 { class: "auth-title", "Create Account" }
                {error_line}
                form { class: "auth-form", onsubmit: handle_submit,
                    div { class: "field",
                        label { class: "field-label", r#for: "name", "Name" }
                        input {
                            class: "field-input",
                            id: "name",
                            name: "name",
                            r#type: "text",
                            placeholder: "Enter your name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                            required: true,
                        }
                    }
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
                            placeholder: "At least 8 characters",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                            required: true,
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", r#for: "confirm-password", "Confirm password" }
                        input {
                            class: "field-input",
                            id: "confirm-password",
                            name: "confirm-password",
                            r#type: "password",
                            placeholder: "Repeat your password",
                            value: "{confirm_password}",
                            oninput: move |evt| confirm_password.set(evt.value()),
                            required: true,
                        }
                    }
                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Creating account..."
                        } else {
                            "Register"
                        }
                    }
                }
                p { class: "auth-footer",
                    "Already have an account? "
                    a { href: "/login", "Login" }
                }
            }
        }
    }
}
