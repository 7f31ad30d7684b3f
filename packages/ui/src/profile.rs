//! Profile page: identity header plus the shipping/contact details block with
//! an edit form.
//!
//! Saving re-fetches the authoritative record and folds the fresh identity
//! fields back into the session store, so the navbar greeting follows a name
//! change without a reload.

use dioxus::prelude::*;

use api::{UpdateUserDetailsInput, User};
use state::SessionPatch;

use crate::{fault_message, use_gateway, use_notifier, use_session_store};

#[component]
pub fn ProfileView(user_id: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change.
    let mut path_user_id = use_signal(|| user_id.clone());
    if *path_user_id.peek() != user_id {
        path_user_id.set(user_id.clone());
    }

    let store = use_session_store();
    let gateway = use_gateway();
    let notifier = use_notifier();

    let mut user = use_signal(|| Option::<User>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut pincode = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut phone = use_signal(String::new);

    let loader_gateway = gateway.clone();
    let _loader = use_resource(move || {
        let gateway = loader_gateway.clone();
        let id = path_user_id();
        async move {
            loading.set(true);
            error.set(None);
            match gateway.user_by_id(&id).await {
                Ok(fetched) => {
                    if let Some(details) = &fetched.user_details {
                        address.set(details.address.clone());
                        city.set(details.city.clone());
                        pincode.set(details.pincode.to_string());
                        country.set(details.country.clone());
                        phone.set(details.phone.clone());
                    }
                    user.set(Some(fetched));
                }
                Err(err) => {
                    error.set(Some(fault_message(&err, "Failed to load profile")));
                }
            }
            loading.set(false);
        }
    });

    let handle_save = {
        let store = store.clone();
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let store = store.clone();
            let gateway = gateway.clone();
            let notifier = notifier.clone();
            spawn(async move {
                saving.set(true);
                let input = UpdateUserDetailsInput {
                    address: address().trim().to_string(),
                    city: city().trim().to_string(),
                    pincode: pincode().trim().parse().unwrap_or(0),
                    country: country().trim().to_string(),
                    phone: phone().trim().to_string(),
                };
                match gateway.update_user_details(&input).await {
                    Ok(_) => {
                        // Re-fetch the authoritative record, then merge the
                        // fresh identity fields into the session.
                        match gateway.user_by_id(&path_user_id()).await {
                            Ok(fresh) => {
                                store.update(&SessionPatch {
                                    name: Some(fresh.name.clone()),
                                    email: Some(fresh.email.clone()),
                                    is_admin: Some(fresh.is_admin),
                                });
                                user.set(Some(fresh));
                            }
                            Err(err) => tracing::warn!("profile refresh failed: {err}"),
                        }
                        editing.set(false);
                        notifier.success("Details updated");
                    }
                    Err(err) => {
                        let message = fault_message(&err, "Failed to update details");
                        notifier.error(message.clone());
                        error.set(Some(message));
                    }
                }
                saving.set(false);
            });
        }
    };

    if loading() {
        return rsx! {
            p { class: "profile-status", "Loading..." }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            p { class: "profile-status profile-status--error", "{message}" }
        };
    }

    let Some(current) = user() else {
        return rsx! {};
    };

    let details_block = if editing() {
        rsx! {
            form { class: "profile-form", onsubmit: handle_save,
                div { class: "field",
                    label { class: "field-label", r#for: "address", "Address" }
                    input {
                        class: "field-input",
                        id: "address",
                        name: "address",
                        r#type: "text",
                        value: "{address}",
                        oninput: move |evt| address.set(evt.value()),
                        required: true,
                    }
                }
                div { class: "field",
                    label { class: "field-label", r#for: "city", "City" }
                    input {
                        class: "field-input",
                        id: "city",
                        name: "city",
                        r#type: "text",
                        value: "{city}",
                        oninput: move |evt| city.set(evt.value()),
                        required: true,
                    }
                }
                div { class: "field",
                    label { class: "field-label", r#for: "pincode", "Pincode" }
                    input {
                        class: "field-input",
                        id: "pincode",
                        name: "pincode",
                        r#type: "number",
                        value: "{pincode}",
                        oninput: move |evt| pincode.set(evt.value()),
                        required: true,
                    }
                }
                div { class: "field",
                    label { class: "field-label", r#for: "country", "Country" }
                    input {
                        class: "field-input",
                        id: "country",
                        name: "country",
                        r#type: "text",
                        value: "{country}",
                        oninput: move |evt| country.set(evt.value()),
                        required: true,
                    }
                }
                div { class: "field",
                    label { class: "field-label", r#for: "phone", "Phone" }
                    input {
                        class: "field-input",
                        id: "phone",
                        name: "phone",
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value()),
                        required: true,
                    }
                }
                div { class: "profile-form-actions",
                    button {
                        class: "profile-save",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() {
                            "Saving..."
                        } else {
                            "Save Details"
                        }
                    }
                    button {
                        class: "profile-cancel",
                        r#type: "button",
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                }
            }
        }
    } else if let Some(details) = current.user_details.clone() {
        rsx! {
            div { class: "profile-details",
                div { class: "profile-details-header",
                    button {
                        class: "profile-edit",
                        onclick: move |_| editing.set(true),
                        "Edit Details"
                    }
                }
                dl { class: "profile-details-grid",
                    dt { "Address" }
                    dd { "{details.address}" }
                    dt { "City" }
                    dd { "{details.city}" }
                    dt { "Country" }
                    dd { "{details.country}" }
                    dt { "Phone" }
                    dd { "{details.phone}" }
                    dt { "Pincode" }
                    dd { "{details.pincode}" }
                }
            }
        }
    } else {
        rsx! {
            div { class: "profile-details profile-details--empty",
                button {
                    class: "profile-edit",
                    onclick: move |_| editing.set(true),
                    "Add Details"
                }
            }
        }
    };

    rsx! {
        section { class: "profile",
            div { class: "profile-card",
                div { class: "profile-header",
                    div { class: "profile-avatar", "👤" }
                    h1 { class: "profile-name", "{current.name}" }
                    p { class: "profile-email", "{current.email}" }
                }
                {details_block}
            }
        }
    }
}
