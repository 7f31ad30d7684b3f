//! Toast surface and publish helpers over the notification bus.
//!
//! [`ToastHost`] owns the app's one [`NotificationBus`], renders whatever the
//! slot holds, and provides a [`Notifier`] via context so any fragment can
//! publish without touching the bus directly. The host is also where the
//! auto-expiry timer lives: each publish arms a sleep for
//! [`DISPLAY_DURATION`] whose wake-up presents its token back to the bus —
//! superseded tokens are no-ops there, so a newer toast is never dismissed by
//! an older timer.

use dioxus::prelude::*;
use std::rc::Rc;

use api::ApiError;
use state::{NotificationBus, NotificationKind, DISPLAY_DURATION};

use crate::icons::{FaCircleCheck, FaCircleXmark, FaTriangleExclamation, FaXmark};
use crate::Icon;

/// Cheap-clone publisher handle for user-facing status messages.
#[derive(Clone)]
pub struct Notifier {
    bus: NotificationBus,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(NotificationKind::Warning, message);
    }

    pub fn dismiss(&self) {
        self.bus.dismiss();
    }

    /// Publish and arm the auto-expiry for this publish.
    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        let token = self.bus.publish(kind, message);
        let bus = self.bus.clone();
        spawn(async move {
            sleep(DISPLAY_DURATION).await;
            bus.expire(token);
        });
    }
}

async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Get the app-wide notifier.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Map a gateway failure to the message shown to the user.
///
/// Remote faults carry their own message; transport and decode failures get
/// the caller's fallback so raw error chains never reach the page.
pub fn fault_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Remote(message) => message.clone(),
        ApiError::Unauthenticated => error.to_string(),
        ApiError::Transport(_) | ApiError::Decode(_) => {
            tracing::warn!("gateway call failed: {error}");
            fallback.to_string()
        }
    }
}

fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast--success",
        NotificationKind::Error => "toast toast--error",
        NotificationKind::Warning => "toast toast--warning",
    }
}

fn toast_icon(kind: NotificationKind) -> Element {
    match kind {
        NotificationKind::Success => rsx! {
            Icon { icon: FaCircleCheck, width: 18, height: 18 }
        },
        NotificationKind::Error => rsx! {
            Icon { icon: FaCircleXmark, width: 18, height: 18 }
        },
        NotificationKind::Warning => rsx! {
            Icon { icon: FaTriangleExclamation, width: 18, height: 18 }
        },
    }
}

/// Provider component and display surface for notifications.
/// Wrap the app with this component so any fragment can publish toasts.
#[component]
pub fn ToastHost(children: Element) -> Element {
    let bus = use_hook(NotificationBus::new);

    let current = use_signal({
        let bus = bus.clone();
        move || bus.current()
    });

    let _subscription = use_hook({
        let bus = bus.clone();
        move || {
            Rc::new(bus.subscribe(move |notification| {
                // Signals are Copy; rebind so the Fn listener can write.
                let mut current = current;
                current.set(notification.cloned());
            }))
        }
    });

    use_context_provider({
        let bus = bus.clone();
        move || Notifier { bus }
    });

    let overlay = match current() {
        Some(notification) => {
            let close_bus = bus.clone();
            rsx! {
                div { class: toast_class(notification.kind), role: "status",
                    span { class: "toast-icon", {toast_icon(notification.kind)} }
                    p { class: "toast-message", "{notification.message}" }
                    button {
                        class: "toast-close",
                        aria_label: "Dismiss notification",
                        onclick: move |_| close_bus.dismiss(),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
            }
        }
        None => rsx! {},
    };

    rsx! {
        {children}
        {overlay}
    }
}
