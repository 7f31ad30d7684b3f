pub mod notify;
pub mod session;
pub mod storage;

pub use notify::{
    ExpiryToken, Notification, NotificationBus, NotificationKind, NotificationSubscription,
    DISPLAY_DURATION,
};
pub use session::{Session, SessionPatch, SessionStore, SessionSubscription, SessionUser};
pub use storage::{MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};

#[cfg(target_arch = "wasm32")]
pub use storage::CookieStorage;
