//! Notification center contracts and lightweight adapters.

mod memory;
mod service;

pub use memory::{AuthorizationResponse, MemoryNotificationCenter, MIN_REPEATING_INTERVAL_SECS};
pub use service::{
    NoopNotificationCenter, NotificationCenter, NotificationCenterError,
    NotificationCenterErrorKind, NotificationCenterFuture,
};
