//! Typed host-domain contracts for the platform notification center.
//!
//! This crate is the API boundary between app code and the host service that owns notification
//! authorization, scheduling, and delivery. It exposes the shared data model (capability options,
//! settings snapshots, requests, categories), the object-safe [`NotificationCenter`] trait, and
//! two adapters: a no-op center for unsupported targets and an in-memory center for tests and
//! headless hosts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod category;
pub mod center;
pub mod options;
pub mod request;
pub mod settings;

pub use category::{
    NotificationAction, NotificationActionOptions, NotificationCategory,
    NotificationCategoryOptions,
};
pub use center::{
    AuthorizationResponse, MemoryNotificationCenter, NoopNotificationCenter, NotificationCenter,
    NotificationCenterError, NotificationCenterErrorKind, NotificationCenterFuture,
    MIN_REPEATING_INTERVAL_SECS,
};
pub use options::{AuthorizationOption, AuthorizationOptions};
pub use request::{
    CalendarTrigger, DateComponents, NotificationContent, NotificationRequest, NotificationSound,
    NotificationTrigger, TimeIntervalTrigger,
};
pub use settings::{AuthorizationStatus, NotificationSetting, NotificationSettings};
