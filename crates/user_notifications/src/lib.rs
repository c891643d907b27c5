//! Authorization-checking facade over the host notification center.
//!
//! [`UserNotifications`] wraps an injected [`notification_host::NotificationCenter`] handle. It
//! checks overall and per-capability authorization before scheduling local notifications,
//! forwards permission prompts, category registration, and unscheduling, and translates center
//! results into [`UserNotificationsError`]. It holds no mutable state of its own.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod error;
mod facade;

pub use config::{UserNotificationsConfig, USER_NOTIFICATIONS_CONFIG_KEY};
pub use error::{ConfigError, UserNotificationsError};
pub use facade::{derive_authorized_options, UserNotifications};
