//! Typed failures reported by [`crate::UserNotifications`].

use notification_host::{AuthorizationOptions, NotificationCenterError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by the notification facade.
pub enum UserNotificationsError {
    /// Notification permission has not been granted overall.
    #[error("notifications are not authorized")]
    Unauthorized,
    /// Permission is granted, but some required capabilities are not.
    #[error("notification options not authorized: {missing}")]
    UnauthorizedOptions {
        /// Required options absent from the authorized set.
        missing: AuthorizationOptions,
    },
    /// The notification center reported an error, passed through unchanged.
    #[error("unhandled notification center error")]
    Unhandled(#[source] NotificationCenterError),
}

#[derive(Debug, Error)]
/// Failures loading [`crate::UserNotificationsConfig`].
pub enum ConfigError {
    /// The config document could not be encoded or decoded as JSON.
    #[error("invalid user notifications config: {0}")]
    Json(#[from] serde_json::Error),
}
