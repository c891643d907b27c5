//! Notification center service contract, error type, and no-op adapter.

use std::{collections::HashSet, fmt, future::Future, pin::Pin};

use crate::{AuthorizationOptions, NotificationCategory, NotificationRequest, NotificationSettings};

/// Object-safe boxed future used by [`NotificationCenter`] async methods.
pub type NotificationCenterFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failure category reported by a [`NotificationCenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationCenterErrorKind {
    /// The host refuses notifications for this app.
    NotAllowed,
    /// The request identifier is unusable.
    InvalidIdentifier,
    /// The trigger cannot be scheduled.
    InvalidTrigger,
    /// Any other host-side failure.
    Backend,
}

impl NotificationCenterErrorKind {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAllowed => "not-allowed",
            Self::InvalidIdentifier => "invalid-identifier",
            Self::InvalidTrigger => "invalid-trigger",
            Self::Backend => "backend",
        }
    }
}

/// Error surfaced verbatim by the host notification center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCenterError {
    /// Failure category.
    pub kind: NotificationCenterErrorKind,
    /// Host-provided description.
    pub message: String,
}

impl NotificationCenterError {
    /// Creates an error of `kind` with `message`.
    pub fn new(kind: NotificationCenterErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a [`NotificationCenterErrorKind::Backend`] error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(NotificationCenterErrorKind::Backend, message)
    }
}

impl fmt::Display for NotificationCenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification center {}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for NotificationCenterError {}

/// Host notification center that owns authorization, scheduling, and delivery.
///
/// Implementations are shared handles; callers do not coordinate concurrent use.
pub trait NotificationCenter {
    /// Reads the current settings snapshot.
    fn notification_settings<'a>(&'a self) -> NotificationCenterFuture<'a, NotificationSettings>;

    /// Prompts the user for `options` and reports whether they were granted.
    fn request_authorization<'a>(
        &'a self,
        options: &'a AuthorizationOptions,
    ) -> NotificationCenterFuture<'a, Result<bool, NotificationCenterError>>;

    /// Schedules `request`, replacing any pending request with the same identifier.
    fn add_request<'a>(
        &'a self,
        request: NotificationRequest,
    ) -> NotificationCenterFuture<'a, Result<(), NotificationCenterError>>;

    /// Replaces the registered category set.
    fn set_categories(&self, categories: HashSet<NotificationCategory>);

    /// Drops every pending request.
    fn remove_all_pending_requests(&self);

    /// Lists requests that have not been delivered yet.
    fn pending_requests<'a>(&'a self) -> NotificationCenterFuture<'a, Vec<NotificationRequest>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification center for unsupported targets.
pub struct NoopNotificationCenter;

impl NotificationCenter for NoopNotificationCenter {
    fn notification_settings<'a>(&'a self) -> NotificationCenterFuture<'a, NotificationSettings> {
        Box::pin(async { NotificationSettings::default() })
    }

    fn request_authorization<'a>(
        &'a self,
        _options: &'a AuthorizationOptions,
    ) -> NotificationCenterFuture<'a, Result<bool, NotificationCenterError>> {
        Box::pin(async { Ok(false) })
    }

    fn add_request<'a>(
        &'a self,
        _request: NotificationRequest,
    ) -> NotificationCenterFuture<'a, Result<(), NotificationCenterError>> {
        Box::pin(async { Ok(()) })
    }

    fn set_categories(&self, _categories: HashSet<NotificationCategory>) {}

    fn remove_all_pending_requests(&self) {}

    fn pending_requests<'a>(&'a self) -> NotificationCenterFuture<'a, Vec<NotificationRequest>> {
        Box::pin(async { Vec::new() })
    }
}
