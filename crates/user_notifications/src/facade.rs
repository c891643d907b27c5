//! Authorization-checking facade over an injected [`NotificationCenter`].

use std::{collections::HashSet, rc::Rc};

use notification_host::{
    AuthorizationOption, AuthorizationOptions, NotificationCategory, NotificationCenter,
    NotificationContent, NotificationRequest, NotificationSettings, NotificationTrigger,
};

use crate::{UserNotificationsConfig, UserNotificationsError};

/// Capabilities whose settings are inspected when deriving authorized options.
const REPORTED_OPTIONS: [AuthorizationOption; 4] = [
    AuthorizationOption::Badge,
    AuthorizationOption::Sound,
    AuthorizationOption::Alert,
    AuthorizationOption::CarPlay,
];

/// Derives the enabled capability set from a settings snapshot.
///
/// Only badge, sound, alert, and car-play are reported by settings; other options never appear in
/// the result.
pub fn derive_authorized_options(settings: &NotificationSettings) -> AuthorizationOptions {
    REPORTED_OPTIONS
        .into_iter()
        .filter(|option| settings.setting_for(*option).is_enabled())
        .collect()
}

/// Stateless notification facade.
///
/// Every operation delegates to the shared center handle. Async operations resolve exactly once
/// with either their success value or one [`UserNotificationsError`]; concurrent calls are not
/// coordinated with each other.
#[derive(Clone)]
pub struct UserNotifications {
    center: Rc<dyn NotificationCenter>,
    config: UserNotificationsConfig,
}

impl UserNotifications {
    /// Creates a facade over `center` with default config.
    pub fn new(center: Rc<dyn NotificationCenter>) -> Self {
        Self::with_config(center, UserNotificationsConfig::default())
    }

    /// Creates a facade over `center` with `config`.
    pub fn with_config(
        center: Rc<dyn NotificationCenter>,
        config: UserNotificationsConfig,
    ) -> Self {
        Self { center, config }
    }

    /// Returns the active config.
    pub fn config(&self) -> &UserNotificationsConfig {
        &self.config
    }

    /// Schedules a local notification after checking authorization.
    ///
    /// # Errors
    ///
    /// - [`UserNotificationsError::Unauthorized`] when notifications are not authorized overall.
    /// - [`UserNotificationsError::UnauthorizedOptions`] carrying `required_options` minus the
    ///   authorized set when some required option is not enabled.
    /// - [`UserNotificationsError::Unhandled`] when the center rejects the request.
    pub async fn schedule_local_notification(
        &self,
        identifier: impl Into<String>,
        required_options: &AuthorizationOptions,
        content: NotificationContent,
        trigger: Option<NotificationTrigger>,
    ) -> Result<(), UserNotificationsError> {
        let identifier = identifier.into();
        let settings = self.center.notification_settings().await;
        if !settings.authorization_status.is_authorized() {
            tracing::warn!(
                %identifier,
                status = ?settings.authorization_status,
                "notification not scheduled: unauthorized"
            );
            return Err(UserNotificationsError::Unauthorized);
        }

        let authorized = self.authorized_options().await;
        if !authorized.contains_all(required_options) {
            let missing = required_options.subtracting(&authorized);
            tracing::warn!(%identifier, %missing, "notification not scheduled: missing options");
            return Err(UserNotificationsError::UnauthorizedOptions { missing });
        }

        let request = NotificationRequest::new(identifier, content, trigger);
        let identifier = request.identifier.clone();
        self.center.add_request(request).await.map_err(|err| {
            tracing::warn!(%identifier, %err, "notification center rejected request");
            UserNotificationsError::Unhandled(err)
        })?;
        tracing::debug!(%identifier, "local notification scheduled");
        Ok(())
    }

    /// Schedules a local notification requiring the configured default options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::schedule_local_notification`].
    pub async fn schedule_with_default_options(
        &self,
        identifier: impl Into<String>,
        content: NotificationContent,
        trigger: Option<NotificationTrigger>,
    ) -> Result<(), UserNotificationsError> {
        self.schedule_local_notification(
            identifier,
            &self.config.default_required_options,
            content,
            trigger,
        )
        .await
    }

    /// Prompts the user for `options` and reports whether they were granted.
    ///
    /// # Errors
    ///
    /// Returns [`UserNotificationsError::Unhandled`] when the center fails the prompt.
    pub async fn request_authorization(
        &self,
        options: &AuthorizationOptions,
    ) -> Result<bool, UserNotificationsError> {
        match self.center.request_authorization(options).await {
            Ok(granted) => {
                tracing::debug!(%options, granted, "notification authorization answered");
                Ok(granted)
            }
            Err(err) => {
                tracing::warn!(%options, %err, "notification authorization failed");
                Err(UserNotificationsError::Unhandled(err))
            }
        }
    }

    /// Prompts the user for the configured default options.
    ///
    /// # Errors
    ///
    /// Same as [`Self::request_authorization`].
    pub async fn request_default_authorization(&self) -> Result<bool, UserNotificationsError> {
        self.request_authorization(&self.config.default_authorization_options)
            .await
    }

    /// Reads current settings and returns the enabled capability set.
    pub async fn authorized_options(&self) -> AuthorizationOptions {
        let settings = self.center.notification_settings().await;
        derive_authorized_options(&settings)
    }

    /// Replaces the registered notification categories. The center reports no outcome.
    pub fn register_notification_categories(&self, categories: HashSet<NotificationCategory>) {
        tracing::debug!(count = categories.len(), "registering notification categories");
        self.center.set_categories(categories);
    }

    /// Drops every pending local notification. The center reports no outcome.
    pub fn unschedule_all_local_notifications(&self) {
        tracing::debug!("removing all pending local notifications");
        self.center.remove_all_pending_requests();
    }
}

impl std::fmt::Debug for UserNotifications {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserNotifications")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
