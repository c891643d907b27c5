//! Facade configuration loaded from JSON preferences.

use notification_host::{AuthorizationOption, AuthorizationOptions};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Preference key under which hosts persist [`UserNotificationsConfig`].
pub const USER_NOTIFICATIONS_CONFIG_KEY: &str = "system.user_notifications";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Defaults applied by the facade's convenience operations.
pub struct UserNotificationsConfig {
    /// Options requested by [`crate::UserNotifications::request_default_authorization`].
    pub default_authorization_options: AuthorizationOptions,
    /// Options required by [`crate::UserNotifications::schedule_with_default_options`].
    pub default_required_options: AuthorizationOptions,
}

impl Default for UserNotificationsConfig {
    fn default() -> Self {
        Self {
            default_authorization_options: AuthorizationOptions::from([
                AuthorizationOption::Alert,
                AuthorizationOption::Badge,
                AuthorizationOption::Sound,
            ]),
            default_required_options: AuthorizationOptions::from([AuthorizationOption::Alert]),
        }
    }
}

impl UserNotificationsConfig {
    /// Parses a config document; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when `raw` is not a valid config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes the config to a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
