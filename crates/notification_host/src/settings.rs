//! Read-only notification settings snapshots reported by the host center.

use serde::{Deserialize, Serialize};

use crate::AuthorizationOption;

/// Overall notification permission state for the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    /// The user declined notifications.
    Denied,
    /// The user granted notifications.
    Authorized,
    /// Quiet delivery was granted without an explicit prompt.
    Provisional,
    /// Temporary authorization for a limited session.
    Ephemeral,
}

impl AuthorizationStatus {
    /// Returns whether the status grants full notification permission.
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Per-capability setting state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSetting {
    /// The capability does not exist on this host.
    #[default]
    NotSupported,
    /// The capability exists but the user turned it off.
    Disabled,
    /// The capability is turned on.
    Enabled,
}

impl NotificationSetting {
    /// Returns whether the capability is turned on.
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Snapshot of the app's notification settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Overall permission state.
    pub authorization_status: AuthorizationStatus,
    /// Badge capability state.
    pub badge_setting: NotificationSetting,
    /// Sound capability state.
    pub sound_setting: NotificationSetting,
    /// Alert capability state.
    pub alert_setting: NotificationSetting,
    /// Car display capability state.
    pub car_play_setting: NotificationSetting,
}

impl NotificationSettings {
    /// Settings for an authorized app with every reported capability enabled.
    pub const fn fully_authorized() -> Self {
        Self {
            authorization_status: AuthorizationStatus::Authorized,
            badge_setting: NotificationSetting::Enabled,
            sound_setting: NotificationSetting::Enabled,
            alert_setting: NotificationSetting::Enabled,
            car_play_setting: NotificationSetting::Enabled,
        }
    }

    /// Returns the setting backing `option`.
    ///
    /// Options without a dedicated setting report [`NotificationSetting::NotSupported`].
    pub const fn setting_for(&self, option: AuthorizationOption) -> NotificationSetting {
        match option {
            AuthorizationOption::Badge => self.badge_setting,
            AuthorizationOption::Sound => self.sound_setting,
            AuthorizationOption::Alert => self.alert_setting,
            AuthorizationOption::CarPlay => self.car_play_setting,
            AuthorizationOption::CriticalAlert | AuthorizationOption::Provisional => {
                NotificationSetting::NotSupported
            }
        }
    }

    /// Overwrites the setting backing `option`; options without one are ignored.
    pub fn set_setting(&mut self, option: AuthorizationOption, setting: NotificationSetting) {
        match option {
            AuthorizationOption::Badge => self.badge_setting = setting,
            AuthorizationOption::Sound => self.sound_setting = setting,
            AuthorizationOption::Alert => self.alert_setting = setting,
            AuthorizationOption::CarPlay => self.car_play_setting = setting,
            AuthorizationOption::CriticalAlert | AuthorizationOption::Provisional => {}
        }
    }
}
