//! Notification request payloads handed to the host center.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sound played when a notification is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSound {
    /// The host's default notification sound.
    Default,
    /// A named sound resource bundled with the app.
    Named(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// User-visible notification payload.
pub struct NotificationContent {
    /// Primary title line.
    pub title: String,
    /// Secondary line shown under the title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    /// Message body.
    pub body: String,
    /// Badge number applied to the app icon on delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    /// Sound played on delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<NotificationSound>,
    /// Registered category used to attach actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_identifier: Option<String>,
    /// Grouping key for related notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_identifier: Option<String>,
    /// App-defined data delivered back with the notification.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub user_info: Map<String, Value>,
}

impl NotificationContent {
    /// Creates content with a title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the badge number.
    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Sets the delivery sound.
    pub fn with_sound(mut self, sound: NotificationSound) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Sets the category identifier.
    pub fn with_category(mut self, category_identifier: impl Into<String>) -> Self {
        self.category_identifier = Some(category_identifier.into());
        self
    }

    /// Sets the thread identifier.
    pub fn with_thread(mut self, thread_identifier: impl Into<String>) -> Self {
        self.thread_identifier = Some(thread_identifier.into());
        self
    }

    /// Adds one `user_info` entry.
    pub fn with_user_info(mut self, key: impl Into<String>, value: Value) -> Self {
        self.user_info.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Calendar fields matched by a [`CalendarTrigger`]; unset fields match any value.
pub struct DateComponents {
    /// Calendar year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Month, 1-12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// Day of month, 1-31.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    /// Hour, 0-23.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u8>,
    /// Minute, 0-59.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u8>,
    /// Second, 0-59.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<u8>,
    /// Weekday, 1 (Sunday) through 7.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u8>,
}

impl DateComponents {
    /// Components matching a wall-clock time every day.
    pub const fn daily_at(hour: u8, minute: u8) -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            hour: Some(hour),
            minute: Some(minute),
            second: None,
            weekday: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Fires when the current date matches `components`.
pub struct CalendarTrigger {
    /// Fields that must match.
    pub components: DateComponents,
    /// Whether the trigger re-arms after firing.
    pub repeats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Fires once `seconds` have elapsed after scheduling.
pub struct TimeIntervalTrigger {
    /// Delay before delivery.
    pub seconds: f64,
    /// Whether the trigger re-arms after firing.
    pub repeats: bool,
}

/// Scheduling condition attached to a [`NotificationRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationTrigger {
    /// Date-matching trigger.
    Calendar(CalendarTrigger),
    /// Elapsed-time trigger.
    TimeInterval(TimeIntervalTrigger),
}

impl NotificationTrigger {
    /// Builds a calendar trigger.
    pub const fn calendar(components: DateComponents, repeats: bool) -> Self {
        Self::Calendar(CalendarTrigger {
            components,
            repeats,
        })
    }

    /// Builds a time-interval trigger.
    pub const fn time_interval(seconds: f64, repeats: bool) -> Self {
        Self::TimeInterval(TimeIntervalTrigger { seconds, repeats })
    }

    /// Returns whether the trigger re-arms after firing.
    pub const fn repeats(&self) -> bool {
        match self {
            Self::Calendar(trigger) => trigger.repeats,
            Self::TimeInterval(trigger) => trigger.repeats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A local notification submitted to the host center.
pub struct NotificationRequest {
    /// Caller-supplied identifier; re-adding an identifier replaces the earlier request.
    pub identifier: String,
    /// Payload delivered to the user.
    pub content: NotificationContent,
    /// Delivery condition; `None` delivers immediately.
    pub trigger: Option<NotificationTrigger>,
}

impl NotificationRequest {
    /// Creates a request.
    pub fn new(
        identifier: impl Into<String>,
        content: NotificationContent,
        trigger: Option<NotificationTrigger>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            content,
            trigger,
        }
    }
}
