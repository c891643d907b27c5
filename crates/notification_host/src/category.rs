//! Notification category definitions registered with the host center.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Presentation flags for a [`NotificationAction`].
pub struct NotificationActionOptions {
    /// Launches the app into the foreground when chosen.
    #[serde(default)]
    pub foreground: bool,
    /// Rendered as a destructive action.
    #[serde(default)]
    pub destructive: bool,
    /// Requires an unlocked device.
    #[serde(default)]
    pub authentication_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A button attached to notifications of one category.
pub struct NotificationAction {
    /// Identifier reported back when the action is chosen.
    pub identifier: String,
    /// Button title.
    pub title: String,
    /// Presentation flags.
    #[serde(default)]
    pub options: NotificationActionOptions,
}

impl NotificationAction {
    /// Creates an action with default presentation flags.
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            options: NotificationActionOptions::default(),
        }
    }

    /// Replaces the presentation flags.
    pub fn with_options(mut self, options: NotificationActionOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Behavior flags for a [`NotificationCategory`].
pub struct NotificationCategoryOptions {
    /// Reports dismissals back to the app.
    #[serde(default)]
    pub custom_dismiss_action: bool,
    /// Allows delivery to a car display.
    #[serde(default)]
    pub allow_in_car_play: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Named group of actions that notification content can opt into.
pub struct NotificationCategory {
    /// Identifier referenced by [`crate::NotificationContent::category_identifier`].
    pub identifier: String,
    /// Actions shown for this category.
    #[serde(default)]
    pub actions: Vec<NotificationAction>,
    /// Intents the category is associated with.
    #[serde(default)]
    pub intent_identifiers: Vec<String>,
    /// Behavior flags.
    #[serde(default)]
    pub options: NotificationCategoryOptions,
}

impl NotificationCategory {
    /// Creates a category with no actions.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            actions: Vec::new(),
            intent_identifiers: Vec::new(),
            options: NotificationCategoryOptions::default(),
        }
    }

    /// Appends an action.
    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Replaces the behavior flags.
    pub fn with_options(mut self, options: NotificationCategoryOptions) -> Self {
        self.options = options;
        self
    }
}
