//! In-process notification center emulation for tests and headless hosts.

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use super::service::{
    NotificationCenter, NotificationCenterError, NotificationCenterErrorKind,
    NotificationCenterFuture,
};
use crate::{
    AuthorizationOptions, AuthorizationStatus, NotificationCategory, NotificationRequest,
    NotificationSetting, NotificationSettings, NotificationTrigger,
};

/// Minimum interval accepted for repeating time-interval triggers.
pub const MIN_REPEATING_INTERVAL_SECS: f64 = 60.0;

/// Scripted outcome for the next authorization prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResponse {
    /// The user accepts; settings become authorized with the requested options enabled.
    Grant,
    /// The user declines; settings become denied.
    Deny,
    /// The prompt fails with this error and settings are left unchanged.
    Fail(NotificationCenterError),
}

#[derive(Debug)]
struct MemoryCenterState {
    settings: NotificationSettings,
    authorization_response: AuthorizationResponse,
    next_add_error: Option<NotificationCenterError>,
    pending: Vec<NotificationRequest>,
    categories: HashSet<NotificationCategory>,
    authorization_prompts: Vec<AuthorizationOptions>,
    settings_reads: usize,
}

impl Default for MemoryCenterState {
    fn default() -> Self {
        Self {
            settings: NotificationSettings::default(),
            authorization_response: AuthorizationResponse::Deny,
            next_add_error: None,
            pending: Vec::new(),
            categories: HashSet::new(),
            authorization_prompts: Vec::new(),
            settings_reads: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory notification center.
///
/// Clones share state, so a test can keep one handle for inspection while another is injected
/// into the code under test.
pub struct MemoryNotificationCenter {
    inner: Rc<RefCell<MemoryCenterState>>,
}

impl MemoryNotificationCenter {
    /// Creates a center reporting `settings`.
    pub fn with_settings(settings: NotificationSettings) -> Self {
        let center = Self::default();
        center.set_settings(settings);
        center
    }

    /// Replaces the reported settings snapshot.
    pub fn set_settings(&self, settings: NotificationSettings) {
        self.inner.borrow_mut().settings = settings;
    }

    /// Returns the current settings snapshot without counting it as a read.
    pub fn settings(&self) -> NotificationSettings {
        self.inner.borrow().settings
    }

    /// Scripts the outcome of subsequent authorization prompts.
    pub fn set_authorization_response(&self, response: AuthorizationResponse) {
        self.inner.borrow_mut().authorization_response = response;
    }

    /// Makes the next [`NotificationCenter::add_request`] call fail with `error`.
    pub fn fail_next_add(&self, error: NotificationCenterError) {
        self.inner.borrow_mut().next_add_error = Some(error);
    }

    /// Returns the registered categories.
    pub fn categories(&self) -> HashSet<NotificationCategory> {
        self.inner.borrow().categories.clone()
    }

    /// Returns the option sets passed to each authorization prompt, oldest first.
    pub fn authorization_prompts(&self) -> Vec<AuthorizationOptions> {
        self.inner.borrow().authorization_prompts.clone()
    }

    /// Returns how many settings snapshots were served.
    pub fn settings_reads(&self) -> usize {
        self.inner.borrow().settings_reads
    }
}

fn validate_request(request: &NotificationRequest) -> Result<(), NotificationCenterError> {
    if request.identifier.trim().is_empty() {
        return Err(NotificationCenterError::new(
            NotificationCenterErrorKind::InvalidIdentifier,
            "request identifier is empty",
        ));
    }
    if let Some(NotificationTrigger::TimeInterval(trigger)) = request.trigger {
        if trigger.seconds.is_nan() || trigger.seconds <= 0.0 {
            return Err(NotificationCenterError::new(
                NotificationCenterErrorKind::InvalidTrigger,
                "time interval must be greater than 0",
            ));
        }
        if trigger.repeats && trigger.seconds < MIN_REPEATING_INTERVAL_SECS {
            return Err(NotificationCenterError::new(
                NotificationCenterErrorKind::InvalidTrigger,
                format!(
                    "time interval must be at least {MIN_REPEATING_INTERVAL_SECS} if repeating"
                ),
            ));
        }
    }
    Ok(())
}

impl NotificationCenter for MemoryNotificationCenter {
    fn notification_settings<'a>(&'a self) -> NotificationCenterFuture<'a, NotificationSettings> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.settings_reads += 1;
            state.settings
        })
    }

    fn request_authorization<'a>(
        &'a self,
        options: &'a AuthorizationOptions,
    ) -> NotificationCenterFuture<'a, Result<bool, NotificationCenterError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.authorization_prompts.push(options.clone());
            match state.authorization_response.clone() {
                AuthorizationResponse::Grant => {
                    state.settings.authorization_status = AuthorizationStatus::Authorized;
                    for option in options.iter() {
                        state
                            .settings
                            .set_setting(option, NotificationSetting::Enabled);
                    }
                    Ok(true)
                }
                AuthorizationResponse::Deny => {
                    state.settings.authorization_status = AuthorizationStatus::Denied;
                    Ok(false)
                }
                AuthorizationResponse::Fail(err) => Err(err),
            }
        })
    }

    fn add_request<'a>(
        &'a self,
        request: NotificationRequest,
    ) -> NotificationCenterFuture<'a, Result<(), NotificationCenterError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if let Some(err) = state.next_add_error.take() {
                return Err(err);
            }
            validate_request(&request)?;
            state
                .pending
                .retain(|pending| pending.identifier != request.identifier);
            state.pending.push(request);
            Ok(())
        })
    }

    fn set_categories(&self, categories: HashSet<NotificationCategory>) {
        self.inner.borrow_mut().categories = categories;
    }

    fn remove_all_pending_requests(&self) {
        self.inner.borrow_mut().pending.clear();
    }

    fn pending_requests<'a>(&'a self) -> NotificationCenterFuture<'a, Vec<NotificationRequest>> {
        Box::pin(async move { self.inner.borrow().pending.clone() })
    }
}
