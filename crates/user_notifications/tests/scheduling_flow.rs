use std::rc::Rc;

use futures::executor::block_on;
use notification_host::{
    AuthorizationOption, AuthorizationOptions, AuthorizationResponse, AuthorizationStatus,
    DateComponents, MemoryNotificationCenter, NotificationCenter, NotificationCenterErrorKind,
    NotificationContent, NotificationSetting, NotificationTrigger,
};
use user_notifications::{UserNotifications, UserNotificationsConfig, UserNotificationsError};

fn reminder(body: &str) -> NotificationContent {
    NotificationContent::new("Reminder", body).with_category("reminder")
}

#[test]
fn authorize_then_schedule_then_unschedule() {
    let center = MemoryNotificationCenter::default();
    center.set_authorization_response(AuthorizationResponse::Grant);
    let facade = UserNotifications::new(Rc::new(center.clone()));

    let alert_and_sound =
        AuthorizationOptions::from([AuthorizationOption::Alert, AuthorizationOption::Sound]);
    let unauthorized = block_on(facade.schedule_local_notification(
        "morning",
        &alert_and_sound,
        reminder("Stretch"),
        None,
    ));
    assert_eq!(unauthorized, Err(UserNotificationsError::Unauthorized));

    assert_eq!(block_on(facade.request_authorization(&alert_and_sound)), Ok(true));
    assert_eq!(block_on(facade.authorized_options()), alert_and_sound);

    let daily = NotificationTrigger::calendar(DateComponents::daily_at(7, 45), true);
    block_on(facade.schedule_local_notification(
        "morning",
        &alert_and_sound,
        reminder("Stretch"),
        Some(daily),
    ))
    .expect("schedule morning");
    block_on(facade.schedule_local_notification(
        "evening",
        &AuthorizationOptions::from([AuthorizationOption::Alert]),
        reminder("Read"),
        Some(NotificationTrigger::calendar(DateComponents::daily_at(21, 0), true)),
    ))
    .expect("schedule evening");

    let with_badge =
        alert_and_sound.union(&AuthorizationOptions::from([AuthorizationOption::Badge]));
    assert_eq!(
        block_on(facade.schedule_local_notification("noon", &with_badge, reminder("Lunch"), None)),
        Err(UserNotificationsError::UnauthorizedOptions {
            missing: AuthorizationOptions::from([AuthorizationOption::Badge]),
        })
    );

    let pending = block_on(center.pending_requests());
    let identifiers: Vec<_> = pending.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(identifiers, ["morning", "evening"]);
    assert_eq!(pending[0].trigger, Some(daily));

    facade.unschedule_all_local_notifications();
    facade.unschedule_all_local_notifications();
    assert!(block_on(center.pending_requests()).is_empty());
}

#[test]
fn invalid_trigger_surfaces_as_unhandled_center_error() {
    let center = MemoryNotificationCenter::default();
    center.set_authorization_response(AuthorizationResponse::Grant);
    let facade = UserNotifications::new(Rc::new(center.clone()));
    block_on(facade.request_default_authorization()).expect("authorize");

    let err = block_on(facade.schedule_with_default_options(
        "too-often",
        reminder("Ping"),
        Some(NotificationTrigger::time_interval(10.0, true)),
    ))
    .expect_err("short repeating interval is rejected by the center");

    match err {
        UserNotificationsError::Unhandled(cause) => {
            assert_eq!(cause.kind, NotificationCenterErrorKind::InvalidTrigger);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn disabling_a_capability_after_authorization_blocks_scheduling() {
    let center = MemoryNotificationCenter::default();
    center.set_authorization_response(AuthorizationResponse::Grant);
    let facade = UserNotifications::with_config(
        Rc::new(center.clone()),
        UserNotificationsConfig::from_json_str(
            r#"{"default_authorization_options":["alert","sound"],"default_required_options":["sound"]}"#,
        )
        .expect("config"),
    );
    assert_eq!(block_on(facade.request_default_authorization()), Ok(true));

    let mut settings = center.settings();
    settings.sound_setting = NotificationSetting::Disabled;
    center.set_settings(settings);

    assert_eq!(
        block_on(facade.schedule_with_default_options("id", reminder("x"), None)),
        Err(UserNotificationsError::UnauthorizedOptions {
            missing: AuthorizationOptions::from([AuthorizationOption::Sound]),
        })
    );

    settings.authorization_status = AuthorizationStatus::Denied;
    center.set_settings(settings);
    assert_eq!(
        block_on(facade.schedule_with_default_options("id", reminder("x"), None)),
        Err(UserNotificationsError::Unauthorized)
    );
}

#[test]
fn concurrent_schedules_resolve_independently() {
    let center = MemoryNotificationCenter::default();
    center.set_authorization_response(AuthorizationResponse::Grant);
    let facade = UserNotifications::new(Rc::new(center.clone()));
    block_on(facade.request_default_authorization()).expect("authorize");

    let alert = AuthorizationOptions::from([AuthorizationOption::Alert]);
    let car_play = AuthorizationOptions::from([AuthorizationOption::CarPlay]);
    let (first, second, third) = block_on(async {
        futures::join!(
            facade.schedule_local_notification("a", &alert, reminder("a"), None),
            facade.schedule_local_notification("b", &car_play, reminder("b"), None),
            facade.schedule_local_notification("c", &alert, reminder("c"), None),
        )
    });

    assert_eq!(first, Ok(()));
    assert_eq!(
        second,
        Err(UserNotificationsError::UnauthorizedOptions {
            missing: car_play,
        })
    );
    assert_eq!(third, Ok(()));
    assert_eq!(block_on(center.pending_requests()).len(), 2);
}
