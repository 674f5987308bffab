// SPDX-License-Identifier: MPL-2.0
use popup_notifications::config::{self, Config, Position};
use popup_notifications::diagnostics::{LifecycleEventKind, RemovalCause};
use popup_notifications::domain::notification::{
    resolve_width, AnimationEffect, AnimationSpec, Content, NotificationKey, Phase, WidthSpec,
};
use popup_notifications::notifications::{
    Message, NotificationArgs, NotificationManager, ShowOptions,
};
use popup_notifications::Error;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn counting_callback() -> (Rc<Cell<u32>>, impl FnOnce(NotificationKey) + 'static) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    (calls, move |_| counter.set(counter.get() + 1))
}

#[test]
fn manual_notification_stays_until_tapped() {
    let start = Instant::now();
    let (calls, on_dismissed) = counting_callback();
    let mut manager = NotificationManager::new();

    let key = manager
        .show_at(
            Content::Text("Hi".into()),
            ShowOptions::new().auto_dismiss_ms(0).on_dismissed(on_dismissed),
            start,
        )
        .expect("valid options");
    assert_eq!(manager.len(), 1);

    manager.handle_message(Message::Tick(start + Duration::from_secs(10)));
    assert!(manager.contains(key));

    manager.handle_message(Message::Tapped(key));
    assert!(manager.is_empty());
    assert_eq!(calls.get(), 1);
}

#[test]
fn info_banner_runs_its_full_lifecycle() {
    let mut manager = NotificationManager::new();
    let key = manager
        .show_info(NotificationArgs::text("Saved"))
        .expect("valid options");

    let handle = manager.get(key).expect("active");
    assert_eq!(handle.auto_dismiss_delay(), Duration::from_millis(3000));
    assert_eq!(handle.entrance().effect(), AnimationEffect::BounceInDown);
    assert_eq!(handle.exit().effect(), AnimationEffect::BounceOutUp);

    let shown_at = handle.created_at();
    let entrance = handle.entrance().duration();
    let exit = handle.exit().duration();

    manager.tick(shown_at + entrance);
    assert_eq!(manager.phase(key), Some(Phase::Visible));

    manager.tick(shown_at + entrance + Duration::from_millis(3000));
    assert_eq!(manager.phase(key), Some(Phase::Dismissing));

    manager.tick(shown_at + entrance + Duration::from_millis(3000) + exit);
    assert!(manager.is_empty());
}

#[test]
fn half_of_four_hundred_is_two_hundred() {
    let spec = WidthSpec::from("50%");
    assert_eq!(resolve_width(Some(&spec), 400.0), Ok(200.0));
}

#[test]
fn percentages_floor_and_are_not_clamped() {
    for (raw, expected) in [("0%", 0.0), ("33%", 132.0), ("100%", 400.0), ("150%", 600.0), ("-10%", -40.0)] {
        let spec = WidthSpec::from(raw);
        assert_eq!(resolve_width(Some(&spec), 400.0), Ok(expected), "{raw}");
    }
}

#[test]
fn back_to_back_shows_get_distinct_keys_in_call_order() {
    let mut manager = NotificationManager::new();
    let first = manager.show_rounded_text("one").expect("valid");
    let second = manager.show_rounded_text("two").expect("valid");

    assert_ne!(first, second);
    assert_eq!(manager.len(), 2);
    let order: Vec<_> = manager.handles().map(|h| h.key()).collect();
    assert_eq!(order, vec![first, second]);
}

#[test]
fn keys_stay_unique_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (0..1000).map(|_| NotificationKey::next()).collect::<Vec<_>>()))
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for key in handle.join().expect("thread panicked") {
            assert!(seen.insert(key), "duplicate key {key}");
        }
    }
    assert_eq!(seen.len(), 4000);
}

#[test]
fn tap_during_entrance_dismisses_exactly_once() {
    let start = Instant::now();
    let (calls, on_dismissed) = counting_callback();
    let mut manager = NotificationManager::new();
    let key = manager
        .show_at(
            Content::Text("Hi".into()),
            ShowOptions::new()
                .entrance(AnimationSpec::with_default_duration(AnimationEffect::FadeIn))
                .exit(AnimationSpec::with_default_duration(AnimationEffect::FadeOut))
                .auto_dismiss_ms(3000)
                .on_dismissed(on_dismissed),
            start,
        )
        .expect("valid options");

    manager.dismiss_at(key, start + Duration::from_millis(100));
    manager.dismiss_at(key, start + Duration::from_millis(200));
    manager.tick(start + Duration::from_secs(60));

    assert!(manager.is_empty());
    assert_eq!(calls.get(), 1);

    let transitions: Vec<_> = manager
        .history()
        .iter()
        .filter(|event| event.key == key)
        .map(|event| event.kind)
        .filter(|kind| {
            matches!(
                kind,
                LifecycleEventKind::Dismissing | LifecycleEventKind::Removed(_)
            )
        })
        .collect();
    assert_eq!(
        transitions,
        vec![
            LifecycleEventKind::Dismissing,
            LifecycleEventKind::Removed(RemovalCause::ExitCompleted),
        ]
    );
}

#[test]
fn malformed_width_is_reported_to_the_caller() {
    let mut manager = NotificationManager::new();
    let result = manager.show_material_style_text(NotificationArgs::text("Hi").width("half"));
    assert_eq!(result, Err(Error::InvalidWidthSpec("half".into())));
    assert!(manager.is_empty());
}

#[test]
fn config_file_drives_manager_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        position: Position::Bottom,
        auto_dismiss_ms: 1500,
        animation_duration_ms: 250,
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, saved);

    let mut manager = NotificationManager::from_config(&loaded);
    let key = manager.show_warning("Careful").expect("valid");
    let handle = manager.get(key).expect("active");
    assert_eq!(handle.auto_dismiss_delay(), Duration::from_millis(1500));
    assert_eq!(handle.entrance().duration(), Duration::from_millis(250));

    dir.close().expect("Failed to close temporary directory");
}
