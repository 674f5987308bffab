// SPDX-License-Identifier: MPL-2.0
//! Demo application showing every notification preset.
//!
//! The `App` struct owns a [`NotificationManager`], forwards overlay messages
//! and ticks to it, and tracks the window width so relative notification
//! widths resolve against the real viewport.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Demo, Flags, Message};

use crate::config::{self, Config, Position};
use crate::notifications::NotificationManager;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    config: Config,
    manager: NotificationManager,
    position: Position,
    /// Current window width in logical pixels.
    viewport_width: f32,
    /// Time of the last tick; animations are drawn at this instant.
    now: Instant,
    /// Last error reported by a `show` call.
    last_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("active", &self.manager.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl App {
    fn with_config(config: Config) -> Self {
        Self {
            manager: NotificationManager::from_config(&config),
            position: config.position,
            config,
            viewport_width: WINDOW_DEFAULT_WIDTH as f32,
            now: Instant::now(),
            last_error: None,
        }
    }

    /// Initializes application state from the config file and the flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load config, using defaults");
            Config::default()
        });

        let mut app = Self::with_config(config);
        if let Some(position) = flags.position {
            app.position = position;
        }
        tracing::info!(position = ?app.position, "demo started");
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.manager.len() {
            0 => "Popup Notifications".to_string(),
            n => format!("Popup Notifications ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.config.tick_interval(),
            !self.manager.is_empty(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => self.manager.handle_message(message),
            Message::Show(demo) => {
                self.now = Instant::now();
                match update::show_demo(&mut self.manager, demo) {
                    Ok(key) => {
                        tracing::debug!(%key, ?demo, "demo notification shown");
                        self.last_error = None;
                    }
                    Err(err) => {
                        tracing::warn!(%err, ?demo, "demo notification rejected");
                        self.last_error = Some(err.to_string());
                    }
                }
            }
            Message::DismissNewest => update::dismiss_newest(&mut self.manager),
            Message::RemoveOldest => update::remove_oldest(&mut self.manager),
            Message::ClearAll => self.manager.clear(),
            Message::TogglePosition => self.position = update::toggled(self.position),
            Message::WindowResized(size) => self.viewport_width = size.width,
            Message::Tick(now) => {
                self.now = now;
                self.manager.tick(now);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            manager: &self.manager,
            position: self.position,
            viewport_width: self.viewport_width,
            now: self.now,
            last_error: self.last_error.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn new_uses_config_file_and_flag_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "position = \"bottom\"\nauto_dismiss_ms = 500\n")
            .expect("failed to write config");

        let (app, _task) = App::new(Flags {
            position: None,
            config_path: Some(path.clone()),
        });
        assert_eq!(app.position, Position::Bottom);
        assert_eq!(
            app.manager.preset_defaults().auto_dismiss,
            Duration::from_millis(500)
        );

        let (app, _task) = App::new(Flags {
            position: Some(Position::Top),
            config_path: Some(path),
        });
        assert_eq!(app.position, Position::Top);
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (app, _task) = App::new(Flags {
            position: None,
            config_path: Some(temp_dir.path().join("absent.toml")),
        });
        assert_eq!(app.config, Config::default());
    }

    #[test]
    fn tapping_a_toast_dismisses_it() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Demo::Sticky));
        let key = app.manager.handles().next().expect("shown").key();

        let _ = app.update(Message::Notification(notifications::Message::Tapped(key)));
        assert!(app.manager.is_empty());
    }

    #[test]
    fn ticks_advance_the_manager() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Demo::Info));
        assert_eq!(app.manager.len(), 1);

        let later = Instant::now() + Duration::from_secs(10);
        let _ = app.update(Message::Tick(later));
        assert!(app.manager.is_empty());
        assert_eq!(app.now, later);
    }

    #[test]
    fn rejected_show_is_reported() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Demo::InvalidWidth));
        assert!(app.manager.is_empty());
        assert!(app.last_error.as_deref().unwrap_or_default().contains("wide"));

        let _ = app.update(Message::Show(Demo::RoundedText));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn resize_updates_viewport_width() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(1024.0, 768.0)));
        assert_eq!(app.viewport_width, 1024.0);
    }

    #[test]
    fn title_counts_active_notifications() {
        let mut app = App::default();
        assert_eq!(app.title(), "Popup Notifications");
        let _ = app.update(Message::Show(Demo::Sticky));
        assert_eq!(app.title(), "Popup Notifications (1)");
    }

    #[test]
    fn view_renders_with_notifications() {
        let mut app = App::default();
        for demo in Demo::ALL {
            let _ = app.update(Message::Show(demo));
        }
        let _ = app.view();
        let _ = app.update(Message::TogglePosition);
        let _ = app.view();
    }
}
