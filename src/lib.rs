// SPDX-License-Identifier: MPL-2.0
//! `popup_notifications` shows transient popup notifications over an
//! application window.
//!
//! The crate is split the same way the notifications flow through it:
//!
//! - [`domain`]: framework-free value types (keys, width specs, animations,
//!   content, lifecycle phases).
//! - [`notifications`]: the [`NotificationManager`](notifications::NotificationManager)
//!   that owns the active notifications and their dismissal timers.
//! - [`ui`]: an Iced overlay container that renders the active notifications.
//! - [`app`]: a small demo application wiring everything together.

#![doc(html_root_url = "https://docs.rs/popup_notifications/0.3.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;

pub use error::{Error, Result};
pub use notifications::NotificationManager;
