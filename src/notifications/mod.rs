// SPDX-License-Identifier: MPL-2.0
//! Popup notification lifecycle.
//!
//! This module provides the [`NotificationManager`] that owns every active
//! notification, arms its dismissal timers and removes it once its exit
//! animation completes. Renderers read [`NotificationHandle`]s and report
//! taps and finished animations back through [`Message`].
//!
//! # Example
//!
//! ```
//! use popup_notifications::notifications::{NotificationManager, NotificationArgs};
//! use std::time::{Duration, Instant};
//!
//! let mut manager = NotificationManager::new();
//! let key = manager.show_info(NotificationArgs::text("Saved")).unwrap();
//! assert!(manager.contains(key));
//!
//! // Entrance, display delay and exit all elapse in one late tick.
//! manager.tick(Instant::now() + Duration::from_secs(10));
//! assert!(manager.is_empty());
//! ```

mod handle;
mod manager;
mod options;
pub mod presets;
mod scheduler;

pub use handle::NotificationHandle;
pub use manager::{Message, NotificationManager};
pub use options::{DismissCallback, ShowOptions};
pub use presets::{NotificationArgs, PresetDefaults, Severity};
pub use scheduler::{DismissalScheduler, Timer, TimerKind};
