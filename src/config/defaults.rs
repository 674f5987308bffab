// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Dismissal**: Auto-dismiss delay of the presets
//! - **Animation**: Entrance/exit duration of named effects
//! - **Overlay**: Position, width and refresh rate of the container
//! - **History**: Lifecycle event history size

use crate::domain::diagnostics::history_capacity_bounds;
use crate::domain::notification::DEFAULT_WIDTH_PERCENT;

// ==========================================================================
// Dismissal Defaults
// ==========================================================================

/// Auto-dismiss delay applied by every preset (in milliseconds).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 3000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of a named entrance or exit effect (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 1000;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Width of a notification that declares none (percent of the viewport).
pub const DEFAULT_NOTIFICATION_WIDTH_PERCENT: i64 = DEFAULT_WIDTH_PERCENT;

/// How often the host delivers a tick to the manager (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Fastest allowed tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Slowest allowed tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Vertical padding between the window edge and the first notification.
pub const OVERLAY_EDGE_PADDING: f32 = 20.0;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of lifecycle events kept by the manager.
pub const DEFAULT_HISTORY_CAPACITY: usize = history_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTO_DISMISS_MS > 0);
    assert!(DEFAULT_ANIMATION_DURATION_MS > 0);
    assert!(DEFAULT_NOTIFICATION_WIDTH_PERCENT > 0 && DEFAULT_NOTIFICATION_WIDTH_PERCENT <= 100);
    assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    assert!(DEFAULT_HISTORY_CAPACITY >= history_capacity_bounds::MIN);
    assert!(DEFAULT_HISTORY_CAPACITY <= history_capacity_bounds::MAX);
};
