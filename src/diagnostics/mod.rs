// SPDX-License-Identifier: MPL-2.0
//! Lifecycle history for notifications.
//!
//! The manager records every lifecycle transition in a memory-bounded
//! circular buffer. Tests use it to assert that transitions happen exactly
//! once; the demo app prints it on exit.
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`LifecycleEvent`]: One recorded transition

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{LifecycleEvent, LifecycleEventKind, RemovalCause};
