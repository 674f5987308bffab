// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`HistoryCapacity`]: Capacity of the lifecycle event history

mod newtypes;

pub use newtypes::{history_capacity_bounds, HistoryCapacity};
