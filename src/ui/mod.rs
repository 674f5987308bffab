// SPDX-License-Identifier: MPL-2.0
//! Iced rendering for popup notifications.
//!
//! - [`overlay`] - Container that stacks the active notifications
//! - [`toast`] - One tappable notification card
//! - [`icons`] - Icon glyph mapping
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod icons;
pub mod overlay;
pub mod toast;
