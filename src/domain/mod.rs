// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types with no UI framework dependency.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`HistoryCapacity`](diagnostics::HistoryCapacity))
//! - [`notification`]: Notification types ([`NotificationKey`](notification::NotificationKey),
//!   [`WidthSpec`](notification::WidthSpec), [`Phase`](notification::Phase))

pub mod diagnostics;
pub mod notification;
