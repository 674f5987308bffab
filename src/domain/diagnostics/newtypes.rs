// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// History Capacity Bounds
// =============================================================================

/// Lifecycle history bounds (16 to 4096 events).
pub mod history_capacity_bounds {
    /// Minimum history capacity.
    pub const MIN: usize = 16;
    /// Maximum history capacity.
    pub const MAX: usize = 4096;
    /// Default history capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Number of lifecycle events the manager keeps before evicting the oldest.
///
/// Values outside 16–4096 are clamped, so a hand-edited config cannot make
/// the history unbounded or useless.
///
/// # Example
///
/// ```
/// use popup_notifications::domain::diagnostics::HistoryCapacity;
///
/// assert_eq!(HistoryCapacity::new(512).value(), 512);
/// assert_eq!(HistoryCapacity::new(1).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= history_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= history_capacity_bounds::MAX
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_capacity_clamps() {
        assert_eq!(HistoryCapacity::new(0).value(), history_capacity_bounds::MIN);
        assert_eq!(
            HistoryCapacity::new(100_000).value(),
            history_capacity_bounds::MAX
        );
    }

    #[test]
    fn history_capacity_default() {
        assert_eq!(
            HistoryCapacity::default().value(),
            history_capacity_bounds::DEFAULT
        );
    }

    #[test]
    fn history_capacity_min_max() {
        assert!(HistoryCapacity::new(history_capacity_bounds::MIN).is_min());
        assert!(HistoryCapacity::new(history_capacity_bounds::MAX).is_max());
        assert!(!HistoryCapacity::new(256).is_min());
        assert!(!HistoryCapacity::new(256).is_max());
    }
}
