// SPDX-License-Identifier: MPL-2.0
//! Notification width resolution.
//!
//! A notification declares its width either in absolute units or as a
//! percentage of the viewport. The renderer resolves it against the current
//! viewport width every time it lays the overlay out.

use crate::error::{Error, Result};
use std::fmt;

/// Percentage of the viewport used when a notification declares no width.
pub const DEFAULT_WIDTH_PERCENT: i64 = 90;

/// Declared notification width.
#[derive(Debug, Clone, PartialEq)]
pub enum WidthSpec {
    /// Absolute width, used as-is.
    Absolute(f32),
    /// Raw percentage string, expected to look like `"<integer>%"` with no
    /// surrounding whitespace and no `+` sign.
    Relative(String),
}

impl WidthSpec {
    /// Full viewport width (`"100%"`).
    #[must_use]
    pub fn full() -> Self {
        Self::Relative("100%".to_string())
    }

    /// Checks the width without resolving it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidthSpec`] for a non-finite absolute width or
    /// a percentage string that is not `"<integer>%"`.
    pub fn validate(&self) -> Result<()> {
        match self {
            WidthSpec::Absolute(width) if width.is_finite() => Ok(()),
            WidthSpec::Absolute(width) => Err(Error::InvalidWidthSpec(width.to_string())),
            WidthSpec::Relative(raw) => parse_percent(raw).map(|_| ()),
        }
    }
}

impl From<f32> for WidthSpec {
    fn from(width: f32) -> Self {
        WidthSpec::Absolute(width)
    }
}

impl From<&str> for WidthSpec {
    fn from(raw: &str) -> Self {
        WidthSpec::Relative(raw.to_string())
    }
}

impl From<String> for WidthSpec {
    fn from(raw: String) -> Self {
        WidthSpec::Relative(raw)
    }
}

impl fmt::Display for WidthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthSpec::Absolute(width) => write!(f, "{}", width),
            WidthSpec::Relative(raw) => write!(f, "{}", raw),
        }
    }
}

/// Resolves a declared width against the available viewport width.
///
/// - absolute widths are returned unchanged;
/// - `"p%"` yields `floor(viewport_width * p / 100)`, with no clamping:
///   `"150%"` is wider than the viewport and `"-10%"` is negative;
/// - no width yields [`DEFAULT_WIDTH_PERCENT`] of the viewport.
///
/// # Errors
///
/// Returns [`Error::InvalidWidthSpec`] when the spec is malformed. There is
/// no silent fallback to the default width.
///
/// # Example
///
/// ```
/// use popup_notifications::domain::notification::{resolve_width, WidthSpec};
///
/// let spec = WidthSpec::from("50%");
/// assert_eq!(resolve_width(Some(&spec), 400.0).unwrap(), 200.0);
/// assert_eq!(resolve_width(None, 400.0).unwrap(), 360.0);
/// ```
pub fn resolve_width(spec: Option<&WidthSpec>, viewport_width: f32) -> Result<f32> {
    match spec {
        None => Ok(percent_of(viewport_width, DEFAULT_WIDTH_PERCENT)),
        Some(WidthSpec::Absolute(width)) if width.is_finite() => Ok(*width),
        Some(WidthSpec::Absolute(width)) => Err(Error::InvalidWidthSpec(width.to_string())),
        Some(WidthSpec::Relative(raw)) => {
            let percent = parse_percent(raw)?;
            Ok(percent_of(viewport_width, percent))
        }
    }
}

fn percent_of(viewport_width: f32, percent: i64) -> f32 {
    // f64 keeps the product exact for any realistic viewport before flooring.
    ((f64::from(viewport_width) * percent as f64) / 100.0).floor() as f32
}

fn parse_percent(raw: &str) -> Result<i64> {
    let invalid = || Error::InvalidWidthSpec(raw.to_string());

    // Exactly an optional '-' then ASCII digits; no whitespace or '+'.
    let digits = raw.strip_suffix('%').ok_or_else(invalid)?;
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse::<i64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_width_is_returned_unchanged() {
        let spec = WidthSpec::Absolute(250.5);
        assert_eq!(resolve_width(Some(&spec), 400.0).unwrap(), 250.5);
    }

    #[test]
    fn half_of_four_hundred_is_two_hundred() {
        let spec = WidthSpec::from("50%");
        assert_eq!(resolve_width(Some(&spec), 400.0).unwrap(), 200.0);
    }

    #[test]
    fn percentages_floor_the_result() {
        let spec = WidthSpec::from("33%");
        // 375 * 33 / 100 = 123.75
        assert_eq!(resolve_width(Some(&spec), 375.0).unwrap(), 123.0);
    }

    #[test]
    fn every_percentage_in_range_matches_floor_formula() {
        for viewport in [0.0_f32, 1.0, 320.0, 375.0, 411.0, 1024.0] {
            for p in 0..=100 {
                let spec = WidthSpec::Relative(format!("{p}%"));
                let expected = (f64::from(viewport) * p as f64 / 100.0).floor() as f32;
                assert_eq!(resolve_width(Some(&spec), viewport).unwrap(), expected);
            }
        }
    }

    #[test]
    fn percentages_above_hundred_are_not_clamped() {
        let spec = WidthSpec::from("150%");
        assert_eq!(resolve_width(Some(&spec), 400.0).unwrap(), 600.0);
    }

    #[test]
    fn negative_percentages_are_not_clamped() {
        let spec = WidthSpec::from("-10%");
        assert_eq!(resolve_width(Some(&spec), 400.0).unwrap(), -40.0);
    }

    #[test]
    fn missing_spec_uses_ninety_percent() {
        assert_eq!(resolve_width(None, 400.0).unwrap(), 360.0);
        assert_eq!(resolve_width(None, 375.0).unwrap(), 337.0);
    }

    #[test]
    fn string_without_percent_sign_is_rejected() {
        let spec = WidthSpec::from("50");
        assert_eq!(
            resolve_width(Some(&spec), 400.0),
            Err(Error::InvalidWidthSpec("50".to_string()))
        );
    }

    #[test]
    fn non_numeric_percentage_is_rejected() {
        for raw in [
            "abc%", "%", "12.5%", "", "50%%", " 50% ", "+50%", "50 %", "-%", "--5%",
        ] {
            let spec = WidthSpec::from(raw);
            assert!(
                matches!(resolve_width(Some(&spec), 400.0), Err(Error::InvalidWidthSpec(_))),
                "{raw:?} should be rejected"
            );
            assert!(spec.validate().is_err());
        }
    }

    #[test]
    fn non_finite_absolute_width_is_rejected() {
        let spec = WidthSpec::Absolute(f32::NAN);
        assert!(spec.validate().is_err());
        assert!(resolve_width(Some(&spec), 400.0).is_err());
    }

    #[test]
    fn full_width_is_hundred_percent() {
        assert_eq!(resolve_width(Some(&WidthSpec::full()), 412.0).unwrap(), 412.0);
    }
}
