// SPDX-License-Identifier: MPL-2.0
//! Entrance and exit animations.
//!
//! The manager only cares about how long an animation lasts. The effect name
//! is carried through untouched for whichever renderer plays it.

use std::fmt;
use std::time::Duration;

/// Duration used by named effects when the caller gives none.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Named visual effect played when a notification appears or disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationEffect {
    /// No animation; the notification appears or disappears at once.
    #[default]
    None,
    FadeIn,
    FadeOut,
    BounceInDown,
    BounceOutUp,
    SlideInDown,
    SlideOutUp,
    /// Grows horizontally from zero to the resolved width.
    StretchIn,
}

impl AnimationEffect {
    /// Returns the effect's conventional camel-case name (`"bounceInDown"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AnimationEffect::None => "none",
            AnimationEffect::FadeIn => "fadeIn",
            AnimationEffect::FadeOut => "fadeOut",
            AnimationEffect::BounceInDown => "bounceInDown",
            AnimationEffect::BounceOutUp => "bounceOutUp",
            AnimationEffect::SlideInDown => "slideInDown",
            AnimationEffect::SlideOutUp => "slideOutUp",
            AnimationEffect::StretchIn => "stretchIn",
        }
    }

    /// Looks an effect up by its camel-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [AnimationEffect; 8] = [
            AnimationEffect::None,
            AnimationEffect::FadeIn,
            AnimationEffect::FadeOut,
            AnimationEffect::BounceInDown,
            AnimationEffect::BounceOutUp,
            AnimationEffect::SlideInDown,
            AnimationEffect::SlideOutUp,
            AnimationEffect::StretchIn,
        ];
        ALL.into_iter().find(|effect| effect.name() == name)
    }
}

impl fmt::Display for AnimationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An effect together with how long it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationSpec {
    effect: AnimationEffect,
    duration: Duration,
}

impl AnimationSpec {
    /// Creates an animation with an explicit duration.
    ///
    /// [`AnimationEffect::None`] always has a zero duration.
    #[must_use]
    pub fn new(effect: AnimationEffect, duration: Duration) -> Self {
        let duration = if effect == AnimationEffect::None {
            Duration::ZERO
        } else {
            duration
        };
        Self { effect, duration }
    }

    /// Creates an animation that runs for [`DEFAULT_ANIMATION_DURATION`].
    #[must_use]
    pub fn with_default_duration(effect: AnimationEffect) -> Self {
        Self::new(effect, DEFAULT_ANIMATION_DURATION)
    }

    /// No animation.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn effect(&self) -> AnimationEffect {
        self.effect
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns true when the animation completes instantly.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_effect_has_zero_duration() {
        let spec = AnimationSpec::new(AnimationEffect::None, Duration::from_secs(5));
        assert!(spec.is_instant());
        assert!(AnimationSpec::none().is_instant());
    }

    #[test]
    fn named_effect_uses_default_duration() {
        let spec = AnimationSpec::with_default_duration(AnimationEffect::BounceInDown);
        assert_eq!(spec.duration(), Duration::from_millis(1000));
        assert_eq!(spec.effect(), AnimationEffect::BounceInDown);
    }

    #[test]
    fn names_round_trip() {
        for name in ["fadeIn", "fadeOut", "bounceInDown", "bounceOutUp", "stretchIn"] {
            let effect = AnimationEffect::from_name(name).expect("known effect");
            assert_eq!(effect.name(), name);
        }
        assert!(AnimationEffect::from_name("wobble").is_none());
    }
}
