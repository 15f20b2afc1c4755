//! Transition kinds and their fixed per-kind policy.
//!
//! Every behavioral difference between the six transitions is a total
//! function of the kind: which panel property is animated, which easing
//! curve the engine is asked for, and how the visibility flag is coupled to
//! the transition lifecycle. Keeping the policy here leaves the runner in
//! [`crate::controller`] a single generic code path.

use std::fmt;

use crate::easing::Easing;

/// The six panel transitions.
///
/// Inbound kinds (show, scale-in, fade-in) take the panel from hidden to
/// resting; outbound kinds (hide, scale-out, fade-out) take it from resting
/// to off-screen or invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Slide the panel back to its resting position.
    Show,
    /// Slide the panel to its off-screen position.
    Hide,
    /// Grow the panel from zero to unit scale.
    ScaleIn,
    /// Shrink the panel from its current scale to zero.
    ScaleOut,
    /// Fade the panel's opacity up to fully opaque.
    FadeIn,
    /// Fade the panel's opacity down to fully transparent.
    FadeOut,
}

/// Lifecycle phase of a transition, used to key notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// Fired synchronously when the operation is invoked, before any
    /// visibility change and before the animation request.
    Start,
    /// Fired inside the engine's completion callback, after the
    /// post-completion visibility change.
    Complete,
}

impl TransitionKind {
    /// All kinds, in declaration order.
    pub const ALL: [TransitionKind; 6] = [
        TransitionKind::Show,
        TransitionKind::Hide,
        TransitionKind::ScaleIn,
        TransitionKind::ScaleOut,
        TransitionKind::FadeIn,
        TransitionKind::FadeOut,
    ];

    /// Easing curve requested from the engine for this kind.
    ///
    /// These are design constants, not configuration: inbound movement and
    /// scale transitions overshoot then settle, outbound ones anticipate
    /// then commit, and fades stay linear.
    pub fn easing(self) -> Easing {
        match self {
            Self::Show | Self::ScaleIn => Easing::EaseOutBack,
            Self::Hide | Self::ScaleOut => Easing::EaseInBack,
            Self::FadeIn | Self::FadeOut => Easing::Linear,
        }
    }

    /// Visibility forced on the panel before the animation request, if any.
    ///
    /// Inbound kinds force the panel visible so the animation can be seen as
    /// it plays; outbound kinds leave the flag untouched until completion.
    pub fn pre_start_visibility(self) -> Option<bool> {
        match self {
            Self::Show | Self::ScaleIn | Self::FadeIn => Some(true),
            Self::Hide | Self::ScaleOut | Self::FadeOut => None,
        }
    }

    /// Visibility forced on the panel after the animation completes, if any.
    ///
    /// Outbound kinds hide the panel only once it has finished leaving the
    /// screen; inbound kinds are already visible by then.
    pub fn post_complete_visibility(self) -> Option<bool> {
        match self {
            Self::Hide | Self::ScaleOut | Self::FadeOut => Some(false),
            Self::Show | Self::ScaleIn | Self::FadeIn => None,
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Show => "show",
            Self::Hide => "hide",
            Self::ScaleIn => "scale-in",
            Self::ScaleOut => "scale-out",
            Self::FadeIn => "fade-in",
            Self::FadeOut => "fade-out",
        })
    }
}

impl fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Complete => "complete",
        })
    }
}
