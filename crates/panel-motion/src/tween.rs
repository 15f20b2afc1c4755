//! The tweening-engine seam: animation requests and completion handles.
//!
//! Interpolation itself is an external service. The controller describes an
//! animation as a property target, a duration, and an easing curve; the
//! engine owns timing and value writes, and reports completion through a
//! one-shot hook.
//!
//! # Completion contract
//!
//! [`TweenHandle::channel`] creates a connected pair: the caller-facing
//! [`TweenHandle`] accepts exactly one completion callback (registration
//! consumes the handle), and the engine-held [`CompletionHook`] is consumed
//! by [`CompletionHook::fire`], so the callback can run at most once.
//! Completion normally arrives on a later scheduling tick; a hook fired
//! before the callback is registered runs the late-registered callback
//! immediately instead of dropping it.

use std::sync::Arc;
use std::time::Duration;

use glam::{Vec2, Vec3};
use parking_lot::Mutex;

use crate::easing::Easing;
use crate::error::Result;
use crate::panel::PanelHandle;

/// Target value for one animation request, by animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Drive the panel's anchored position toward the given point.
    AnchoredPosition(Vec2),
    /// Drive the panel's scale toward the given value.
    Scale(Vec3),
    /// Drive the panel's opacity toward the given value.
    Opacity(f32),
}

impl TweenTarget {
    /// Name of the animated property, for diagnostics.
    pub fn property(self) -> &'static str {
        match self {
            Self::AnchoredPosition(_) => "anchored-position",
            Self::Scale(_) => "scale",
            Self::Opacity(_) => "opacity",
        }
    }
}

/// External interpolation service.
///
/// Implementations interpolate the targeted panel property over `duration`
/// using the requested easing curve, writing through the [`PanelHandle`],
/// and invoke the request's completion hook exactly once, on the same
/// cooperative thread, at a later scheduling tick. Requests on the same
/// property overwrite each other per the engine's own policy; this crate
/// does not serialize them.
pub trait TweenEngine {
    /// Request an animation driving one panel property toward `target`.
    ///
    /// Returns the handle carrying the single completion registration, or
    /// [`Error::EngineRejected`](crate::Error::EngineRejected) when the
    /// request cannot be scheduled.
    fn animate(
        &self,
        panel: &PanelHandle,
        target: TweenTarget,
        duration: Duration,
        easing: Easing,
    ) -> Result<TweenHandle>;
}

type Completion = Box<dyn FnOnce() + Send>;

/// Shared state of one in-flight animation's completion.
struct CompletionSlot {
    /// The registered completion callback, if any.
    callback: Option<Completion>,
    /// Whether the hook already fired.
    finished: bool,
}

/// Caller side of one in-flight animation.
///
/// Ephemeral: registering the completion callback consumes the handle.
pub struct TweenHandle {
    slot: Arc<Mutex<CompletionSlot>>,
}

/// Engine side of one in-flight animation's completion.
///
/// Consumed by [`fire`](Self::fire), so the completion runs at most once.
pub struct CompletionHook {
    slot: Arc<Mutex<CompletionSlot>>,
}

impl TweenHandle {
    /// Create a connected handle/hook pair for one animation request.
    ///
    /// Engines call this inside [`TweenEngine::animate`], return the handle
    /// and keep the hook for their scheduler.
    pub fn channel() -> (TweenHandle, CompletionHook) {
        let slot = Arc::new(Mutex::new(CompletionSlot {
            callback: None,
            finished: false,
        }));
        (
            TweenHandle { slot: slot.clone() },
            CompletionHook { slot },
        )
    }

    /// Register the completion callback.
    ///
    /// If the hook has already fired, the callback runs immediately.
    pub fn on_complete<F>(self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut slot = self.slot.lock();
        if slot.finished {
            drop(slot);
            callback();
        } else {
            slot.callback = Some(Box::new(callback));
        }
    }
}

impl CompletionHook {
    /// Invoke the registered completion callback, if any.
    ///
    /// The lock is released before the callback runs, so a callback may
    /// issue further animation requests re-entrantly.
    pub fn fire(self) {
        let callback = {
            let mut slot = self.slot.lock();
            slot.finished = true;
            slot.callback.take()
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

static_assertions::assert_impl_all!(TweenHandle: Send);
static_assertions::assert_impl_all!(CompletionHook: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fire_runs_registered_callback() {
        let fired = Arc::new(AtomicUsize::new(0));
        let (handle, hook) = TweenHandle::channel();

        let fired_clone = fired.clone();
        handle.on_complete(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        hook.fire();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fire_before_registration_runs_late_callback() {
        let fired = Arc::new(AtomicUsize::new(0));
        let (handle, hook) = TweenHandle::channel();

        hook.fire();

        let fired_clone = fired.clone();
        handle.on_complete(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fire_with_no_callback_is_noop() {
        let (handle, hook) = TweenHandle::channel();
        hook.fire();
        drop(handle);
    }

    #[test]
    fn test_property_names() {
        assert_eq!(
            TweenTarget::AnchoredPosition(Vec2::ZERO).property(),
            "anchored-position"
        );
        assert_eq!(TweenTarget::Scale(Vec3::ONE).property(), "scale");
        assert_eq!(TweenTarget::Opacity(1.0).property(), "opacity");
    }
}
