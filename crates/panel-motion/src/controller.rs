//! The panel transition controller: six commands over one runner.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec3;

use crate::error::Result;
use crate::events::TransitionEvents;
use crate::geometry::GeometryState;
use crate::kind::{TransitionKind, TransitionPhase};
use crate::panel::PanelHandle;
use crate::tween::{TweenEngine, TweenTarget};

/// Per-family animation durations.
///
/// Defaults to 500 ms for each family; the families are independently
/// tunable. `Duration` keeps every value non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDurations {
    /// Movement (show/hide) duration.
    pub movement: Duration,
    /// Scale (scale-in/scale-out) duration.
    pub scale: Duration,
    /// Fade (fade-in/fade-out) duration.
    pub fade: Duration,
}

impl TransitionDurations {
    /// Duration used for the given transition kind.
    pub fn for_kind(&self, kind: TransitionKind) -> Duration {
        match kind {
            TransitionKind::Show | TransitionKind::Hide => self.movement,
            TransitionKind::ScaleIn | TransitionKind::ScaleOut => self.scale,
            TransitionKind::FadeIn | TransitionKind::FadeOut => self.fade,
        }
    }
}

impl Default for TransitionDurations {
    fn default() -> Self {
        const DEFAULT: Duration = Duration::from_millis(500);
        Self {
            movement: DEFAULT,
            scale: DEFAULT,
            fade: DEFAULT,
        }
    }
}

/// Drives a single panel between its resting state and an off-screen or
/// invisible state.
///
/// Each of the six commands runs the same lifecycle: the start channel for
/// the kind fires synchronously, the pre-animation property reset and
/// visibility change (if the kind defines them) are applied, and the
/// animation request is handed to the tweening engine. When the engine
/// later invokes the completion hook, the post-completion visibility change
/// is applied and the complete channel fires.
///
/// # Errors
///
/// A command returns [`Error::EngineRejected`](crate::Error::EngineRejected)
/// when the engine cannot schedule the request. The start notification has
/// already fired at that point and is not rolled back; callers owning retry
/// policy re-invoke the whole command.
///
/// # Overlapping invocations
///
/// Re-invoking a kind while a prior instance is in flight is not guarded:
/// the new request supersedes the old per the engine's overwrite policy, and
/// the stale completion hook may still fire later with its own completion
/// notification. Callers serialize their own calls when ordering matters.
pub struct PanelTransitionController {
    panel: PanelHandle,
    geometry: GeometryState,
    engine: Arc<dyn TweenEngine + Send + Sync>,
    events: TransitionEvents,
    durations: TransitionDurations,
}

impl PanelTransitionController {
    /// Create a controller for `panel`, capturing its resting geometry.
    ///
    /// `panel` may be `None` when the host panel is not wired up; a detached
    /// stand-in at the zero position is attached in its place, so geometry
    /// capture falls back to the zero position. `viewport_height` is read
    /// once, here; later viewport resizes are not tracked.
    pub fn new(
        engine: Arc<dyn TweenEngine + Send + Sync>,
        panel: Option<PanelHandle>,
        viewport_height: f32,
    ) -> Self {
        let panel = panel.unwrap_or_else(PanelHandle::detached);
        let geometry = GeometryState::capture(&panel, viewport_height);
        Self {
            panel,
            geometry,
            engine,
            events: TransitionEvents::new(),
            durations: TransitionDurations::default(),
        }
    }

    /// The controlled panel.
    pub fn panel(&self) -> &PanelHandle {
        &self.panel
    }

    /// The geometry captured at construction.
    pub fn geometry(&self) -> GeometryState {
        self.geometry
    }

    /// The notification channels.
    pub fn events(&self) -> &TransitionEvents {
        &self.events
    }

    /// The configured per-family durations.
    pub fn durations(&self) -> TransitionDurations {
        self.durations
    }

    /// Set the movement (show/hide) duration.
    pub fn set_movement_duration(&mut self, duration: Duration) {
        self.durations.movement = duration;
    }

    /// Set the scale (scale-in/scale-out) duration.
    pub fn set_scale_duration(&mut self, duration: Duration) {
        self.durations.scale = duration;
    }

    /// Set the fade (fade-in/fade-out) duration.
    pub fn set_fade_duration(&mut self, duration: Duration) {
        self.durations.fade = duration;
    }

    /// Show the panel by sliding it to its resting position.
    ///
    /// The panel is made visible before the animation starts.
    pub fn show_panel(&self) -> Result<()> {
        self.run(TransitionKind::Show)
    }

    /// Hide the panel by sliding it to its off-screen position.
    ///
    /// The panel stays visible through the slide and is hidden on completion.
    pub fn hide_panel(&self) -> Result<()> {
        self.run(TransitionKind::Hide)
    }

    /// Grow the panel from zero to its full size.
    ///
    /// The current scale is reset to zero before the request so the grow
    /// effect is visible regardless of prior scale.
    pub fn scale_in(&self) -> Result<()> {
        self.run(TransitionKind::ScaleIn)
    }

    /// Shrink the panel from its full size to zero, hiding it on completion.
    pub fn scale_out(&self) -> Result<()> {
        self.run(TransitionKind::ScaleOut)
    }

    /// Fade the panel in from fully transparent.
    ///
    /// The current opacity is reset to zero before the request.
    pub fn fade_in(&self) -> Result<()> {
        self.run(TransitionKind::FadeIn)
    }

    /// Fade the panel out to fully transparent, hiding it on completion.
    pub fn fade_out(&self) -> Result<()> {
        self.run(TransitionKind::FadeOut)
    }

    /// Target value for the given kind.
    fn target_for(&self, kind: TransitionKind) -> TweenTarget {
        match kind {
            TransitionKind::Show => TweenTarget::AnchoredPosition(self.geometry.original()),
            TransitionKind::Hide => TweenTarget::AnchoredPosition(self.geometry.off_screen()),
            TransitionKind::ScaleIn => TweenTarget::Scale(Vec3::ONE),
            TransitionKind::ScaleOut => TweenTarget::Scale(Vec3::ZERO),
            TransitionKind::FadeIn => TweenTarget::Opacity(1.0),
            TransitionKind::FadeOut => TweenTarget::Opacity(0.0),
        }
    }

    fn run(&self, kind: TransitionKind) -> Result<()> {
        tracing::debug!(
            target: "panel_motion::controller",
            %kind,
            "transition requested"
        );
        self.events.notify(kind, TransitionPhase::Start);

        // Pre-animation resets: force the inbound effect to play from its
        // empty state regardless of what the panel looked like before.
        match kind {
            TransitionKind::ScaleIn => self.panel.set_scale(Vec3::ZERO),
            TransitionKind::FadeIn => self.panel.set_opacity(0.0),
            _ => {}
        }

        if let Some(visible) = kind.pre_start_visibility() {
            self.panel.set_visible(visible);
        }

        let handle = self.engine.animate(
            &self.panel,
            self.target_for(kind),
            self.durations.for_kind(kind),
            kind.easing(),
        )?;

        let panel = self.panel.clone();
        let events = self.events.clone();
        handle.on_complete(move || {
            if let Some(visible) = kind.post_complete_visibility() {
                panel.set_visible(visible);
            }
            events.notify(kind, TransitionPhase::Complete);
            tracing::trace!(
                target: "panel_motion::controller",
                %kind,
                "transition completed"
            );
        });

        Ok(())
    }
}

static_assertions::assert_impl_all!(PanelTransitionController: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::error::Error;
    use crate::panel::PanelState;
    use crate::tween::TweenHandle;
    use glam::Vec2;
    use parking_lot::Mutex;

    /// Engine that records each request and fires its hook immediately,
    /// before `animate` returns. The controller must not assume deferred
    /// completion is the only case.
    #[derive(Default)]
    struct ImmediateEngine {
        requests: Mutex<Vec<(TweenTarget, Duration, Easing)>>,
    }

    impl TweenEngine for ImmediateEngine {
        fn animate(
            &self,
            panel: &PanelHandle,
            target: TweenTarget,
            duration: Duration,
            easing: Easing,
        ) -> Result<TweenHandle> {
            self.requests.lock().push((target, duration, easing));
            match target {
                TweenTarget::AnchoredPosition(position) => panel.set_anchored_position(position),
                TweenTarget::Scale(scale) => panel.set_scale(scale),
                TweenTarget::Opacity(opacity) => panel.set_opacity(opacity),
            }
            let (handle, hook) = TweenHandle::channel();
            hook.fire();
            Ok(handle)
        }
    }

    struct RejectingEngine;

    impl TweenEngine for RejectingEngine {
        fn animate(
            &self,
            _panel: &PanelHandle,
            target: TweenTarget,
            _duration: Duration,
            _easing: Easing,
        ) -> Result<TweenHandle> {
            Err(Error::engine_rejected(target.property(), "scheduler full"))
        }
    }

    fn controller_at(position: Vec2) -> (Arc<ImmediateEngine>, PanelTransitionController) {
        let engine = Arc::new(ImmediateEngine::default());
        let panel = PanelHandle::new(PanelState::new(position));
        let controller =
            PanelTransitionController::new(engine.clone(), Some(panel), 800.0);
        (engine, controller)
    }

    #[test]
    fn test_detached_fallback_geometry() {
        let engine = Arc::new(ImmediateEngine::default());
        let controller = PanelTransitionController::new(engine, None, 600.0);
        assert_eq!(controller.geometry().original(), Vec2::ZERO);
        assert_eq!(controller.geometry().off_screen(), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn test_targets_per_kind() {
        let (engine, controller) = controller_at(Vec2::new(100.0, 50.0));

        controller.show_panel().unwrap();
        controller.hide_panel().unwrap();
        controller.scale_in().unwrap();
        controller.scale_out().unwrap();
        controller.fade_in().unwrap();
        controller.fade_out().unwrap();

        let targets: Vec<TweenTarget> =
            engine.requests.lock().iter().map(|r| r.0).collect();
        assert_eq!(
            targets,
            vec![
                TweenTarget::AnchoredPosition(Vec2::new(100.0, 50.0)),
                TweenTarget::AnchoredPosition(Vec2::new(100.0, 850.0)),
                TweenTarget::Scale(Vec3::ONE),
                TweenTarget::Scale(Vec3::ZERO),
                TweenTarget::Opacity(1.0),
                TweenTarget::Opacity(0.0),
            ]
        );
    }

    #[test]
    fn test_easing_and_duration_per_kind() {
        let (engine, mut controller) = controller_at(Vec2::ZERO);
        controller.set_movement_duration(Duration::from_millis(250));
        controller.set_scale_duration(Duration::from_millis(125));
        controller.set_fade_duration(Duration::from_millis(75));

        controller.hide_panel().unwrap();
        controller.scale_in().unwrap();
        controller.fade_out().unwrap();

        let requests = engine.requests.lock();
        assert_eq!(requests[0].1, Duration::from_millis(250));
        assert_eq!(requests[0].2, Easing::EaseInBack);
        assert_eq!(requests[1].1, Duration::from_millis(125));
        assert_eq!(requests[1].2, Easing::EaseOutBack);
        assert_eq!(requests[2].1, Duration::from_millis(75));
        assert_eq!(requests[2].2, Easing::Linear);
    }

    #[test]
    fn test_default_durations() {
        let durations = TransitionDurations::default();
        for kind in TransitionKind::ALL {
            assert_eq!(durations.for_kind(kind), Duration::from_millis(500));
        }
    }

    #[test]
    fn test_immediate_completion_still_couples_visibility() {
        // A degenerate engine may fire the hook inside `animate`; the
        // post-completion visibility change must not be lost.
        let (_, controller) = controller_at(Vec2::ZERO);
        assert!(controller.panel().is_visible());
        controller.hide_panel().unwrap();
        assert!(!controller.panel().is_visible());
    }

    #[test]
    fn test_engine_rejection_propagates() {
        let controller =
            PanelTransitionController::new(Arc::new(RejectingEngine), None, 600.0);
        let err = controller.fade_out().unwrap_err();
        assert!(matches!(err, Error::EngineRejected { property, .. } if property == "opacity"));
    }
}
