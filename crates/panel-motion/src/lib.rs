//! Slide, scale, and fade transitions for a single UI panel.
//!
//! This crate drives a panel between its resting state and an off-screen or
//! invisible state, delegating interpolation to an external tweening engine:
//!
//! - **Controller**: six commands (show, hide, scale-in, scale-out,
//!   fade-in, fade-out), each running the same start/complete lifecycle
//! - **Geometry**: resting position captured once at attach time, off-screen
//!   position derived from the viewport height
//! - **Events**: twelve notification channels, a start and a complete
//!   channel per transition kind
//! - **Visibility coupling**: inbound transitions force the panel visible
//!   before animating; outbound transitions hide it only on completion
//! - **Engine seam**: the [`TweenEngine`] trait plus a one-shot completion
//!   handle; the engine owns timing, interpolation, and property writes
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use panel_motion::{
//!     CompletionHook, Easing, PanelHandle, PanelState, PanelTransitionController,
//!     Result, TransitionKind, TransitionPhase, TweenEngine, TweenHandle, TweenTarget,
//! };
//! use parking_lot::Mutex;
//!
//! // A toy engine: requests pile up and finish when the host ticks them.
//! #[derive(Default)]
//! struct TickEngine {
//!     pending: Mutex<Vec<(PanelHandle, TweenTarget, CompletionHook)>>,
//! }
//!
//! impl TickEngine {
//!     fn finish_all(&self) {
//!         for (panel, target, hook) in self.pending.lock().drain(..) {
//!             match target {
//!                 TweenTarget::AnchoredPosition(p) => panel.set_anchored_position(p),
//!                 TweenTarget::Scale(s) => panel.set_scale(s),
//!                 TweenTarget::Opacity(o) => panel.set_opacity(o),
//!             }
//!             hook.fire();
//!         }
//!     }
//! }
//!
//! impl TweenEngine for TickEngine {
//!     fn animate(
//!         &self,
//!         panel: &PanelHandle,
//!         target: TweenTarget,
//!         _duration: Duration,
//!         _easing: Easing,
//!     ) -> Result<TweenHandle> {
//!         let (handle, hook) = TweenHandle::channel();
//!         self.pending.lock().push((panel.clone(), target, hook));
//!         Ok(handle)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let engine = Arc::new(TickEngine::default());
//! let panel = PanelHandle::new(PanelState::new(glam::Vec2::new(100.0, 50.0)));
//! let controller = PanelTransitionController::new(engine.clone(), Some(panel), 800.0);
//!
//! controller.events().connect(TransitionKind::Hide, TransitionPhase::Complete, || {
//!     // The panel is already invisible when this runs.
//! });
//!
//! controller.hide_panel()?;
//! engine.finish_all();
//! assert!(!controller.panel().is_visible());
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod easing;
pub mod error;
pub mod events;
pub mod geometry;
pub mod kind;
pub mod panel;
pub mod tween;

pub use controller::{PanelTransitionController, TransitionDurations};
pub use easing::{Easing, ease, lerp_eased};
pub use error::{Error, Result};
pub use events::{ConnectionId, TransitionEvents};
pub use geometry::GeometryState;
pub use kind::{TransitionKind, TransitionPhase};
pub use panel::{PanelHandle, PanelState};
pub use tween::{CompletionHook, TweenEngine, TweenHandle, TweenTarget};
