//! Shared handle to the host panel's animatable state.
//!
//! The panel itself belongs to the host rendering system; this crate only
//! references it. [`PanelHandle`] is the single write surface shared by the
//! host, the transition controller (pre-animation resets, visibility
//! coupling), and the tweening engine (interpolated property writes).

use std::sync::Arc;

use glam::{Vec2, Vec3};
use parking_lot::Mutex;

/// Snapshot of the host panel's animatable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    /// Anchored position within the parent surface.
    pub anchored_position: Vec2,
    /// 3D scale applied to the panel.
    pub scale: Vec3,
    /// Opacity in the range 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Whether the panel is rendered/interactive.
    pub visible: bool,
}

impl PanelState {
    /// Create a resting panel state at the given anchored position.
    pub fn new(anchored_position: Vec2) -> Self {
        Self {
            anchored_position,
            ..Self::default()
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            anchored_position: Vec2::ZERO,
            scale: Vec3::ONE,
            opacity: 1.0,
            visible: true,
        }
    }
}

/// Cloneable shared handle to a panel's state.
///
/// Clones refer to the same underlying panel. All accessors take and release
/// the internal lock per call, so a reader inside a notification callback
/// never deadlocks against the writer that triggered it.
#[derive(Debug, Clone)]
pub struct PanelHandle {
    inner: Arc<Mutex<PanelState>>,
}

impl PanelHandle {
    /// Create a handle over the given initial state.
    pub fn new(state: PanelState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Stand-in panel used when the host panel is not wired up.
    ///
    /// Sits at the zero position with unit scale, fully opaque and visible,
    /// so geometry capture over it yields the zero-position fallback.
    pub fn detached() -> Self {
        Self::new(PanelState::default())
    }

    /// Copy out the current state.
    pub fn state(&self) -> PanelState {
        *self.inner.lock()
    }

    /// Current anchored position.
    pub fn anchored_position(&self) -> Vec2 {
        self.inner.lock().anchored_position
    }

    /// Current scale.
    pub fn scale(&self) -> Vec3 {
        self.inner.lock().scale
    }

    /// Current opacity.
    pub fn opacity(&self) -> f32 {
        self.inner.lock().opacity
    }

    /// Check if the panel is visible.
    pub fn is_visible(&self) -> bool {
        self.inner.lock().visible
    }

    /// Set the anchored position.
    pub fn set_anchored_position(&self, position: Vec2) {
        self.inner.lock().anchored_position = position;
    }

    /// Set the scale.
    pub fn set_scale(&self, scale: Vec3) {
        self.inner.lock().scale = scale;
    }

    /// Set the opacity, clamped to the 0.0 to 1.0 range.
    pub fn set_opacity(&self, opacity: f32) {
        self.inner.lock().opacity = opacity.clamp(0.0, 1.0);
    }

    /// Set whether the panel is visible.
    pub fn set_visible(&self, visible: bool) {
        self.inner.lock().visible = visible;
    }
}

impl Default for PanelHandle {
    fn default() -> Self {
        Self::detached()
    }
}

static_assertions::assert_impl_all!(PanelHandle: Send, Sync);
