//! Captured panel geometry: resting and off-screen positions.

use glam::Vec2;

use crate::panel::PanelHandle;

/// The panel's resting position and its derived off-screen position.
///
/// Captured exactly once, when the controller attaches to its panel, and
/// immutable thereafter. Viewport resizes and panel re-attachment are not
/// tracked; construct a new controller for a new resting state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryState {
    original: Vec2,
    off_screen: Vec2,
}

impl GeometryState {
    /// Capture the panel's current anchored position as the resting
    /// position, and derive the off-screen position by offsetting the
    /// vertical component by the viewport height.
    pub fn capture(panel: &PanelHandle, viewport_height: f32) -> Self {
        let original = panel.anchored_position();
        Self {
            original,
            off_screen: Vec2::new(original.x, original.y + viewport_height),
        }
    }

    /// The resting position captured at attach time.
    #[inline]
    pub fn original(&self) -> Vec2 {
        self.original
    }

    /// The derived off-screen position.
    #[inline]
    pub fn off_screen(&self) -> Vec2 {
        self.off_screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelState;

    #[test]
    fn test_off_screen_offsets_vertical_only() {
        let panel = PanelHandle::new(PanelState::new(Vec2::new(100.0, 50.0)));
        let geometry = GeometryState::capture(&panel, 800.0);
        assert_eq!(geometry.original(), Vec2::new(100.0, 50.0));
        assert_eq!(geometry.off_screen(), Vec2::new(100.0, 850.0));
    }

    #[test]
    fn test_capture_is_a_snapshot() {
        let panel = PanelHandle::new(PanelState::new(Vec2::new(10.0, 20.0)));
        let geometry = GeometryState::capture(&panel, 600.0);

        // Later panel movement does not retarget the captured geometry
        panel.set_anchored_position(Vec2::new(-5.0, -5.0));
        assert_eq!(geometry.original(), Vec2::new(10.0, 20.0));
        assert_eq!(geometry.off_screen(), Vec2::new(10.0, 620.0));
    }

    #[test]
    fn test_detached_panel_falls_back_to_zero() {
        let geometry = GeometryState::capture(&PanelHandle::detached(), 480.0);
        assert_eq!(geometry.original(), Vec2::ZERO);
        assert_eq!(geometry.off_screen(), Vec2::new(0.0, 480.0));
    }
}
