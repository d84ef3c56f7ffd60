#![forbid(unsafe_code)]

//! Pan/zoom viewport state.
//!
//! The viewport owns how the laid-out tree is seen: a zoom factor bounded
//! to [`MIN_ZOOM`]..=[`MAX_ZOOM`], a pan offset, the drag anchor while a
//! pointer drag is active, and the fullscreen flag. All transitions are
//! synchronous and pure; the one asynchronous concern (fullscreen) is
//! driven from outside via [`Viewport::set_fullscreen`] once the host
//! reports the change.
//!
//! Rendering applies [`ViewTransform`]: translate by pan, then scale by
//! zoom, so `screen = pan + zoom * world`. Panning and zooming move the
//! whole tree as one; relative node positions never change.

use orgmap_core::geometry::{ChartPoint, ChartRect, ChartVec};

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.5;
/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;
/// Zoom change per button press.
pub const ZOOM_STEP: f64 = 0.2;
/// Zoom change per wheel tick, deliberately finer than the buttons.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Vertical gap between the container top and the tree after a recenter.
const FIT_TOP_MARGIN: f64 = 40.0;

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// The world-to-screen mapping: translate by `pan`, then scale by `zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub pan: ChartVec,
    pub zoom: f64,
}

impl ViewTransform {
    #[must_use]
    pub fn to_screen(&self, world: ChartPoint) -> ChartPoint {
        ChartPoint::new(self.pan.x + self.zoom * world.x, self.pan.y + self.zoom * world.y)
    }

    /// Inverse mapping, used to hit-test raw pointer coordinates.
    #[must_use]
    pub fn to_world(&self, screen: ChartPoint) -> ChartPoint {
        // Zoom is clamped well away from zero, so the division is safe.
        ChartPoint::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Pan/zoom/drag/fullscreen state of the chart surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: ChartVec,
    /// `pointer - pan` recorded at drag start; present while dragging.
    drag_anchor: Option<ChartVec>,
    fullscreen: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: ChartVec::ZERO,
            drag_anchor: None,
            fullscreen: false,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> ChartVec {
        self.pan
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Zoom as a whole percentage for the host's readout.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            pan: self.pan,
            zoom: self.zoom,
        }
    }

    // -- Zoom -------------------------------------------------------------

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Wheel zoom: positive delta zooms in, negative zooms out, zero is a
    /// no-op. Hosts map their own wheel convention onto the sign.
    pub fn wheel(&mut self, delta: f64) {
        if delta == 0.0 {
            return;
        }
        let step = if delta > 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            -WHEEL_ZOOM_STEP
        };
        self.zoom = (self.zoom + step).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    // -- Drag -------------------------------------------------------------

    /// Start a drag at the given pointer position. Dragging is relative:
    /// the pointer's offset from the current pan is recorded so the tree
    /// follows the pointer instead of jumping to it.
    pub fn begin_drag(&mut self, at: ChartPoint) {
        self.drag_anchor = Some(at - ChartPoint::new(self.pan.x, self.pan.y));
    }

    /// Continue an active drag. Ignored when no drag is in progress.
    pub fn drag(&mut self, to: ChartPoint) {
        if let Some(anchor) = self.drag_anchor {
            self.pan = to - ChartPoint::new(anchor.x, anchor.y);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    // -- Fullscreen -------------------------------------------------------

    /// Record the host-reported fullscreen state. The flag never flips
    /// optimistically; only the host's change notification lands here.
    pub fn set_fullscreen(&mut self, active: bool) {
        self.fullscreen = active;
    }

    // -- Centering --------------------------------------------------------

    /// Restore the default view: zoom 1.0, drag cleared, and the content
    /// centered horizontally in the container with a small top margin.
    /// Serves both the reset and fit-to-screen controls.
    pub fn reset(&mut self, content: ChartRect, container_width: f64) {
        self.zoom = 1.0;
        self.drag_anchor = None;
        self.pan = Self::centered_pan(content, container_width, self.zoom);
    }

    /// Re-center horizontally after a container resize, preserving zoom
    /// and the vertical scroll position.
    pub fn recenter(&mut self, content: ChartRect, container_width: f64) {
        self.pan.x = container_width / 2.0 - self.zoom * content.center().x;
    }

    fn centered_pan(content: ChartRect, container_width: f64, zoom: f64) -> ChartVec {
        ChartVec::new(
            container_width / 2.0 - zoom * content.center().x,
            FIT_TOP_MARGIN - zoom * content.top(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> ChartPoint {
        ChartPoint::new(x, y)
    }

    #[test]
    fn defaults() {
        let vp = Viewport::new();
        assert!((vp.zoom() - 1.0).abs() < 1e-9);
        assert_eq!(vp.pan(), ChartVec::ZERO);
        assert!(!vp.is_dragging());
        assert!(!vp.is_fullscreen());
        assert_eq!(vp.zoom_percent(), 100);
    }

    #[test]
    fn zoom_in_steps_and_clamps() {
        let mut vp = Viewport::new();
        vp.zoom_in();
        assert!((vp.zoom() - 1.2).abs() < 1e-9);

        for _ in 0..50 {
            vp.zoom_in();
        }
        assert!((vp.zoom() - MAX_ZOOM).abs() < 1e-12);
    }

    #[test]
    fn zoom_out_steps_and_clamps() {
        let mut vp = Viewport::new();
        vp.zoom_out();
        assert!((vp.zoom() - 0.8).abs() < 1e-9);

        for _ in 0..50 {
            vp.zoom_out();
        }
        assert!((vp.zoom() - MIN_ZOOM).abs() < 1e-12);
    }

    #[test]
    fn wheel_uses_finer_steps() {
        let mut vp = Viewport::new();
        vp.wheel(1.0);
        assert!((vp.zoom() - 1.1).abs() < 1e-9);
        vp.wheel(-3.5);
        assert!((vp.zoom() - 1.0).abs() < 1e-9);
        vp.wheel(0.0);
        assert!((vp.zoom() - 1.0).abs() < 1e-9);

        for _ in 0..100 {
            vp.wheel(-0.01);
        }
        assert!((vp.zoom() - MIN_ZOOM).abs() < 1e-12);
    }

    #[test]
    fn zoom_percent_rounds() {
        let mut vp = Viewport::new();
        vp.zoom_in();
        assert_eq!(vp.zoom_percent(), 120);
        vp.zoom_out();
        vp.zoom_out();
        assert_eq!(vp.zoom_percent(), 80);
    }

    #[test]
    fn drag_moves_pan_by_pointer_delta() {
        let mut vp = Viewport::new();
        let before = vp.pan();

        vp.begin_drag(point(10.0, 20.0));
        assert!(vp.is_dragging());
        vp.drag(point(30.0, 25.0));

        let pan = vp.pan();
        assert!((pan.x - (before.x + 20.0)).abs() < 1e-9);
        assert!((pan.y - (before.y + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn drag_without_begin_is_ignored() {
        let mut vp = Viewport::new();
        vp.drag(point(100.0, 100.0));
        assert_eq!(vp.pan(), ChartVec::ZERO);
    }

    #[test]
    fn moves_after_end_drag_are_ignored() {
        let mut vp = Viewport::new();
        vp.begin_drag(point(0.0, 0.0));
        vp.drag(point(15.0, -5.0));
        vp.end_drag();
        assert!(!vp.is_dragging());

        let parked = vp.pan();
        vp.drag(point(500.0, 500.0));
        assert_eq!(vp.pan(), parked);
    }

    #[test]
    fn second_begin_drag_reanchors() {
        let mut vp = Viewport::new();
        vp.begin_drag(point(0.0, 0.0));
        vp.drag(point(10.0, 0.0));
        vp.end_drag();

        // New drag from a new position must not replay the old offset.
        vp.begin_drag(point(100.0, 100.0));
        vp.drag(point(101.0, 100.0));
        assert!((vp.pan().x - 11.0).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_zoom_and_centers() {
        let mut vp = Viewport::new();
        vp.zoom_in();
        vp.zoom_in();
        vp.begin_drag(point(0.0, 0.0));
        vp.drag(point(123.0, 456.0));

        let content = ChartRect::new(-165.0, -20.0, 330.0, 240.0);
        vp.reset(content, 800.0);

        assert!((vp.zoom() - 1.0).abs() < 1e-12);
        assert!(!vp.is_dragging());
        // Content center x = 0 lands at container center 400.
        assert!((vp.pan().x - 400.0).abs() < 1e-9);
        // Content top -20 lands at the top margin.
        assert!((vp.pan().y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn reset_leaves_fullscreen_alone() {
        let mut vp = Viewport::new();
        vp.set_fullscreen(true);
        vp.reset(ChartRect::new(0.0, 0.0, 100.0, 100.0), 500.0);
        assert!(vp.is_fullscreen());
    }

    #[test]
    fn recenter_preserves_zoom_and_vertical_pan() {
        let mut vp = Viewport::new();
        let content = ChartRect::new(-100.0, 0.0, 200.0, 300.0);
        vp.reset(content, 800.0);
        vp.zoom_in();
        let y_before = vp.pan().y;
        let zoom_before = vp.zoom();

        vp.recenter(content, 1200.0);

        assert!((vp.zoom() - zoom_before).abs() < 1e-12);
        assert!((vp.pan().y - y_before).abs() < 1e-12);
        let expected_x = 600.0 - zoom_before * content.center().x;
        assert!((vp.pan().x - expected_x).abs() < 1e-9);
    }

    #[test]
    fn transform_maps_world_to_screen() {
        let mut vp = Viewport::new();
        vp.begin_drag(point(0.0, 0.0));
        vp.drag(point(50.0, 30.0));
        vp.end_drag();
        vp.zoom_in(); // 1.2

        let t = vp.transform();
        let screen = t.to_screen(point(100.0, 0.0));
        assert!((screen.x - (50.0 + 1.2 * 100.0)).abs() < 1e-9);
        assert!((screen.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn transform_round_trips() {
        let mut vp = Viewport::new();
        vp.zoom_in();
        vp.zoom_in();
        vp.begin_drag(point(0.0, 0.0));
        vp.drag(point(-40.0, 75.0));

        let t = vp.transform();
        let p = point(12.5, -99.0);
        let back = t.to_world(t.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn fullscreen_flag_tracks_host_reports() {
        let mut vp = Viewport::new();
        vp.set_fullscreen(true);
        assert!(vp.is_fullscreen());
        vp.set_fullscreen(false);
        assert!(!vp.is_fullscreen());
    }
}
