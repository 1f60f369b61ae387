/// Viewport size tracking
///
/// The window size drives two layout decisions: which burst preset the
/// intro uses, and whether the lightbox modal may open at all. Both must
/// read the tracked size captured here, never a live value queried inside
/// an animation callback, so the initial render and later callbacks agree.

/// Width at or below which the mobile layout applies, in logical pixels.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Geometry preset for the intro burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstLayout {
    /// Radius of the circle the thumbnails fly out to
    pub radius: f32,
    /// Edge length of each (square) thumbnail
    pub thumb_size: f32,
}

/// Small circle and thumbnails for narrow windows.
const MOBILE_BURST: BurstLayout = BurstLayout {
    radius: 100.0,
    thumb_size: 80.0,
};

/// Full-size circle and thumbnails for desktop windows.
const DESKTOP_BURST: BurstLayout = BurstLayout {
    radius: 200.0,
    thumb_size: 160.0,
};

/// Tracks the current window size in logical pixels.
///
/// The tracker starts unmeasured (0 x 0) until the startup size query or
/// the first resize event lands. While unmeasured, every width branch
/// takes the mobile side and desktop-only behavior stays suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportTracker {
    width: f32,
    height: f32,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new window size, from the startup query or a resize event.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Whether a real measurement has landed yet.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }

    /// Mobile layout applies at or below the breakpoint, and while the
    /// size is still unknown.
    pub fn is_mobile(&self) -> bool {
        !self.is_measured() || self.width <= MOBILE_BREAKPOINT
    }

    /// Burst geometry for the current size.
    pub fn burst_layout(&self) -> BurstLayout {
        if self.is_mobile() {
            MOBILE_BURST
        } else {
            DESKTOP_BURST
        }
    }

    /// Whether the desktop-only lightbox may be shown.
    pub fn modal_enabled(&self) -> bool {
        self.is_measured() && self.width > MOBILE_BREAKPOINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_is_mobile_and_suppresses_modal() {
        let viewport = ViewportTracker::new();
        assert!(!viewport.is_measured());
        assert!(viewport.is_mobile());
        assert!(!viewport.modal_enabled());
        assert_eq!(viewport.burst_layout(), MOBILE_BURST);
    }

    #[test]
    fn test_breakpoint_is_exclusive_at_768() {
        let mut viewport = ViewportTracker::new();

        viewport.resize(768.0, 1024.0);
        assert!(viewport.is_mobile());
        assert!(!viewport.modal_enabled());

        viewport.resize(769.0, 1024.0);
        assert!(!viewport.is_mobile());
        assert!(viewport.modal_enabled());
    }

    #[test]
    fn test_presets_follow_breakpoint() {
        let mut viewport = ViewportTracker::new();

        viewport.resize(600.0, 800.0);
        assert_eq!(viewport.burst_layout().radius, 100.0);
        assert_eq!(viewport.burst_layout().thumb_size, 80.0);

        viewport.resize(1280.0, 800.0);
        assert_eq!(viewport.burst_layout().radius, 200.0);
        assert_eq!(viewport.burst_layout().thumb_size, 160.0);
    }

    #[test]
    fn test_resize_applies_immediately() {
        let mut viewport = ViewportTracker::new();

        viewport.resize(1024.0, 768.0);
        assert!(viewport.modal_enabled());

        // Shrinking below the breakpoint flips the gate with no delay
        viewport.resize(600.0, 768.0);
        assert!(!viewport.modal_enabled());
    }
}
