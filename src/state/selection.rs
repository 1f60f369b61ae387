/// Artwork selection and zoom/pan state
///
/// Clicking a grid card enlarges that artwork in a lightbox; clicking the
/// backdrop closes it. While open, the image carries a zoom scale and, in
/// the wheel-drag mode, a pan offset. Opening any artwork resets both, so
/// no zoom leaks from one selection to the next.

use cgmath::Vector2;

use crate::config::ZoomMode;

/// Zoom steps above 1.0 allowed before saturating at the 5.0 ceiling.
const MAX_STEPS: u8 = 40;

/// Which artwork, if any, is enlarged. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(u32),
}

/// Zoom and pan transform of the enlarged image.
///
/// The scale is kept as a count of 0.1 steps above fit, so clamping at
/// 1.0 and 5.0 is exact and a zoom-in/zoom-out round trip lands back on
/// fit with no float drift. The offset is unconstrained screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPan {
    steps: u8,
    offset: Vector2<f32>,
}

impl Default for ZoomPan {
    fn default() -> Self {
        Self {
            steps: 0,
            offset: Vector2::new(0.0, 0.0),
        }
    }
}

impl ZoomPan {
    /// Scale factor applied to the fitted image. 1.0 = fit, capped at 5.0.
    pub fn scale(&self) -> f32 {
        1.0 + f32::from(self.steps) / 10.0
    }

    pub fn offset(&self) -> Vector2<f32> {
        self.offset
    }

    fn step_by(&mut self, notches: i32) {
        let stepped = i32::from(self.steps) + notches;
        self.steps = stepped.clamp(0, i32::from(MAX_STEPS)) as u8;
    }
}

/// The lightbox state machine: selection plus zoom/pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionController {
    mode: ZoomMode,
    selection: Selection,
    zoom: ZoomPan,
}

impl SelectionController {
    pub fn new(mode: ZoomMode) -> Self {
        Self {
            mode,
            selection: Selection::Closed,
            zoom: ZoomPan::default(),
        }
    }

    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn zoom(&self) -> &ZoomPan {
        &self.zoom
    }

    /// Enlarge artwork `id`. Always recorded, even below the mobile
    /// breakpoint where no overlay is shown; the transform starts fresh.
    pub fn open(&mut self, id: u32) {
        self.selection = Selection::Open(id);
        self.zoom = ZoomPan::default();
    }

    /// Backdrop click.
    pub fn close(&mut self) {
        self.selection = Selection::Closed;
    }

    /// One button press in the stepped mode.
    pub fn zoom_in(&mut self) {
        self.zoom_by(1);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-1);
    }

    /// Adjust the scale by whole steps (positive = in). Wheel notches and
    /// buttons both land here. A no-op while nothing is selected.
    pub fn zoom_by(&mut self, notches: i32) {
        if self.selection == Selection::Closed {
            return;
        }
        self.zoom.step_by(notches);
    }

    /// Replace the pan offset from a drag. Only meaningful in wheel-drag
    /// mode while an artwork is open; otherwise a no-op.
    pub fn pan_to(&mut self, offset: Vector2<f32>) {
        if self.selection == Selection::Closed || self.mode != ZoomMode::WheelDrag {
            return;
        }
        self.zoom.offset = offset;
    }
}
