/// Interaction state module
///
/// This module handles all runtime state of the portfolio window:
/// - Intro burst sequencing (intro.rs)
/// - Viewport size tracking and layout presets (viewport.rs)
/// - Artwork selection and zoom/pan (selection.rs)
///
/// Each piece is a plain state machine driven by messages from the
/// UI layer; none of them touch the renderer directly.

pub mod intro;
pub mod selection;
pub mod viewport;
