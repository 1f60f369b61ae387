/// UI composition module
///
/// - Hero header, artwork card grid, contact footer (grid.rs)
/// - Lightbox modal with the zoom/pan canvas (modal.rs)
/// - Intro burst overlay (intro.rs)
///
/// Everything here is presentational: widgets read the state machines
/// and emit messages; no state is mutated in this module.

pub mod grid;
pub mod intro;
pub mod modal;
