/// Content store module
///
/// This module owns the read-only data driving the whole display:
/// - Shared data structures (data.rs)
/// - Manifest loading and validation (manifest.rs)
///
/// The store is fixed once the startup load resolves and is never
/// mutated, reordered, or filtered afterwards.

pub mod data;
pub mod manifest;
