//! Output encoding: pixel grid to gradient stops to HTML document.

/// Fixed HTML/CSS template around the stop list.
pub mod document;
/// Per-pixel `radial-gradient` tokens.
pub mod gradient;
/// Output file sink.
pub mod sink;
