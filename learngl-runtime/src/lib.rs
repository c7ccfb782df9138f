//! Helpers and shared logic for learngl runtime implementations.

/// Image decoding helpers.
pub mod image;

/// Static geometry and vertex layouts.
pub mod geometry;

/// Per-frame transform math.
pub mod transform;

/// The frame loop and the traits it drives.
pub mod frame;
