//! Shared utilities: frame timing for the update loop and bit-exact float
//! keys for vertex deduplication.

/// Fixed-rate tick gating and FPS smoothing.
pub mod frame_timing;
/// Bit-exact keys for float vectors.
pub mod hash;

pub use frame_timing::FrameTiming;
