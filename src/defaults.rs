//! Default configuration constants for recap.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Default token window size per chunk.
///
/// Bounded by the generation endpoint's input-length limit. 400 word-level
/// tokens keeps each request comfortably inside typical summarization model
/// input limits while still giving the model enough context per window.
pub const WINDOW_SIZE: usize = 400;

/// Default maximum output length (in model tokens) per generation call.
pub const MAX_LENGTH: u32 = 100;

/// Default number of candidate sequences requested per generation call.
///
/// The pipeline only ever consumes the first candidate; requesting more is
/// a tuning knob passed through to the endpoint unmodified.
pub const NUM_RETURN_SEQUENCES: u32 = 1;

/// Default top-k sampling cutoff.
pub const TOP_K: u32 = 50;

/// Default top-p (nucleus) sampling cutoff.
pub const TOP_P: f64 = 0.95;

/// Default sampling-enabled flag.
pub const DO_SAMPLE: bool = true;

/// Default instruction appended (on its own line) to every generation input.
pub const INSTRUCTION: &str = "Summarize the context above.";

/// Default per-call endpoint timeout in seconds.
///
/// An unbounded hang would block the whole pipeline, so every call gets a
/// deadline; expiry is treated as a failed call.
pub const TIMEOUT_SECS: u64 = 30;

/// Default number of in-flight map-phase calls.
///
/// 1 reproduces the reference sequential loop. Higher values dispatch chunk
/// summarizations concurrently; collection order stays chunk order either way.
pub const MAP_CONCURRENCY: usize = 1;
