//! Row correction engine
//!
//! Orchestrates the per-file pipeline: parse the .cor records, build the
//! point batch, invoke the sampling backend, and merge the sampled
//! elevations and projected coordinates back into the records by id. The
//! output row order always equals the input row order regardless of the
//! order the backend returns its results in.

pub mod engine;
pub mod merge;

#[cfg(test)]
pub mod tests;

pub use engine::CorrectionEngine;
pub use merge::merge_samples;
