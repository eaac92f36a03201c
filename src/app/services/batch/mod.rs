//! Batch driver for .cor correction runs
//!
//! Iterates the input file list strictly in order, applies the correction
//! engine to each file, and isolates any single file's failure from the
//! rest of the batch. The scratch workspace is acquired before the first
//! file and released in a teardown step that runs on every exit path.
//! Errors never propagate past the batch boundary; the driver always
//! returns a [`BatchSummary`].

pub mod driver;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use driver::BatchDriver;
pub use summary::{BatchState, BatchSummary, FileOutcome};
