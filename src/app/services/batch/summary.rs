//! Batch run reporting structures

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal state of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchState {
    /// All files were attempted; individual failures are listed per file
    Completed,
    /// The run aborted before any file was processed
    AbortedBeforeStart,
}

/// Outcome of one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// The input file
    pub file: PathBuf,
    /// Number of corrected records written
    pub records: usize,
    /// True when an existing output file was replaced
    pub overwritten: bool,
    /// Failure description, `None` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    /// Successful outcome for `file`
    pub fn success(file: PathBuf, records: usize, overwritten: bool) -> Self {
        Self {
            file,
            records,
            overwritten,
            error: None,
        }
    }

    /// Failed outcome for `file`
    pub fn failure(file: PathBuf, error: String) -> Self {
        Self {
            file,
            records: 0,
            overwritten: false,
            error: Some(error),
        }
    }

    /// True when the file was corrected and written
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of one batch run, returned on every path
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Terminal state of the run
    pub state: BatchState,
    /// Per-file outcomes, in input order
    pub outcomes: Vec<FileOutcome>,
    /// Reason the run aborted before the first file, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_reason: Option<String>,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Summary for a run that completed its per-file loop
    pub fn completed(outcomes: Vec<FileOutcome>, elapsed: Duration) -> Self {
        Self {
            state: BatchState::Completed,
            outcomes,
            abort_reason: None,
            elapsed,
        }
    }

    /// Summary for a run that aborted before processing any file
    pub fn aborted(reason: String, elapsed: Duration) -> Self {
        Self {
            state: BatchState::AbortedBeforeStart,
            outcomes: Vec::new(),
            abort_reason: Some(reason),
            elapsed,
        }
    }

    /// Number of files attempted
    pub fn files_attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files corrected and written
    pub fn files_succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Number of files that failed
    pub fn files_failed(&self) -> usize {
        self.outcomes.len() - self.files_succeeded()
    }

    /// Total corrected records across all successful files
    pub fn records_corrected(&self) -> usize {
        self.outcomes.iter().map(|o| o.records).sum()
    }

    /// Number of output files that replaced an existing file
    pub fn overwrites(&self) -> usize {
        self.outcomes.iter().filter(|o| o.overwritten).count()
    }

    /// True when the run completed without any per-file failure
    pub fn is_clean(&self) -> bool {
        self.state == BatchState::Completed && self.files_failed() == 0
    }
}
