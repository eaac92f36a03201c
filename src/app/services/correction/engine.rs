//! Per-file correction pipeline

use std::path::Path;

use tracing::debug;

use crate::app::models::{LogRecord, PointBatch};
use crate::app::services::cor_format;
use crate::app::services::sampler::SamplingBackend;
use crate::app::services::scratch::ScratchWorkspace;
use crate::Result;

use super::merge::merge_samples;

/// Correction engine bound to one sampling backend for the batch
pub struct CorrectionEngine<'a> {
    backend: &'a dyn SamplingBackend,
    source_epsg: u32,
}

impl<'a> CorrectionEngine<'a> {
    /// Create an engine sampling through `backend`, with input coordinates
    /// declared in `source_epsg`
    pub fn new(backend: &'a dyn SamplingBackend, source_epsg: u32) -> Self {
        Self {
            backend,
            source_epsg,
        }
    }

    /// Correct one .cor file and return the corrected records in input order
    ///
    /// `scratch_hint` names the intermediate datasets the backend persists
    /// in the workspace for this file.
    pub fn correct_file(
        &self,
        path: &Path,
        workspace: &ScratchWorkspace,
        scratch_hint: &str,
    ) -> Result<Vec<LogRecord>> {
        let records = cor_format::parse_file(path)?;
        self.correct_records(records, &path.display().to_string(), workspace, scratch_hint)
    }

    /// Correct an already-parsed record sequence
    pub fn correct_records(
        &self,
        mut records: Vec<LogRecord>,
        file: &str,
        workspace: &ScratchWorkspace,
        scratch_hint: &str,
    ) -> Result<Vec<LogRecord>> {
        if records.is_empty() {
            debug!("'{}' holds no records, nothing to correct", file);
            return Ok(records);
        }

        let batch = PointBatch::from_records(&records, self.source_epsg);
        let samples = self
            .backend
            .reproject_and_sample(&batch, workspace, scratch_hint)?;

        merge_samples(&mut records, &samples, file)?;

        debug!(
            "Corrected {} records of '{}' against the elevation surface",
            records.len(),
            file
        );
        Ok(records)
    }
}
