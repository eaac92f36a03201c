//! Batch driver implementation

use std::fs;
use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use crate::app::services::cor_format::serialize_records;
use crate::app::services::correction::CorrectionEngine;
use crate::app::services::sampler::{DemBackend, SamplingBackend};
use crate::app::services::scratch::{ScratchManager, ScratchWorkspace};
use crate::config::Config;
use crate::constants::SCRATCH_NAME_HINT;
use crate::{Error, Result};

use super::summary::{BatchSummary, FileOutcome};

/// Driver owning the batch state for one run
///
/// The driver holds the configuration exclusively for the duration of the
/// run; the scratch workspace and the CRS settings are explicit values, not
/// process-global state. Files are processed strictly sequentially in input
/// order, and one file's failure never aborts the batch.
pub struct BatchDriver {
    config: Config,
}

impl BatchDriver {
    /// Create a driver for `config`
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the batch against the configured DEM raster
    ///
    /// Opens the elevation surface once; an unreadable surface aborts the
    /// run before any file is processed. Never returns an error: all
    /// failures are reported through the summary and the operator log.
    pub fn run(&self) -> BatchSummary {
        let started = Instant::now();

        if self.config.input_files.is_empty() {
            warn!("No .cor files provided.");
            return BatchSummary::completed(Vec::new(), started.elapsed());
        }

        let backend = match DemBackend::open(
            &self.config.dem_path,
            self.config.source_epsg,
            self.config.target_epsg,
        ) {
            Ok(backend) => backend,
            Err(e) => {
                error!("{}", e);
                return BatchSummary::aborted(e.to_string(), started.elapsed());
            }
        };

        self.run_with_backend(&backend)
    }

    /// Run the batch against an already-opened sampling backend
    pub fn run_with_backend(&self, backend: &dyn SamplingBackend) -> BatchSummary {
        let started = Instant::now();

        if self.config.input_files.is_empty() {
            warn!("No .cor files provided.");
            return BatchSummary::completed(Vec::new(), started.elapsed());
        }

        if let Err(e) = self.config.validate() {
            error!("{}", e);
            return BatchSummary::aborted(e.to_string(), started.elapsed());
        }

        let mut manager = ScratchManager::new(self.config.scratch_root());
        let workspace = match manager.acquire(SCRATCH_NAME_HINT) {
            Ok(workspace) => workspace,
            Err(e) => {
                error!("{}", e);
                return BatchSummary::aborted(e.to_string(), started.elapsed());
            }
        };

        let engine = CorrectionEngine::new(backend, self.config.source_epsg);
        let progress = self.create_progress_bar();

        let mut outcomes = Vec::with_capacity(self.config.input_files.len());
        for (index, file) in self.config.input_files.iter().enumerate() {
            if let Some(pb) = &progress {
                pb.set_message(file.display().to_string());
            }

            match self.process_file(&engine, &workspace, file, index) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    error!("Unable to process .cor file '{}': {}", file.display(), e);
                    outcomes.push(FileOutcome::failure(file.clone(), e.to_string()));
                }
            }

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("batch complete");
        }

        // Teardown: release the workspace whatever the per-file outcomes were
        if let Err(e) = manager.release(workspace) {
            warn!("Scratch workspace teardown failed: {}", e);
        }

        BatchSummary::completed(outcomes, started.elapsed())
    }

    /// Correct one file and write the output, returning its outcome
    fn process_file(
        &self,
        engine: &CorrectionEngine,
        workspace: &ScratchWorkspace,
        file: &Path,
        index: usize,
    ) -> Result<FileOutcome> {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cor".to_string());
        let scratch_hint = format!("{}_{}", stem, index);

        let corrected = engine.correct_file(file, workspace, &scratch_hint)?;

        if !self.config.output_dir.exists() {
            return Err(Error::output_directory_missing(
                self.config.output_dir.display().to_string(),
            ));
        }

        let file_name = file.file_name().ok_or_else(|| {
            Error::configuration(format!("input path '{}' has no file name", file.display()))
        })?;
        let output_path = self.config.output_dir.join(file_name);
        let replaced = output_path.exists();

        fs::write(&output_path, serialize_records(&corrected)).map_err(|e| {
            Error::io(
                format!("Failed to write corrected file '{}'", output_path.display()),
                e,
            )
        })?;

        if replaced {
            info!(
                "A file with path {} already existed. File was replaced with the new output.",
                output_path.display()
            );
        } else {
            info!("Created modified .cor file: {}", output_path.display());
        }

        Ok(FileOutcome::success(
            file.to_path_buf(),
            corrected.len(),
            replaced,
        ))
    }

    fn create_progress_bar(&self) -> Option<ProgressBar> {
        if !self.config.show_progress {
            return None;
        }

        let pb = ProgressBar::new(self.config.input_files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    }
}
