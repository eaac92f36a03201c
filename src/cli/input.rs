//! Input file collection for CLI commands
//!
//! Accepts a mix of explicit file paths, directories and glob patterns and
//! resolves them to an ordered, de-duplicated list of .cor files.
//! Directories are scanned recursively; directory scans and glob matches are
//! sorted for deterministic batch order. Explicit paths are passed through
//! as given, so a missing file surfaces as that file's error inside the
//! batch instead of aborting collection.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::COR_EXTENSION;
use crate::{Error, Result};

/// Resolve CLI input tokens to an ordered list of .cor files
pub fn collect_input_files(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for token in inputs {
        let path = Path::new(token);

        if path.is_dir() {
            for found in scan_directory(path)? {
                push_unique(&mut files, &mut seen, found);
            }
        } else if is_glob_pattern(token) {
            for found in expand_glob(token)? {
                push_unique(&mut files, &mut seen, found);
            }
        } else {
            if !path.exists() {
                warn!("Input file does not exist: {}", token);
            }
            push_unique(&mut files, &mut seen, path.to_path_buf());
        }
    }

    debug!("Collected {} input files", files.len());
    Ok(files)
}

/// Recursively collect .cor files under `dir`, sorted by path
fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && has_cor_extension(entry.path()) {
            found.push(entry.path().to_path_buf());
        }
    }
    found.sort();
    Ok(found)
}

/// Expand a glob pattern, sorted by path
fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern)
        .map_err(|e| Error::configuration(format!("invalid glob pattern '{}': {}", pattern, e)))?;

    let mut found = Vec::new();
    for path in paths {
        let path = path
            .map_err(|e| Error::configuration(format!("cannot read glob match: {}", e)))?;
        if path.is_file() {
            found.push(path);
        }
    }
    found.sort();

    if found.is_empty() {
        warn!("Glob pattern matched no files: {}", pattern);
    }
    Ok(found)
}

fn push_unique(files: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>, path: PathBuf) {
    if seen.insert(path.clone()) {
        files.push(path);
    }
}

fn is_glob_pattern(token: &str) -> bool {
    token.contains(['*', '?', '['])
}

fn has_cor_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(COR_EXTENSION))
}
