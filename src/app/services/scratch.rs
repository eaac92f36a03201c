//! Scratch workspace management for intermediate per-file artifacts
//!
//! The sampling backend persists an intermediate point dataset and a result
//! dataset per processed file. Both live in a uniquely named temporary
//! workspace that is acquired once per batch and torn down on every exit
//! path. The manager keeps the "active workspace" as an explicit value
//! instead of process-global state, remembering the previously active path
//! and restoring it on release.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{Error, Result};

/// Manager owning the active-workspace setting for one batch run
#[derive(Debug)]
pub struct ScratchManager {
    /// Directory new workspaces are created under
    root: PathBuf,
    /// Currently active workspace path, if any
    active: Option<PathBuf>,
}

impl ScratchManager {
    /// Create a manager rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root, active: None }
    }

    /// Create a uniquely named scratch workspace and make it active
    ///
    /// The previously active workspace path is remembered inside the
    /// returned handle and restored by [`ScratchManager::release`]. Fails
    /// with [`Error::WorkspaceCreation`] when the root is not writable.
    pub fn acquire(&mut self, name_hint: &str) -> Result<ScratchWorkspace> {
        let dir = tempfile::Builder::new()
            .prefix(&format!("{}_", name_hint))
            .tempdir_in(&self.root)
            .map_err(|e| {
                Error::workspace_creation(
                    format!(
                        "cannot create workspace under '{}'",
                        self.root.display()
                    ),
                    e,
                )
            })?;

        let previous_active = self.active.replace(dir.path().to_path_buf());
        debug!("Acquired scratch workspace at {}", dir.path().display());

        Ok(ScratchWorkspace {
            dir: Some(dir),
            previous_active,
        })
    }

    /// Delete every artifact in the workspace, remove the container and
    /// restore the previously active workspace setting
    ///
    /// Must be called exactly once per acquire. The workspace handle also
    /// carries a `Drop` backstop, so a panic or early return between acquire
    /// and release still reclaims the directory.
    pub fn release(&mut self, mut workspace: ScratchWorkspace) -> Result<()> {
        let Some(dir) = workspace.dir.take() else {
            return Ok(());
        };

        delete_artifacts(dir.path())?;

        let path = dir.path().to_path_buf();
        dir.close()
            .map_err(|e| Error::io(format!("Failed to remove workspace '{}'", path.display()), e))?;

        self.active = workspace.previous_active.take();
        debug!("Released scratch workspace at {}", path.display());
        Ok(())
    }

    /// Path of the currently active workspace, if one is acquired
    pub fn active(&self) -> Option<&Path> {
        self.active.as_deref()
    }
}

/// Handle to an acquired scratch workspace
///
/// Dropping the handle without an explicit release removes the directory
/// tree as a backstop, but does not restore the manager's active setting;
/// the batch driver always routes through [`ScratchManager::release`].
#[derive(Debug)]
pub struct ScratchWorkspace {
    dir: Option<TempDir>,
    previous_active: Option<PathBuf>,
}

impl ScratchWorkspace {
    /// Filesystem path of the workspace
    pub fn path(&self) -> &Path {
        self.dir
            .as_ref()
            .map(|d| d.path())
            .expect("workspace accessed after release")
    }

    /// Path for a named artifact inside the workspace
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }
}

/// Enumerate and delete everything under the workspace, deepest first,
/// irrespective of artifact type
fn delete_artifacts(workspace: &Path) -> Result<()> {
    for entry in WalkDir::new(workspace).contents_first(true) {
        let entry = entry?;
        if entry.path() == workspace {
            continue;
        }

        let result = if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())
        } else {
            fs::remove_file(entry.path())
        };

        if let Err(e) = result {
            warn!("Failed to delete artifact {}: {}", entry.path().display(), e);
            return Err(Error::io(
                format!("Failed to delete artifact '{}'", entry.path().display()),
                e,
            ));
        }
    }
    Ok(())
}
