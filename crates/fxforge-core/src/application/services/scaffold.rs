//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the materialization workflow:
//! 1. Validate the collected configuration
//! 2. Build and validate the scaffold plan
//! 3. Write directories and files through the filesystem port
//!
//! Directory creation is idempotent: an already-existing directory is skipped
//! silently rather than treated as an error. File writes overwrite. A
//! filesystem failure aborts the run and leaves already-written files in
//! place; the tool is single-shot and re-running it is the remediation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Console, Filesystem},
    domain::{DomainValidator as validator, FsEntry, ResourceConfig, ScaffoldPlan},
    error::{FxforgeError, FxforgeResult},
};

/// Outcome of one materialization run, for the success report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub root: PathBuf,
    pub directories_created: usize,
    pub files_written: usize,
}

/// Main scaffolding service.
///
/// Orchestrates plan building and filesystem writes.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    console: Box<dyn Console>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, console: Box<dyn Console>) -> Self {
        Self {
            filesystem,
            console,
        }
    }

    /// Materialize a resource skeleton under `<output_root>/<script_name>`.
    ///
    /// This is the main use case - turns a configuration into files on disk.
    #[instrument(
        skip_all,
        fields(
            resource = %config.script_name,
            output_root = %output_root.display()
        )
    )]
    pub fn materialize(
        &self,
        config: &ResourceConfig,
        output_root: &Path,
    ) -> FxforgeResult<ScaffoldSummary> {
        // 1. Validate configuration
        validator::validate_config(config).map_err(FxforgeError::Domain)?;

        // 2. Build and validate plan
        let plan = ScaffoldPlan::from_config(config, output_root);
        validator::validate_plan(&plan).map_err(FxforgeError::Domain)?;

        info!(
            root = %plan.root().display(),
            entries = plan.entry_count(),
            "materializing resource"
        );

        let mut summary = ScaffoldSummary {
            root: plan.root().to_path_buf(),
            directories_created: 0,
            files_written: 0,
        };

        // 3. Root directory first, then entries in plan order
        if self.create_dir_logged(plan.root())? {
            summary.directories_created += 1;
        }

        for entry in plan.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = plan.root().join(&dir.path);
                    if self.create_dir_logged(&path)? {
                        summary.directories_created += 1;
                    }
                }
                FsEntry::File(file) => {
                    let path = plan.root().join(&file.path);
                    self.filesystem.write_file(&path, &file.content)?;
                    self.console.say(&format!("Created file: {}", path.display()))?;
                    summary.files_written += 1;
                }
            }
        }

        info!(
            files = summary.files_written,
            directories = summary.directories_created,
            "materialization complete"
        );
        Ok(summary)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create a directory unless it already exists.
    ///
    /// Returns whether a new directory was created. Pre-existing directories
    /// are never an error and produce no log line.
    fn create_dir_logged(&self, path: &Path) -> FxforgeResult<bool> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "directory exists, skipping");
            return Ok(false);
        }

        self.filesystem.create_dir_all(path)?;
        self.console
            .say(&format!("Created folder: {}", path.display()))?;
        Ok(true)
    }
}
