use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, resource::ResourceConfig, templates};

/// Final set of filesystem entries ready for materialization.
///
/// This is the output of the template rendering process.
/// It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ScaffoldPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Build the full plan for a configuration, rooted at
    /// `<output_root>/<script_name>`.
    ///
    /// Entry order mirrors the write order: the manifest first, then each
    /// enabled group's directory followed by its files.
    pub fn from_config(config: &ResourceConfig, output_root: &Path) -> Self {
        let mut plan = Self::new(output_root.join(&config.script_name));

        plan.add_file("fxmanifest.lua", templates::manifest(config));

        for group in config.enabled_groups() {
            plan.add_directory(group.dir_name());
            for (kind, file_name) in group.files(config.include_examples) {
                plan.add_file(
                    Path::new(group.dir_name()).join(file_name),
                    templates::render(group, kind, config),
                );
            }
        }

        plan
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate {
            path: path.into(),
        }));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = match entry {
                FsEntry::File(f) => &f.path,
                FsEntry::Directory(d) => &d.path,
            };

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

/// A (relative path, text content) pair to be flushed to disk.
#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
