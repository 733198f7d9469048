//! Directory scan and aggregated results.

use std::path::{Path, PathBuf};

use crate::error::{Result, WorkflowError, WorkflowIssue};
use crate::validate::validate_file;

const EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Validation outcome for one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: std::result::Result<(), WorkflowIssue>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of validating every workflow in a directory.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    /// True when every file passed.
    pub fn all_valid(&self) -> bool {
        self.files.iter().all(FileReport::is_valid)
    }

    /// Files that failed.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_valid())
    }
}

/// List `*.yml` and `*.yaml` files directly inside `dir`, sorted by path.
pub fn workflow_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(WorkflowError::NoDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_workflow = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| EXTENSIONS.contains(&e));
        if is_workflow && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(WorkflowError::NoWorkflows {
            path: dir.to_path_buf(),
        });
    }
    Ok(files)
}

/// Validate every workflow file in `dir`.
///
/// Per-file failures are collected in the report; only a missing or empty
/// directory is an error.
pub fn validate_dir(dir: &Path) -> Result<ValidationReport> {
    let files = workflow_files(dir)?;
    log::debug!("found {} workflow files in {}", files.len(), dir.display());

    let files = files
        .into_iter()
        .map(|path| {
            let result = validate_file(&path);
            if let Err(issue) = &result {
                log::debug!("{}: {issue}", path.display());
            }
            FileReport { path, result }
        })
        .collect();
    Ok(ValidationReport { files })
}
