//! Error types for workflow validation.

use std::path::PathBuf;

/// Why a single workflow file failed validation.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowIssue {
    /// The file could not be read.
    #[error("error reading file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML.
    #[error("YAML syntax error: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// The document is empty or null.
    #[error("empty or invalid YAML file")]
    Empty,

    /// The document is not a mapping at the top level.
    #[error("workflow must be a mapping at the top level")]
    NotMapping,

    /// A required top-level key is absent.
    #[error("missing required key: {0}")]
    MissingKey(&'static str),

    /// No `on` key.
    #[error("missing trigger configuration ('on' key)")]
    MissingTrigger,

    /// `jobs` is present but is not a mapping.
    #[error("'jobs' must be a mapping")]
    JobsNotMapping,

    /// A job has no `runs-on`.
    #[error("job '{job}' missing 'runs-on'")]
    JobMissingRunsOn {
        /// Name of the offending job.
        job: String,
    },
}

/// Errors that stop a directory scan before any file is checked.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The workflows directory does not exist.
    #[error("no workflows directory found at {}", path.display())]
    NoDirectory {
        /// The directory that was scanned.
        path: PathBuf,
    },

    /// The directory holds no `.yml` or `.yaml` files.
    #[error("no workflow files found in {}", path.display())]
    NoWorkflows {
        /// The directory that was scanned.
        path: PathBuf,
    },

    /// I/O error listing the directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for directory-level workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;
