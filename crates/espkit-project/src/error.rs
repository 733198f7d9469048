//! Error types for project file operations.

use std::path::PathBuf;

/// Errors that can occur while reading or rewriting project files.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// I/O error reading or writing a project file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A required file does not exist.
    #[error("{} not found", path.display())]
    NotFound {
        /// The missing file.
        path: PathBuf,
    },

    /// `project.json` is not valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// `project.json` parsed, but its shape is unusable.
    #[error("unexpected structure in {}: {detail}", path.display())]
    Structure {
        /// The file being edited.
        path: PathBuf,
        /// What was wrong.
        detail: String,
    },

    /// `espkit.toml` failed to parse.
    #[error("invalid settings in {}: {source}", path.display())]
    Settings {
        /// The settings file.
        path: PathBuf,
        /// The underlying parse error.
        source: toml::de::Error,
    },
}

impl ProjectError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for project file operations.
pub type Result<T> = std::result::Result<T, ProjectError>;
