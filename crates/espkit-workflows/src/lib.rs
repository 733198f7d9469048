//! Structural checks for GitHub Actions workflow files.
//!
//! A workflow passes when it is a YAML mapping with `name`, `jobs` and a
//! trigger (`on`), `jobs` is a mapping, and every job declares `runs-on`.

pub mod error;
pub mod report;
pub mod validate;

pub use error::{Result, WorkflowError, WorkflowIssue};
pub use report::{validate_dir, workflow_files, FileReport, ValidationReport};
pub use validate::{validate_file, validate_str};
