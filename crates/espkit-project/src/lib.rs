//! Project settings and board-specific rewriting of PlatformIO project files.
//!
//! Three independent edits retarget a project at a board:
//! - [`platformio`]: environment section and `default_envs` in `platformio.ini`
//! - [`header`]: the `LED_PIN` definition in `include/config.h`
//! - [`metadata`]: the `hardware` and `development.environments` objects in `project.json`

pub mod error;
pub mod header;
pub mod metadata;
pub mod platformio;
pub mod settings;

pub use error::{ProjectError, Result};
pub use settings::ProjectSettings;

/// What a rewriter did with its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was rewritten.
    Updated,
    /// The file does not exist; nothing was written.
    Skipped,
}
