//! `espkit.toml` project settings.
//!
//! The settings file is optional. When absent, every file lives at its
//! conventional PlatformIO location and the template environment is
//! `esp32dev`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ProjectError, Result};

/// File name searched for by [`ProjectSettings::find_and_load`].
pub const SETTINGS_FILE: &str = "espkit.toml";

/// Top-level settings structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectSettings {
    /// Locations of the files the tools read and write.
    pub paths: PathsConfig,
    /// `platformio.ini` rewriting options.
    pub platformio: PlatformioConfig,
}

/// `[paths]` section. Relative paths resolve against the project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PathsConfig {
    pub platformio: PathBuf,
    pub header: PathBuf,
    pub metadata: PathBuf,
    pub workflows: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            platformio: PathBuf::from("platformio.ini"),
            header: PathBuf::from("include/config.h"),
            metadata: PathBuf::from("project.json"),
            workflows: PathBuf::from(".github/workflows"),
        }
    }
}

/// `[platformio]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlatformioConfig {
    /// Name of the environment section that gets renamed to the selected board.
    pub template_env: String,
}

impl Default for PlatformioConfig {
    fn default() -> Self {
        Self {
            template_env: "esp32dev".to_string(),
        }
    }
}

/// Absolute locations of the project files, after resolving settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    pub platformio: PathBuf,
    pub header: PathBuf,
    pub metadata: PathBuf,
    pub workflows: PathBuf,
}

impl ProjectSettings {
    /// Search upward from `start_dir` for `espkit.toml`, parse it and return
    /// it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(SETTINGS_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .map_err(|e| ProjectError::io(&candidate, e))?;
                let settings = toml::from_str(&content).map_err(|source| {
                    ProjectError::Settings {
                        path: candidate.clone(),
                        source,
                    }
                })?;
                log::debug!("loaded settings from {}", candidate.display());
                return Ok(Some((settings, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Like [`find_and_load`](Self::find_and_load), falling back to default
    /// settings rooted at `start_dir`.
    pub fn load_or_default(start_dir: &Path) -> Result<(Self, PathBuf)> {
        Ok(Self::find_and_load(start_dir)?
            .unwrap_or_else(|| (Self::default(), start_dir.to_path_buf())))
    }

    /// Load settings from exactly `project_dir`, without searching upward.
    pub fn load_in(project_dir: &Path) -> Result<Self> {
        let candidate = project_dir.join(SETTINGS_FILE);
        if !candidate.is_file() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&candidate).map_err(|e| ProjectError::io(&candidate, e))?;
        toml::from_str(&content).map_err(|source| ProjectError::Settings {
            path: candidate,
            source,
        })
    }

    /// Resolve configured paths against `project_dir`.
    pub fn files(&self, project_dir: &Path) -> ProjectFiles {
        ProjectFiles {
            platformio: project_dir.join(&self.paths.platformio),
            header: project_dir.join(&self.paths.header),
            metadata: project_dir.join(&self.paths.metadata),
            workflows: project_dir.join(&self.paths.workflows),
        }
    }

    /// The `platformio.ini` environment section used as the rewrite template.
    pub fn template_env(&self) -> &str {
        &self.platformio.template_env
    }
}
