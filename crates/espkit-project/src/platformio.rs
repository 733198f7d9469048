//! `platformio.ini` retargeting.
//!
//! The file is kept as its original lines. Each line is classified on demand
//! (section header, column-0 key, indented continuation, blank, other) and
//! edits replace or insert whole lines by index, so anything the rewriter
//! does not touch is written back byte for byte.

use std::fmt;
use std::ops::Range;
use std::path::Path;

use espkit_boards::BoardProfile;

use crate::error::{ProjectError, Result};

/// Compiler flags added to the build of boards with external PSRAM.
pub const PSRAM_FLAGS: [&str; 2] = ["    -DBOARD_HAS_PSRAM", "    -mfix-esp32-psram-cache-issue"];

const PSRAM_MARKER: &str = "-DBOARD_HAS_PSRAM";
const DEFAULT_ENVS_KEY: &str = "default_envs";
const BUILD_FLAGS_KEY: &str = "build_flags";

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    Section(&'a str),
    Key(&'a str),
    Continuation,
    Blank,
    Other,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix('[') {
        let name = rest.split(']').next().unwrap_or(rest);
        return LineKind::Section(name.trim());
    }
    if line.starts_with(' ') || line.starts_with('\t') {
        return LineKind::Continuation;
    }
    if trimmed.starts_with(';') || trimmed.starts_with('#') {
        return LineKind::Other;
    }
    match line.split_once('=') {
        Some((key, _)) => LineKind::Key(key.trim()),
        None => LineKind::Other,
    }
}

/// What happened to the board's environment section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEdit {
    /// The template section was renamed to `[env:<id>]`.
    Renamed,
    /// `[env:<id>]` already existed and was refreshed in place.
    Refreshed,
    /// Neither section was found; only `default_envs` could be updated.
    Missing,
}

/// Summary of the edits applied to a `platformio.ini` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformioEdit {
    pub section: SectionEdit,
    /// Number of scalar keys rewritten inside the environment section.
    pub keys_rewritten: usize,
    pub default_env_updated: bool,
    pub psram_flags_inserted: bool,
}

/// A `platformio.ini` file held as lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformioIni {
    lines: Vec<String>,
    newline: &'static str,
}

impl PlatformioIni {
    /// Split `text` into lines, remembering the line-ending style.
    pub fn parse(text: &str) -> Self {
        let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
        let lines = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        Self { lines, newline }
    }

    /// Index range of a section: its header line up to (not including) the
    /// next header.
    fn section_range(&self, name: &str) -> Option<Range<usize>> {
        let start = self
            .lines
            .iter()
            .position(|l| classify(l) == LineKind::Section(name))?;
        let end = self.lines[start + 1..]
            .iter()
            .position(|l| matches!(classify(l), LineKind::Section(_)))
            .map_or(self.lines.len(), |offset| start + 1 + offset);
        Some(start..end)
    }

    /// Value of `key` inside `section`, if present on a single line.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        let range = self.section_range(section)?;
        self.lines[range].iter().find_map(|line| match classify(line) {
            LineKind::Key(k) if k == key => line.split_once('=').map(|(_, v)| v.trim()),
            _ => None,
        })
    }

    /// Whether a section with this exact name exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.section_range(section).is_some()
    }

    /// The first `default_envs` value in the file.
    pub fn default_env(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match classify(line) {
            LineKind::Key(DEFAULT_ENVS_KEY) => line.split_once('=').map(|(_, v)| v.trim()),
            _ => None,
        })
    }

    /// Retarget the document at `board`.
    ///
    /// `template_env` names the section to take over (`esp32dev` for the
    /// stock project). A section already named after the board is refreshed
    /// instead, so applying the same board twice is a no-op the second time.
    pub fn apply_board(&mut self, board: &BoardProfile, template_env: &str) -> PlatformioEdit {
        let target = format!("env:{}", board.id);
        let template = format!("env:{template_env}");

        let (range, section) = match self.section_range(&template) {
            Some(range) if template != target => (Some(range), SectionEdit::Renamed),
            _ => match self.section_range(&target) {
                Some(range) => (Some(range), SectionEdit::Refreshed),
                None => (None, SectionEdit::Missing),
            },
        };

        let mut keys_rewritten = 0;
        if let Some(range) = range.clone() {
            self.lines[range.start] = format!("[{target}]");
            let platform_values = [
                ("platform", board.platform.to_string()),
                ("board", board.board.to_string()),
                ("upload_speed", board.upload_speed.to_string()),
                ("monitor_speed", board.monitor_speed.to_string()),
            ];
            for line in &mut self.lines[range.start + 1..range.end] {
                let LineKind::Key(key) = classify(line) else {
                    continue;
                };
                if let Some((key, value)) = platform_values.iter().find(|(k, _)| *k == key) {
                    *line = format!("{key} = {value}");
                    keys_rewritten += 1;
                }
            }
        }

        let default_env_updated = self.set_default_env(board.id);

        let psram_flags_inserted = match range {
            Some(range) if board.psram => self.insert_psram_flags(range),
            _ => false,
        };

        PlatformioEdit {
            section,
            keys_rewritten,
            default_env_updated,
            psram_flags_inserted,
        }
    }

    fn set_default_env(&mut self, env: &str) -> bool {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| classify(l) == LineKind::Key(DEFAULT_ENVS_KEY))
        else {
            return false;
        };
        *line = format!("{DEFAULT_ENVS_KEY} = {env}");
        true
    }

    /// Insert [`PSRAM_FLAGS`] after the `build_flags` key of the section in
    /// `range`, unless its flag block already carries them.
    fn insert_psram_flags(&mut self, range: Range<usize>) -> bool {
        let Some(key_index) = (range.start + 1..range.end)
            .find(|&i| classify(&self.lines[i]) == LineKind::Key(BUILD_FLAGS_KEY))
        else {
            log::debug!("no {BUILD_FLAGS_KEY} in environment section, PSRAM flags not added");
            return false;
        };

        // The block runs until the first line that is neither blank nor indented.
        let block_end = (key_index + 1..self.lines.len())
            .find(|&i| {
                !matches!(
                    classify(&self.lines[i]),
                    LineKind::Blank | LineKind::Continuation
                )
            })
            .unwrap_or(self.lines.len());

        if self.lines[key_index..block_end]
            .iter()
            .any(|l| l.contains(PSRAM_MARKER))
        {
            return false;
        }

        for (offset, flag) in PSRAM_FLAGS.iter().enumerate() {
            self.lines.insert(key_index + 1 + offset, flag.to_string());
        }
        true
    }
}

impl fmt::Display for PlatformioIni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join(self.newline))
    }
}

/// Rewrite the `platformio.ini` at `path` for `board`.
///
/// A missing file is an error: without it there is nothing to configure.
pub fn rewrite(path: &Path, board: &BoardProfile, template_env: &str) -> Result<PlatformioEdit> {
    if !path.is_file() {
        return Err(ProjectError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))?;

    let mut ini = PlatformioIni::parse(&text);
    let edit = ini.apply_board(board, template_env);
    match edit.section {
        SectionEdit::Missing => log::warn!(
            "{}: neither [env:{template_env}] nor [env:{}] found, environment keys left unchanged",
            path.display(),
            board.id
        ),
        _ => log::debug!(
            "{}: {:?} [env:{}], {} keys rewritten",
            path.display(),
            edit.section,
            board.id,
            edit.keys_rewritten
        ),
    }
    if edit.psram_flags_inserted {
        log::debug!("{}: inserted PSRAM build flags", path.display());
    }

    std::fs::write(path, ini.to_string()).map_err(|e| ProjectError::io(path, e))?;
    Ok(edit)
}
