//! `include/config.h` LED pin update.

use std::path::Path;

use espkit_boards::BoardProfile;

use crate::error::{ProjectError, Result};
use crate::Outcome;

/// The definition shipped with the project template.
const STOCK_DEFINE: &str = "#define LED_PIN 2";
const COMMENT_GAP: &str = "                    ";

/// Trailing comment attached to the `LED_PIN` definition.
pub fn board_comment(board: &BoardProfile) -> String {
    format!("// Board: {} (GPIO{})", board.name, board.led_pin)
}

/// Apply the board's LED pin to header text.
///
/// Replaces the stock `#define LED_PIN 2` and, unless the board comment is
/// already somewhere in the text, appends it after the definition.
pub fn apply_board(text: &str, board: &BoardProfile) -> String {
    let define = format!("#define LED_PIN {}", board.led_pin);
    let mut text = text.replace(STOCK_DEFINE, &define);

    let comment = board_comment(board);
    if !text.contains(&comment) {
        text = text.replace(&define, &format!("{define}{COMMENT_GAP}{comment}"));
    }
    text
}

/// Rewrite the header at `path`. A missing header is skipped.
pub fn rewrite(path: &Path, board: &BoardProfile) -> Result<Outcome> {
    if !path.is_file() {
        log::warn!("{} not found, skipping header update", path.display());
        return Ok(Outcome::Skipped);
    }
    let text = std::fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))?;
    let updated = apply_board(&text, board);
    if updated == text {
        log::debug!("{}: already set for GPIO{}", path.display(), board.led_pin);
    }
    std::fs::write(path, updated).map_err(|e| ProjectError::io(path, e))?;
    Ok(Outcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use espkit_boards::find_board;

    const HEADER: &str = "\
#ifndef CONFIG_H
#define CONFIG_H

// LED Configuration
#define LED_PIN 2
#define LED_ACTIVE_HIGH true

#endif // CONFIG_H
";

    #[test]
    fn s3_devkit_gets_pin_48_and_comment() {
        let board = find_board("esp32-s3-devkitc-1").unwrap();
        let out = apply_board(HEADER, board);
        let line = out.lines().find(|l| l.starts_with("#define LED_PIN")).unwrap();
        assert!(line.starts_with("#define LED_PIN 48 "));
        assert!(line.contains("GPIO48"));
        assert!(line.ends_with("// Board: ESP32-S3-DevKitC-1 (GPIO48)"));
        assert!(!out.contains("#define LED_PIN 2\n"));
    }

    #[test]
    fn reapplying_does_not_duplicate_comment() {
        let board = find_board("esp32-s2-saola-1").unwrap();
        let once = apply_board(HEADER, board);
        let twice = apply_board(&once, board);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("// Board:").count(), 1);
    }

    #[test]
    fn pin_two_board_keeps_pin_and_gains_comment() {
        let board = find_board("esp32dev").unwrap();
        let out = apply_board(HEADER, board);
        assert!(out.contains("#define LED_PIN 2                    // Board: ESP32 Development Board (Generic) (GPIO2)"));
    }

    #[test]
    fn other_lines_untouched() {
        let board = find_board("esp32-c3-devkitm-1").unwrap();
        let out = apply_board(HEADER, board);
        assert!(out.contains("#define LED_ACTIVE_HIGH true\n"));
        assert!(out.ends_with("#endif // CONFIG_H\n"));
    }

    #[test]
    fn missing_header_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let board = find_board("esp32dev").unwrap();
        let outcome = rewrite(&dir.path().join("config.h"), board).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(!dir.path().join("config.h").exists());
    }

    #[test]
    fn rewrite_updates_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.h");
        std::fs::write(&path, HEADER).unwrap();

        let board = find_board("esp32-s3-box").unwrap();
        assert_eq!(rewrite(&path, board).unwrap(), Outcome::Updated);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("#define LED_PIN 47"));
    }
}
