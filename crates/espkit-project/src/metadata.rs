//! `project.json` hardware metadata.

use std::path::Path;

use espkit_boards::BoardProfile;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ProjectError, Result};
use crate::Outcome;

/// Fields merged into the `hardware` object.
#[derive(Debug, Serialize)]
struct HardwareInfo<'a> {
    platform: &'a str,
    board: &'a str,
    board_name: &'a str,
    flash_size: &'a str,
    psram: bool,
    led_pin: u8,
}

impl<'a> From<&'a BoardProfile> for HardwareInfo<'a> {
    fn from(board: &'a BoardProfile) -> Self {
        Self {
            platform: board.platform,
            board: board.board,
            board_name: board.name,
            flash_size: board.flash_size,
            psram: board.psram,
            led_pin: board.led_pin,
        }
    }
}

/// Merge the board into a parsed `project.json` document.
///
/// `hardware` is created if absent, or replaced if it is not an object.
/// `development.environments` is only updated when it already exists.
pub fn apply_board(doc: &mut Value, board: &BoardProfile) -> std::result::Result<(), String> {
    let root = doc
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;

    let hardware = root
        .entry("hardware")
        .or_insert_with(|| Value::Object(Map::new()));
    if !hardware.is_object() {
        *hardware = Value::Object(Map::new());
    }
    if let (Some(target), Ok(Value::Object(fields))) = (
        hardware.as_object_mut(),
        serde_json::to_value(HardwareInfo::from(board)),
    ) {
        target.extend(fields);
    }

    if let Some(envs) = root
        .get_mut("development")
        .and_then(|d| d.get_mut("environments"))
        .and_then(Value::as_object_mut)
    {
        envs.insert("production".into(), Value::from(board.id));
        envs.insert("debug".into(), Value::from(board.debug_env()));
        envs.insert("ota".into(), Value::from(board.ota_env()));
    }
    Ok(())
}

/// Rewrite `project.json` at `path`. A missing file is skipped; malformed
/// JSON is an error.
pub fn rewrite(path: &Path, board: &BoardProfile) -> Result<Outcome> {
    if !path.is_file() {
        log::warn!("{} not found, skipping project update", path.display());
        return Ok(Outcome::Skipped);
    }
    let text = std::fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))?;
    let mut doc: Value = serde_json::from_str(&text).map_err(|source| ProjectError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    apply_board(&mut doc, board).map_err(|detail| ProjectError::Structure {
        path: path.to_path_buf(),
        detail,
    })?;

    // to_string_pretty indents with two spaces.
    let out = serde_json::to_string_pretty(&doc).map_err(|source| ProjectError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, out + "\n").map_err(|e| ProjectError::io(path, e))?;
    Ok(Outcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use espkit_boards::{boards, find_board};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "name": "esp32-template",
            "version": "1.0.0",
            "hardware": { "board": "esp32dev", "sensors": ["dht22"] },
            "development": {
                "environments": { "production": "esp32dev", "staging": "esp32dev_staging" }
            }
        })
    }

    #[test]
    fn every_board_sets_hardware_and_envs() {
        for board in boards() {
            let mut doc = sample();
            apply_board(&mut doc, board).unwrap();
            assert_eq!(doc["hardware"]["board"], board.board);
            assert_eq!(doc["hardware"]["psram"], board.psram);
            assert_eq!(doc["hardware"]["led_pin"], board.led_pin);
            assert_eq!(doc["development"]["environments"]["production"], board.id);
        }
    }

    #[test]
    fn unrelated_fields_survive() {
        let mut doc = sample();
        apply_board(&mut doc, find_board("esp32-s3-box").unwrap()).unwrap();
        assert_eq!(doc["hardware"]["sensors"], json!(["dht22"]));
        assert_eq!(doc["development"]["environments"]["staging"], "esp32dev_staging");
        assert_eq!(doc["development"]["environments"]["debug"], "esp32-s3-box_debug");
        assert_eq!(doc["development"]["environments"]["ota"], "esp32-s3-box_ota");
        assert_eq!(doc["name"], "esp32-template");
    }

    #[test]
    fn hardware_created_when_absent() {
        let mut doc = json!({ "name": "bare" });
        apply_board(&mut doc, find_board("esp32-c6-devkitc-1").unwrap()).unwrap();
        assert_eq!(doc["hardware"]["flash_size"], "8MB");
        assert_eq!(doc["hardware"]["board_name"], "ESP32-C6-DevKitC-1");
        assert!(doc.get("development").is_none());
    }

    #[test]
    fn non_object_hardware_is_replaced() {
        let mut doc = json!({ "hardware": "esp32" });
        apply_board(&mut doc, find_board("esp32dev").unwrap()).unwrap();
        assert_eq!(doc["hardware"]["platform"], "espressif32");
    }

    #[test]
    fn development_without_environments_is_left_alone() {
        let mut doc = json!({ "development": { "ide": "vscode" } });
        apply_board(&mut doc, find_board("esp32dev").unwrap()).unwrap();
        assert_eq!(doc["development"], json!({ "ide": "vscode" }));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let mut doc = json!([1, 2, 3]);
        assert!(apply_board(&mut doc, find_board("esp32dev").unwrap()).is_err());
    }

    #[test]
    fn rewrite_keeps_key_order_and_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");
        std::fs::write(&path, r#"{"name":"x","hardware":{},"zeta":1}"#).unwrap();

        rewrite(&path, find_board("esp32dev").unwrap()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"name\": \"x\",\n  \"hardware\": {\n    \"platform\""));
        assert!(text.find("\"hardware\"").unwrap() < text.find("\"zeta\"").unwrap());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = rewrite(&path, find_board("esp32dev").unwrap()).unwrap_err();
        assert!(matches!(err, ProjectError::Json { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = rewrite(&dir.path().join("project.json"), find_board("esp32dev").unwrap());
        assert_eq!(outcome.unwrap(), Outcome::Skipped);
    }
}
