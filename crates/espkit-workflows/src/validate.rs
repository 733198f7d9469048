//! Single-file workflow validation.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::WorkflowIssue;

const REQUIRED_KEYS: [&str; 2] = ["name", "jobs"];

/// Whether `key` declares the workflow trigger.
///
/// YAML 1.1 loaders read a bare `on` as boolean `true`, so a file written by
/// such a tool may carry the trigger under that key instead.
fn is_trigger_key(key: &Value) -> bool {
    match key {
        Value::String(s) => s == "on",
        Value::Bool(b) => *b,
        _ => false,
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

fn check_jobs(jobs: &Mapping) -> Result<(), WorkflowIssue> {
    for (name, job) in jobs {
        let has_runs_on = job
            .as_mapping()
            .is_some_and(|job| job.contains_key("runs-on"));
        if !has_runs_on {
            return Err(WorkflowIssue::JobMissingRunsOn {
                job: key_label(name),
            });
        }
    }
    Ok(())
}

/// Validate workflow YAML text. The first problem found is reported.
pub fn validate_str(text: &str) -> Result<(), WorkflowIssue> {
    if text.trim().is_empty() {
        return Err(WorkflowIssue::Empty);
    }
    let doc: Value = serde_yaml::from_str(text)?;
    let workflow = match doc {
        Value::Null => return Err(WorkflowIssue::Empty),
        Value::Mapping(m) => m,
        _ => return Err(WorkflowIssue::NotMapping),
    };

    for key in REQUIRED_KEYS {
        if !workflow.contains_key(key) {
            return Err(WorkflowIssue::MissingKey(key));
        }
    }
    if !workflow.keys().any(is_trigger_key) {
        return Err(WorkflowIssue::MissingTrigger);
    }

    match workflow.get("jobs") {
        Some(Value::Mapping(jobs)) => check_jobs(jobs),
        _ => Err(WorkflowIssue::JobsNotMapping),
    }
}

/// Read and validate the workflow file at `path`.
pub fn validate_file(path: &Path) -> Result<(), WorkflowIssue> {
    let text = std::fs::read_to_string(path)?;
    validate_str(&text)
}
