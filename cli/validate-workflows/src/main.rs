//! validate-workflows — check GitHub Actions workflow files for required structure.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use espkit_project::ProjectSettings;
use espkit_workflows::ValidationReport;

#[derive(Parser)]
#[command(name = "validate-workflows", version, about = "GitHub Actions Workflow Validator")]
struct Cli {
    /// Workflows directory (default: .github/workflows, or `paths.workflows` in espkit.toml)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

/// Validate the workflow directory. `Ok(false)` means at least one file failed.
fn run(cli: Cli) -> Result<bool> {
    let dir = match cli.dir {
        Some(dir) => dir,
        None => workflows_dir(&std::env::current_dir()?)?,
    };
    check(&dir, &mut io::stdout().lock())
}

fn workflows_dir(cwd: &Path) -> Result<PathBuf> {
    let (settings, project_dir) = ProjectSettings::load_or_default(cwd)?;
    Ok(settings.files(&project_dir).workflows)
}

fn check<W: Write>(dir: &Path, out: &mut W) -> Result<bool> {
    let report = espkit_workflows::validate_dir(dir)?;
    print_report(&report, out)?;
    Ok(report.all_valid())
}

fn print_report<W: Write>(report: &ValidationReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Found {} workflow files", report.files.len())?;
    for file in &report.files {
        writeln!(out, "Validating: {}", file.path.display())?;
        match &file.result {
            Ok(()) => writeln!(out, "  ok: valid workflow file")?,
            Err(issue) => writeln!(out, "  FAIL: {issue}")?,
        }
    }
    writeln!(out)?;
    if report.all_valid() {
        writeln!(out, "All workflow files are valid!")?;
    } else {
        let failed = report.failures().count();
        writeln!(
            out,
            "Some workflow files have issues ({failed} of {})",
            report.files.len()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GOOD: &str = "\
name: Build
on:
  push:
  pull_request:
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
";

    fn capture(dir: &Path) -> (bool, String) {
        let mut out = Vec::new();
        let ok = check(dir, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn valid_directory_passes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("build.yml"), GOOD).unwrap();

        let (ok, text) = capture(dir.path());
        assert!(ok);
        assert!(text.contains("Found 1 workflow files"));
        assert!(text.contains("All workflow files are valid!"));
    }

    #[test]
    fn failing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("build.yml"), GOOD).unwrap();
        fs::write(
            dir.path().join("lint.yaml"),
            "name: Lint\non: push\njobs:\n  lint:\n    steps: []\n",
        )
        .unwrap();

        let (ok, text) = capture(dir.path());
        assert!(!ok);
        assert!(text.contains("FAIL: job 'lint' missing 'runs-on'"));
        assert!(text.contains("Some workflow files have issues (1 of 2)"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        assert!(check(&dir.path().join("nope"), &mut out).is_err());
    }

    #[test]
    fn default_dir_follows_settings() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            workflows_dir(dir.path()).unwrap(),
            dir.path().join(".github/workflows")
        );

        fs::write(
            dir.path().join("espkit.toml"),
            "[paths]\nworkflows = \"ci\"\n",
        )
        .unwrap();
        let nested = dir.path().join("src");
        fs::create_dir(&nested).unwrap();
        assert_eq!(workflows_dir(&nested).unwrap(), dir.path().join("ci"));
    }

    #[test]
    fn run_with_explicit_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ci.yml"), "name: CI\non: push\n").unwrap();
        let cli = Cli {
            dir: Some(dir.path().to_path_buf()),
            verbose: false,
        };
        assert!(!run(cli).unwrap());
    }
}
