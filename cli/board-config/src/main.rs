//! board-config — retarget an ESP32 PlatformIO project at a supported board.

mod commands;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use espkit_project::ProjectSettings;

#[derive(Parser)]
#[command(name = "board-config", version, about = "ESP32 Board Configuration Tool")]
struct Cli {
    /// List available boards
    #[arg(short, long)]
    list: bool,
    /// Board ID to configure
    #[arg(short, long, value_name = "ID")]
    board: Option<String>,
    /// Interactive board selection (the default when no board is given)
    #[arg(short, long)]
    interactive: bool,
    /// Project directory (default: nearest directory with espkit.toml, else the current one)
    #[arg(short = 'C', long, value_name = "DIR")]
    project_dir: Option<PathBuf>,
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

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list {
        return commands::list::run();
    }

    // `--board` wins over `--interactive`; with neither, prompt.
    if cli.interactive && cli.board.is_some() {
        log::debug!("--board given, ignoring --interactive");
    }
    let Some(board) = commands::select::resolve(cli.board.as_deref())? else {
        return Ok(());
    };

    let (settings, project_dir) = load_settings(cli.project_dir.as_deref())?;
    log::debug!("project directory: {}", project_dir.display());
    commands::configure::run(&project_dir, &settings, board)
}

fn load_settings(project_dir: Option<&Path>) -> anyhow::Result<(ProjectSettings, PathBuf)> {
    match project_dir {
        Some(dir) => Ok((ProjectSettings::load_in(dir)?, dir.to_path_buf())),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(ProjectSettings::load_or_default(&cwd)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("board-config").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&["-b", "esp32dev", "-C", "/tmp/p"]);
        assert_eq!(cli.board.as_deref(), Some("esp32dev"));
        assert_eq!(cli.project_dir, Some(PathBuf::from("/tmp/p")));
        assert!(!cli.list);

        let cli = parse(&["--list"]);
        assert!(cli.list);
        let cli = parse(&["--interactive"]);
        assert!(cli.interactive);
    }

    #[test]
    fn unknown_board_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ini = "[platformio]\ndefault_envs = esp32dev\n\n[env:esp32dev]\nboard = esp32dev\n";
        std::fs::write(dir.path().join("platformio.ini"), ini).unwrap();

        let cli = parse(&[
            "--board",
            "not-a-board",
            "--project-dir",
            dir.path().to_str().unwrap(),
        ]);
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("--list"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("platformio.ini")).unwrap(),
            ini
        );
    }

    #[test]
    fn list_wins_over_board() {
        let cli = parse(&["--list", "--board", "not-a-board"]);
        run(cli).unwrap();
    }

    #[test]
    fn configure_twice_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let ini = "\
[platformio]
default_envs = esp32dev

[env:esp32dev]
platform = espressif32
board = esp32dev
build_flags =
    -DCORE_DEBUG_LEVEL=3
";
        std::fs::write(dir.path().join("platformio.ini"), ini).unwrap();
        let args = [
            "-b",
            "esp32-s3-box",
            "-C",
            dir.path().to_str().unwrap(),
        ];

        run(parse(&args)).unwrap();
        let first = std::fs::read_to_string(dir.path().join("platformio.ini")).unwrap();
        run(parse(&args)).unwrap();
        let second = std::fs::read_to_string(dir.path().join("platformio.ini")).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches("-DBOARD_HAS_PSRAM").count(), 1);
    }
}
