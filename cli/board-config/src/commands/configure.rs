//! Apply a board to the project's files.

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use espkit_boards::BoardProfile;
use espkit_project::platformio::SectionEdit;
use espkit_project::{header, metadata, platformio, Outcome, ProjectSettings};

/// Rewrite `platformio.ini`, the config header and `project.json` for `board`.
///
/// The three edits are independent: a failure in one is reported and the
/// others still run, but the command as a whole fails.
pub fn run(project_dir: &Path, settings: &ProjectSettings, board: &BoardProfile) -> Result<()> {
    println!();
    espkit_boards::describe_board(board, &mut io::stdout().lock())?;
    println!();

    let files = settings.files(project_dir);
    let mut failed = 0;

    match platformio::rewrite(&files.platformio, board, settings.template_env())
        .with_context(|| format!("updating {}", files.platformio.display()))
    {
        Ok(edit) => {
            if edit.section == SectionEdit::Missing {
                println!("Updated default environment in {}", files.platformio.display());
            } else {
                println!("Updated {} for {}", files.platformio.display(), board.name);
            }
        }
        Err(e) => {
            log::error!("{e:#}");
            failed += 1;
        }
    }

    match header::rewrite(&files.header, board)
        .with_context(|| format!("updating {}", files.header.display()))
    {
        Ok(Outcome::Updated) => {
            println!("Updated {} for GPIO{}", files.header.display(), board.led_pin)
        }
        Ok(Outcome::Skipped) => {}
        Err(e) => {
            log::error!("{e:#}");
            failed += 1;
        }
    }

    match metadata::rewrite(&files.metadata, board)
        .with_context(|| format!("updating {}", files.metadata.display()))
    {
        Ok(Outcome::Updated) => println!("Updated {} for {}", files.metadata.display(), board.name),
        Ok(Outcome::Skipped) => {}
        Err(e) => {
            log::error!("{e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("configuration failed ({failed} of 3 files)");
    }

    println!();
    println!("Successfully configured for {}!", board.name);
    println!();
    println!("Next steps:");
    println!("1. Build: pio run -e {}", board.id);
    println!("2. Upload: pio run -e {} --target upload", board.id);
    println!("3. Monitor: pio device monitor");
    Ok(())
}
