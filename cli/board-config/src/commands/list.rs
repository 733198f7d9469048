//! `board-config --list` — print the board catalog.

use std::io::{self, Write};

use anyhow::Result;

/// Print every supported board.
pub fn run() -> Result<()> {
    let mut out = io::stdout().lock();
    espkit_boards::list_boards(&mut out)?;
    out.flush()?;
    Ok(())
}
