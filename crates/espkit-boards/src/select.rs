//! Catalog listing and interactive board selection.
//!
//! Everything here writes to a caller-supplied writer and reads from a
//! caller-supplied reader, so the binaries pass stdout/stdin and tests pass
//! byte buffers.

use std::io::{self, BufRead, Write};

use crate::catalog::boards;
use crate::profile::BoardProfile;

const QUIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

/// Print every board in the catalog.
pub fn list_boards<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available ESP32 Boards:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    for board in boards() {
        writeln!(out, "{}", board.id)?;
        writeln!(out, "   Name: {}", board.name)?;
        writeln!(out, "   Flash: {}", board.flash_size)?;
        writeln!(out, "   PSRAM: {}", board.psram_label())?;
        writeln!(out, "   LED Pin: GPIO{}", board.led_pin)?;
        writeln!(out, "   Description: {}", board.description)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print the settings that will be applied for `board`.
pub fn describe_board<W: Write>(board: &BoardProfile, out: &mut W) -> io::Result<()> {
    writeln!(out, "Configuring for: {}", board.name)?;
    writeln!(out, "Board ID: {}", board.id)?;
    writeln!(out, "Platform: {}", board.platform)?;
    writeln!(out, "Framework: {}", board.framework)?;
    writeln!(out, "Flash Size: {}", board.flash_size)?;
    writeln!(out, "PSRAM: {}", board.psram_label())?;
    writeln!(out, "LED Pin: GPIO{}", board.led_pin)?;
    Ok(())
}

/// Outcome of interpreting one line of menu input.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Quit,
    Pick(usize),
    OutOfRange,
    NotANumber,
}

fn parse_choice(line: &str, count: usize) -> Choice {
    let line = line.trim();
    if QUIT_TOKENS.iter().any(|t| line.eq_ignore_ascii_case(t)) {
        return Choice::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Choice::Pick(n - 1),
        Ok(_) => Choice::OutOfRange,
        // Negative numbers are numeric input, just never in range.
        Err(_) if line.parse::<i64>().is_ok() => Choice::OutOfRange,
        Err(_) => Choice::NotANumber,
    }
}

/// Show a numbered menu and read a 1-based selection.
///
/// Returns `Ok(None)` when the user types a quit token (`q`, `quit`,
/// `exit`) or input ends. Invalid entries print a message and prompt again.
pub fn interactive_select<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<&'static BoardProfile>>
where
    R: BufRead,
    W: Write,
{
    let catalog = boards();

    writeln!(out, "ESP32 Board Configuration Tool")?;
    writeln!(out, "{}", "=".repeat(40))?;
    for (i, board) in catalog.iter().enumerate() {
        writeln!(out, "{:2}. {}", i + 1, board.name)?;
        writeln!(out, "    ID: {}", board.id)?;
        writeln!(out, "    Flash: {}, PSRAM: {}", board.flash_size, board.psram_label())?;
        writeln!(out)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "Select board number (1-{}): ", catalog.len())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Cancelled by user")?;
            return Ok(None);
        }

        match parse_choice(&line, catalog.len()) {
            Choice::Quit => return Ok(None),
            Choice::Pick(index) => return Ok(Some(&catalog[index])),
            Choice::OutOfRange => writeln!(out, "Invalid selection. Please try again.")?,
            Choice::NotANumber => writeln!(out, "Please enter a valid number.")?,
        }
    }
}
