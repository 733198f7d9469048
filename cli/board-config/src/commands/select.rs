//! Board resolution from `--board` or the interactive menu.

use std::io;

use anyhow::Result;
use espkit_boards::BoardProfile;

/// Resolve the board to configure.
///
/// With an identifier, an unknown id is an error. Without one, the menu is
/// shown on stdin/stdout and `None` means the user cancelled.
pub fn resolve(board: Option<&str>) -> Result<Option<&'static BoardProfile>> {
    match board {
        Some(id) => Ok(Some(espkit_boards::select_board(id)?)),
        None => {
            let mut input = io::stdin().lock();
            let mut out = io::stdout().lock();
            Ok(espkit_boards::interactive_select(&mut input, &mut out)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_resolves_without_prompting() {
        let board = resolve(Some("esp32-c3-devkitm-1")).unwrap().unwrap();
        assert_eq!(board.led_pin, 8);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = resolve(Some("not-a-board")).unwrap_err();
        assert!(err.to_string().contains("unknown board: 'not-a-board'"));
    }
}
