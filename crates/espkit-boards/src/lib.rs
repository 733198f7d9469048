//! Catalog of supported ESP32 development boards.
//!
//! The catalog is a fixed, ordered table of [`BoardProfile`] records. The
//! order is significant: it is the numbering shown by the interactive menu.

pub mod catalog;
pub mod error;
pub mod profile;
pub mod select;

pub use catalog::{boards, find_board, select_board};
pub use error::{BoardError, Result};
pub use profile::BoardProfile;
pub use select::{describe_board, interactive_select, list_boards};
