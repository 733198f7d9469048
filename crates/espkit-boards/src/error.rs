//! Error types for board catalog operations.

/// Errors that can occur while resolving a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The identifier is not in the catalog.
    #[error("unknown board: '{id}'. Use --list to see available boards")]
    UnknownBoard {
        /// The identifier that was requested.
        id: String,
    },
}

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
