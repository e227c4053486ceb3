//! Error types for store access and solving.

use thiserror::Error;

use crate::pieces::PieceId;

/// Errors raised by a piece store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("puzzle '{0}' does not exist")]
    UnknownPuzzle(String),

    #[error("piece {piece_id} does not exist in puzzle '{puzzle}'")]
    UnknownPiece { piece_id: PieceId, puzzle: String },

    #[error("piece with ID {piece_id} already exists in puzzle '{puzzle}'")]
    DuplicatePiece { piece_id: PieceId, puzzle: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort a solve.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("store lookup failed while solving '{puzzle}': {source}")]
    Store {
        puzzle: String,
        #[source]
        source: StoreError,
    },
}

impl SolveError {
    pub(crate) fn store(puzzle: &str) -> impl FnOnce(StoreError) -> Self + '_ {
        move |source| SolveError::Store {
            puzzle: puzzle.to_owned(),
            source,
        }
    }
}
