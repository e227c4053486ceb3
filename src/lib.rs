//! Jigsaw Edge-Code Assembler Library
//!
//! Groups puzzle pieces into connected components by matching the integer
//! edge codes printed on their sides.

pub mod assembler;
pub mod error;
pub mod matcher;
pub mod persistence;
pub mod pieces;
pub mod report;
pub mod solver;
pub mod store;

pub use error::{SolveError, StoreError};
pub use pieces::{Component, Connection, EdgeCode, Piece, PieceId, Puzzle, PuzzleSummary, Solution};
pub use solver::{persist, solve, solve_and_persist, PersistWarning, Solved};
pub use store::{ConnectionSink, MemoryStore, PieceStore};
