//! Puzzle, piece and solution types.
//!
//! A piece is nothing more than an id and the edge codes printed on its sides.
//! Two pieces of the same puzzle fit together across a side when they share a
//! code.

use serde::{Deserialize, Serialize};

/// Puzzle-scoped piece identifier.
pub type PieceId = i64;

/// Integer label identifying the shape class of one piece side.
pub type EdgeCode = i64;

/// A puzzle definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub name: String,
    /// Declared piece count. Informational only.
    pub total_pieces: u32,
}

/// A puzzle together with how many pieces are currently stored for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub name: String,
    pub total_pieces: u32,
    pub current_pieces: usize,
}

/// A single piece with its edge codes in caller-defined side order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub piece_id: PieceId,
    pub edges: Vec<EdgeCode>,
    pub puzzle_name: String,
}

impl Piece {
    pub fn new(puzzle_name: impl Into<String>, piece_id: PieceId, edges: Vec<EdgeCode>) -> Self {
        Self {
            piece_id,
            edges,
            puzzle_name: puzzle_name.into(),
        }
    }
}

/// A discovered pairing: `parent` reached `piece_id` through `edge_code`.
///
/// The pairing holds in both directions; `parent` only records which side of
/// it the traversal came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub parent: PieceId,
    pub piece_id: PieceId,
    pub edge_code: EdgeCode,
}

/// A maximal group of pieces reachable from `root` through matching edges.
///
/// Only the discovery edges of the traversal are kept, not the full adjacency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub root: PieceId,
    pub connections: Vec<Connection>,
}

impl Component {
    /// Creates a component holding only its root.
    pub fn singleton(root: PieceId) -> Self {
        Self {
            root,
            connections: Vec::new(),
        }
    }

    /// Returns every piece of the component, root first, in discovery order.
    pub fn pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        std::iter::once(self.root).chain(self.connections.iter().map(|c| c.piece_id))
    }

    /// Number of pieces in the component.
    pub fn len(&self) -> usize {
        self.connections.len() + 1
    }

    /// Always false: a component holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The partition of a puzzle's pieces into components.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub puzzle_name: String,
    pub components: Vec<Component>,
}

impl Solution {
    pub fn empty(puzzle_name: impl Into<String>) -> Self {
        Self {
            puzzle_name: puzzle_name.into(),
            components: Vec::new(),
        }
    }

    /// Total number of pieces across all components.
    pub fn piece_count(&self) -> usize {
        self.components.iter().map(Component::len).sum()
    }

    /// All connections of the solution in component order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.components.iter().flat_map(|c| c.connections.iter())
    }
}
