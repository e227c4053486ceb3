//! Piece storage.
//!
//! The solver reads pieces through [`PieceStore`] and writes discovered
//! connections through [`ConnectionSink`]. [`MemoryStore`] implements both and
//! also carries the catalogue operations used by the command line: creating
//! puzzles, adding pieces and listing what is stored.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::matcher::select_candidate;
use crate::pieces::{Connection, EdgeCode, Piece, PieceId, Puzzle, PuzzleSummary};

/// Read access to the pieces of a puzzle.
///
/// Unknown puzzles behave as empty ones; implementations return errors only
/// when the store itself cannot answer.
pub trait PieceStore {
    /// Ids of every piece in `puzzle`, in a stable order.
    fn list_piece_ids(&self, puzzle: &str) -> Result<Vec<PieceId>, StoreError>;

    /// Edge codes of a piece, or an empty list if the piece is not stored.
    fn get_edge_codes(&self, piece_id: PieceId, puzzle: &str) -> Result<Vec<EdgeCode>, StoreError>;

    /// Ids of every piece in `puzzle` carrying `edge_code`.
    fn pieces_with_edge_code(
        &self,
        edge_code: EdgeCode,
        puzzle: &str,
    ) -> Result<Vec<PieceId>, StoreError>;

    /// Declared piece count of `puzzle`, if the store tracks one.
    fn declared_piece_count(&self, _puzzle: &str) -> Result<Option<u32>, StoreError> {
        Ok(None)
    }

    /// Lowest-id piece carrying `edge_code` that is neither `excluding_piece_id`
    /// nor in `excluding_ids`.
    fn find_piece_with_edge_code(
        &self,
        edge_code: EdgeCode,
        excluding_piece_id: PieceId,
        excluding_ids: &FxHashSet<PieceId>,
        puzzle: &str,
    ) -> Result<Option<PieceId>, StoreError> {
        let candidates = self.pieces_with_edge_code(edge_code, puzzle)?;
        Ok(select_candidate(candidates, excluding_piece_id, excluding_ids))
    }
}

/// Write access for discovered connections.
pub trait ConnectionSink {
    /// Records that `a` and `b` connect through `edge_code`, in both directions.
    ///
    /// Recording the same connection twice leaves the store unchanged.
    fn persist_connection(
        &mut self,
        a: PieceId,
        b: PieceId,
        edge_code: EdgeCode,
        puzzle: &str,
    ) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct PuzzleRecord {
    total_pieces: u32,
    #[serde(default)]
    pieces: BTreeMap<PieceId, Vec<EdgeCode>>,
    #[serde(default)]
    connections: BTreeSet<Connection>,
    /// Edge code -> pieces carrying it. Rebuilt after loading.
    #[serde(skip)]
    edge_index: FxHashMap<EdgeCode, BTreeSet<PieceId>>,
}

impl PuzzleRecord {
    fn index_piece(&mut self, piece_id: PieceId, edges: &[EdgeCode]) {
        for &code in edges {
            self.edge_index.entry(code).or_default().insert(piece_id);
        }
    }

    fn reindex(&mut self) {
        self.edge_index.clear();
        let pieces = std::mem::take(&mut self.pieces);
        for (&piece_id, edges) in &pieces {
            self.index_piece(piece_id, edges);
        }
        self.pieces = pieces;
    }
}

/// An in-memory piece store keyed by puzzle name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    puzzles: BTreeMap<String, PuzzleRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a puzzle, or updates the declared piece count of an existing one.
    pub fn create_puzzle(&mut self, name: &str, total_pieces: u32) {
        let record = self.puzzles.entry(name.to_owned()).or_default();
        record.total_pieces = total_pieces;
        debug!("puzzle '{}' declared with {} pieces", name, total_pieces);
    }

    /// Adds a piece to an existing puzzle.
    pub fn add_piece(&mut self, piece: Piece) -> Result<(), StoreError> {
        let record = self
            .puzzles
            .get_mut(&piece.puzzle_name)
            .ok_or_else(|| StoreError::UnknownPuzzle(piece.puzzle_name.clone()))?;

        if record.pieces.contains_key(&piece.piece_id) {
            return Err(StoreError::DuplicatePiece {
                piece_id: piece.piece_id,
                puzzle: piece.puzzle_name,
            });
        }

        record.index_piece(piece.piece_id, &piece.edges);
        record.pieces.insert(piece.piece_id, piece.edges);
        debug!("added piece {} to '{}'", piece.piece_id, piece.puzzle_name);
        Ok(())
    }

    pub fn puzzle(&self, name: &str) -> Option<Puzzle> {
        self.puzzles.get(name).map(|record| Puzzle {
            name: name.to_owned(),
            total_pieces: record.total_pieces,
        })
    }

    /// Every stored puzzle, sorted by name.
    pub fn puzzles(&self) -> Vec<PuzzleSummary> {
        self.puzzles
            .iter()
            .map(|(name, record)| PuzzleSummary {
                name: name.clone(),
                total_pieces: record.total_pieces,
                current_pieces: record.pieces.len(),
            })
            .collect()
    }

    /// Every piece of `puzzle`, sorted by id.
    pub fn pieces(&self, puzzle: &str) -> Vec<Piece> {
        self.puzzles
            .get(puzzle)
            .map(|record| {
                record
                    .pieces
                    .iter()
                    .map(|(&piece_id, edges)| Piece::new(puzzle, piece_id, edges.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Persisted connections of `puzzle`, both directions, sorted.
    pub fn connections(&self, puzzle: &str) -> Vec<Connection> {
        self.puzzles
            .get(puzzle)
            .map(|record| record.connections.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Removes every puzzle, piece and connection.
    pub fn clear(&mut self) {
        self.puzzles.clear();
    }

    pub(crate) fn rebuild_indexes(&mut self) {
        for record in self.puzzles.values_mut() {
            record.reindex();
        }
    }
}

impl PieceStore for MemoryStore {
    fn list_piece_ids(&self, puzzle: &str) -> Result<Vec<PieceId>, StoreError> {
        Ok(self
            .puzzles
            .get(puzzle)
            .map(|record| record.pieces.keys().copied().collect())
            .unwrap_or_default())
    }

    fn get_edge_codes(&self, piece_id: PieceId, puzzle: &str) -> Result<Vec<EdgeCode>, StoreError> {
        Ok(self
            .puzzles
            .get(puzzle)
            .and_then(|record| record.pieces.get(&piece_id))
            .cloned()
            .unwrap_or_default())
    }

    fn pieces_with_edge_code(
        &self,
        edge_code: EdgeCode,
        puzzle: &str,
    ) -> Result<Vec<PieceId>, StoreError> {
        Ok(self
            .puzzles
            .get(puzzle)
            .and_then(|record| record.edge_index.get(&edge_code))
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default())
    }

    fn declared_piece_count(&self, puzzle: &str) -> Result<Option<u32>, StoreError> {
        Ok(self.puzzles.get(puzzle).map(|record| record.total_pieces))
    }
}

impl ConnectionSink for MemoryStore {
    fn persist_connection(
        &mut self,
        a: PieceId,
        b: PieceId,
        edge_code: EdgeCode,
        puzzle: &str,
    ) -> Result<(), StoreError> {
        let record = self
            .puzzles
            .get_mut(puzzle)
            .ok_or_else(|| StoreError::UnknownPuzzle(puzzle.to_owned()))?;

        for piece_id in [a, b] {
            if !record.pieces.contains_key(&piece_id) {
                return Err(StoreError::UnknownPiece {
                    piece_id,
                    puzzle: puzzle.to_owned(),
                });
            }
        }

        record.connections.insert(Connection { parent: a, piece_id: b, edge_code });
        record.connections.insert(Connection { parent: b, piece_id: a, edge_code });
        Ok(())
    }
}
