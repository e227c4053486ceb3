//! Neighbour lookup by edge code.
//!
//! When several pieces qualify for the same code the lowest piece id wins, so
//! repeated solves over the same pieces always pick the same neighbour.

use rustc_hash::FxHashSet;

use crate::error::StoreError;
use crate::pieces::{EdgeCode, PieceId};
use crate::store::PieceStore;

/// Finds a piece of `puzzle` that carries `edge_code` and is neither
/// `current` nor already in `excluded`.
pub fn find_neighbor<S: PieceStore + ?Sized>(
    store: &S,
    edge_code: EdgeCode,
    current: PieceId,
    excluded: &FxHashSet<PieceId>,
    puzzle: &str,
) -> Result<Option<PieceId>, StoreError> {
    store.find_piece_with_edge_code(edge_code, current, excluded, puzzle)
}

/// Picks the lowest candidate id that is neither `current` nor excluded.
pub fn select_candidate(
    candidates: impl IntoIterator<Item = PieceId>,
    current: PieceId,
    excluded: &FxHashSet<PieceId>,
) -> Option<PieceId> {
    candidates
        .into_iter()
        .filter(|&id| id != current && !excluded.contains(&id))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Piece;
    use crate::store::MemoryStore;

    fn store_with(pieces: &[(PieceId, &[EdgeCode])]) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.create_puzzle("P", pieces.len() as u32);
        for &(id, edges) in pieces {
            store.add_piece(Piece::new("P", id, edges.to_vec())).unwrap();
        }
        store
    }

    #[test]
    fn lowest_candidate_wins() {
        let excluded = FxHashSet::default();
        assert_eq!(select_candidate([9, 3, 5], 1, &excluded), Some(3));
    }

    #[test]
    fn current_and_excluded_are_skipped() {
        let excluded: FxHashSet<PieceId> = [3].into_iter().collect();
        assert_eq!(select_candidate([1, 3, 5], 1, &excluded), Some(5));
        assert_eq!(select_candidate([1, 3], 1, &excluded), None);
    }

    #[test]
    fn finds_matching_piece_in_store() {
        let store = store_with(&[(1, &[10, 20]), (2, &[10, 30]), (3, &[20])]);
        let excluded: FxHashSet<PieceId> = [1].into_iter().collect();

        assert_eq!(find_neighbor(&store, 10, 1, &excluded, "P").unwrap(), Some(2));
        assert_eq!(find_neighbor(&store, 20, 1, &excluded, "P").unwrap(), Some(3));
        assert_eq!(find_neighbor(&store, 30, 1, &excluded, "P").unwrap(), Some(2));
        assert_eq!(find_neighbor(&store, 99, 1, &excluded, "P").unwrap(), None);
    }

    #[test]
    fn ambiguous_code_resolves_to_lowest_id() {
        let store = store_with(&[(1, &[7]), (8, &[7]), (4, &[7]), (6, &[7])]);
        let excluded: FxHashSet<PieceId> = [1].into_iter().collect();

        assert_eq!(find_neighbor(&store, 7, 1, &excluded, "P").unwrap(), Some(4));
    }

    #[test]
    fn other_puzzles_are_not_searched() {
        let mut store = store_with(&[(1, &[10])]);
        store.create_puzzle("Q", 1);
        store.add_piece(Piece::new("Q", 2, vec![10])).unwrap();

        let excluded: FxHashSet<PieceId> = [1].into_iter().collect();
        assert_eq!(find_neighbor(&store, 10, 1, &excluded, "P").unwrap(), None);
        assert_eq!(find_neighbor(&store, 10, 1, &excluded, "missing").unwrap(), None);
    }
}
