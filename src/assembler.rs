//! Breadth-first assembly of a single component.

use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashSet;

use crate::error::StoreError;
use crate::matcher::find_neighbor;
use crate::pieces::{Component, Connection, PieceId};
use crate::store::PieceStore;

/// Assembles the component reachable from `start`.
///
/// Every piece pulled into the component is added to `visited`, starting with
/// `start` itself. Pieces already in `visited` are never matched again, so
/// repeated calls with the same set carve out disjoint components.
///
/// Connections are listed in frontier order, and within one piece in the
/// order of its edge codes. Nothing is written to the store.
pub fn assemble<S: PieceStore + ?Sized>(
    store: &S,
    start: PieceId,
    puzzle: &str,
    visited: &mut FxHashSet<PieceId>,
) -> Result<Component, StoreError> {
    let mut component = Component::singleton(start);
    let mut frontier = VecDeque::from([start]);
    visited.insert(start);

    while let Some(current) = frontier.pop_front() {
        for edge_code in store.get_edge_codes(current, puzzle)? {
            let Some(neighbor) = find_neighbor(store, edge_code, current, visited, puzzle)? else {
                continue;
            };

            trace!("{}: {} -> {} via {}", puzzle, current, neighbor, edge_code);
            component.connections.push(Connection {
                parent: current,
                piece_id: neighbor,
                edge_code,
            });
            visited.insert(neighbor);
            frontier.push_back(neighbor);
        }
    }

    Ok(component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{EdgeCode, Piece};
    use crate::store::MemoryStore;

    fn store_with(pieces: &[(PieceId, &[EdgeCode])]) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.create_puzzle("P", pieces.len() as u32);
        for &(id, edges) in pieces {
            store.add_piece(Piece::new("P", id, edges.to_vec())).unwrap();
        }
        store
    }

    fn conn(parent: PieceId, piece_id: PieceId, edge_code: EdgeCode) -> Connection {
        Connection { parent, piece_id, edge_code }
    }

    #[test]
    fn follows_frontier_order() {
        // 1 - 2 - 4
        // |
        // 3 - 5
        let store = store_with(&[
            (1, &[12, 13]),
            (2, &[12, 24]),
            (3, &[13, 35]),
            (4, &[24]),
            (5, &[35]),
        ]);
        let mut visited = FxHashSet::default();
        let component = assemble(&store, 1, "P", &mut visited).unwrap();

        assert_eq!(component.root, 1);
        assert_eq!(
            component.connections,
            vec![conn(1, 2, 12), conn(1, 3, 13), conn(2, 4, 24), conn(3, 5, 35)]
        );
        assert_eq!(visited.len(), 5);
    }

    #[test]
    fn start_is_marked_visited_even_when_isolated() {
        let store = store_with(&[(1, &[5]), (2, &[6])]);
        let mut visited = FxHashSet::default();
        let component = assemble(&store, 2, "P", &mut visited).unwrap();

        assert_eq!(component, Component::singleton(2));
        assert!(visited.contains(&2));
        assert!(!visited.contains(&1));
    }

    #[test]
    fn visited_pieces_are_not_reclaimed() {
        let store = store_with(&[(1, &[10]), (2, &[10, 20]), (3, &[20])]);
        let mut visited: FxHashSet<PieceId> = [2].into_iter().collect();
        let component = assemble(&store, 1, "P", &mut visited).unwrap();

        assert!(component.connections.is_empty());
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn cycles_do_not_revisit_pieces() {
        // triangle: each pair shares a code
        let store = store_with(&[(1, &[12, 13]), (2, &[12, 23]), (3, &[13, 23])]);
        let mut visited = FxHashSet::default();
        let component = assemble(&store, 1, "P", &mut visited).unwrap();

        assert_eq!(component.connections, vec![conn(1, 2, 12), conn(1, 3, 13)]);
    }

    #[test]
    fn unknown_start_piece_yields_singleton() {
        let store = store_with(&[(1, &[10])]);
        let mut visited = FxHashSet::default();
        let component = assemble(&store, 77, "P", &mut visited).unwrap();

        assert_eq!(component, Component::singleton(77));
    }
}
