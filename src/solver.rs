//! Partitioning a puzzle into connected components.
//!
//! Solving only reads the store. Writing discovered connections back is a
//! separate step ([`persist`]) so the traversal can run against any
//! [`PieceStore`] without a writable backend.

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::assembler::assemble;
use crate::error::{SolveError, StoreError};
use crate::pieces::{Connection, PieceId, Solution};
use crate::store::{ConnectionSink, PieceStore};

/// A connection that could not be written back to the store.
#[derive(Debug)]
pub struct PersistWarning {
    pub connection: Connection,
    pub error: StoreError,
}

/// A solution plus any persistence failures met while recording it.
#[derive(Debug)]
pub struct Solved {
    pub solution: Solution,
    pub warnings: Vec<PersistWarning>,
}

impl Solved {
    /// True when every connection was written back.
    pub fn is_fully_persisted(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Splits every piece of `puzzle` into connected components.
///
/// Assembly starts from `start` when it names a piece of the puzzle and from
/// the first listed piece otherwise. Pieces left over after a component is
/// complete seed further components, in listing order, until every piece
/// belongs to exactly one. An unknown or empty puzzle yields no components.
pub fn solve<S: PieceStore + ?Sized>(
    store: &S,
    puzzle: &str,
    start: Option<PieceId>,
) -> Result<Solution, SolveError> {
    let all_pieces = store.list_piece_ids(puzzle).map_err(SolveError::store(puzzle))?;
    let Some(&first) = all_pieces.first() else {
        debug!("puzzle '{}' has no pieces", puzzle);
        return Ok(Solution::empty(puzzle));
    };

    if let Some(declared) = store
        .declared_piece_count(puzzle)
        .map_err(SolveError::store(puzzle))?
    {
        if declared as usize != all_pieces.len() {
            warn!(
                "puzzle '{}' declares {} pieces but {} are stored",
                puzzle,
                declared,
                all_pieces.len()
            );
        }
    }

    let start = match start {
        Some(id) if all_pieces.contains(&id) => id,
        Some(id) => {
            debug!("start piece {} not in '{}', using {}", id, puzzle, first);
            first
        }
        None => first,
    };

    let mut visited: FxHashSet<PieceId> = FxHashSet::default();
    let mut solution = Solution::empty(puzzle);

    let seeds = std::iter::once(start).chain(all_pieces.iter().copied());
    for seed in seeds {
        if visited.contains(&seed) {
            continue;
        }
        let component = assemble(store, seed, puzzle, &mut visited).map_err(SolveError::store(puzzle))?;
        debug!(
            "component rooted at {} holds {} pieces",
            component.root,
            component.len()
        );
        solution.components.push(component);
    }

    info!(
        "solved '{}': {} pieces in {} components",
        puzzle,
        solution.piece_count(),
        solution.components.len()
    );
    Ok(solution)
}

/// Writes every connection of `solution` to `sink`.
///
/// Failures do not stop the remaining writes; each is returned as a warning.
pub fn persist<K: ConnectionSink + ?Sized>(sink: &mut K, solution: &Solution) -> Vec<PersistWarning> {
    let mut warnings = Vec::new();
    for &connection in solution.connections() {
        let result = sink.persist_connection(
            connection.parent,
            connection.piece_id,
            connection.edge_code,
            &solution.puzzle_name,
        );
        if let Err(error) = result {
            warn!(
                "failed to persist {} -> {} via {} in '{}': {}",
                connection.parent, connection.piece_id, connection.edge_code, solution.puzzle_name, error
            );
            warnings.push(PersistWarning { connection, error });
        }
    }
    warnings
}

/// Solves `puzzle` and records the discovered connections in the same store.
pub fn solve_and_persist<S: PieceStore + ConnectionSink>(
    store: &mut S,
    puzzle: &str,
    start: Option<PieceId>,
) -> Result<Solved, SolveError> {
    let solution = solve(&*store, puzzle, start)?;
    let warnings = persist(store, &solution);
    Ok(Solved { solution, warnings })
}
