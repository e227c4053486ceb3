//! Plain-text rendering of solutions and catalogue listings.

use std::fmt::Write;

use crate::pieces::{Connection, Piece, PuzzleSummary, Solution};

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Formats a solution as a human-readable string.
///
/// One block per component, listing each discovery edge as
/// `parent -> piece via code` in traversal order.
pub fn format_solution(solution: &Solution) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Puzzle {}: {} in {}",
        solution.puzzle_name,
        plural(solution.piece_count(), "piece"),
        plural(solution.components.len(), "component")
    );

    for (i, component) in solution.components.iter().enumerate() {
        let _ = writeln!(
            output,
            "Component {} (root {}, {}):",
            i + 1,
            component.root,
            plural(component.len(), "piece")
        );
        if component.connections.is_empty() {
            output.push_str("  (no connections)\n");
        }
        for connection in &component.connections {
            let _ = writeln!(
                output,
                "  {} -> {} via {}",
                connection.parent, connection.piece_id, connection.edge_code
            );
        }
    }

    output
}

/// Formats the puzzle catalogue as a table.
pub fn format_puzzles(puzzles: &[PuzzleSummary]) -> String {
    let width = puzzles.iter().map(|p| p.name.len()).max().unwrap_or(0).max(4);
    let mut output = format!("{:<width$}  {:>8}  {:>8}\n", "NAME", "DECLARED", "STORED");
    for puzzle in puzzles {
        let _ = writeln!(
            output,
            "{:<width$}  {:>8}  {:>8}",
            puzzle.name, puzzle.total_pieces, puzzle.current_pieces
        );
    }
    output
}

/// Formats pieces one per line as `id: code, code, ...`.
pub fn format_pieces(pieces: &[Piece]) -> String {
    let mut output = String::new();
    for piece in pieces {
        let edges: Vec<String> = piece.edges.iter().map(ToString::to_string).collect();
        let _ = writeln!(output, "{}: {}", piece.piece_id, edges.join(", "));
    }
    output
}

/// Formats persisted connections one per line as `a <-> b via code`.
///
/// Each stored pair appears in both directions; only the `a < b` half is shown.
pub fn format_connections(connections: &[Connection]) -> String {
    let mut output = String::new();
    for connection in connections.iter().filter(|c| c.parent <= c.piece_id) {
        let _ = writeln!(
            output,
            "{} <-> {} via {}",
            connection.parent, connection.piece_id, connection.edge_code
        );
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Component;

    #[test]
    fn solution_snapshot() {
        let solution = Solution {
            puzzle_name: "P1".into(),
            components: vec![
                Component {
                    root: 1,
                    connections: vec![
                        Connection { parent: 1, piece_id: 2, edge_code: 10 },
                        Connection { parent: 1, piece_id: 3, edge_code: 20 },
                    ],
                },
                Component::singleton(4),
            ],
        };

        insta::assert_snapshot!(format_solution(&solution), @r"
        Puzzle P1: 4 pieces in 2 components
        Component 1 (root 1, 3 pieces):
          1 -> 2 via 10
          1 -> 3 via 20
        Component 2 (root 4, 1 piece):
          (no connections)
        ");
    }

    #[test]
    fn empty_solution_has_header_only() {
        assert_eq!(
            format_solution(&Solution::empty("P3")),
            "Puzzle P3: 0 pieces in 0 components\n"
        );
    }

    #[test]
    fn puzzle_table_aligns_columns() {
        let puzzles = vec![
            PuzzleSummary { name: "castle".into(), total_pieces: 500, current_pieces: 12 },
            PuzzleSummary { name: "P1".into(), total_pieces: 3, current_pieces: 3 },
        ];
        assert_eq!(
            format_puzzles(&puzzles),
            "NAME    DECLARED    STORED\n\
             castle       500        12\n\
             P1             3         3\n"
        );
    }

    #[test]
    fn connections_show_each_pair_once() {
        let connections = vec![
            Connection { parent: 1, piece_id: 2, edge_code: 10 },
            Connection { parent: 2, piece_id: 1, edge_code: 10 },
        ];
        assert_eq!(format_connections(&connections), "1 <-> 2 via 10\n");
    }

    #[test]
    fn pieces_list_edges() {
        let pieces = vec![Piece::new("P", 1, vec![10, -3]), Piece::new("P", 2, vec![])];
        assert_eq!(format_pieces(&pieces), "1: 10, -3\n2: \n");
    }
}
