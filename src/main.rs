//! Jigsaw Edge-Code Assembler
//!
//! Keeps a catalogue of puzzles and pieces in a JSON file and solves puzzles
//! by grouping pieces that share edge codes into connected components.
//! Connections found while solving are written back to the catalogue.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use jigsaw::{persistence, report, solver, EdgeCode, Piece, PieceId, PieceStore};

/// Assembles jigsaw puzzles by matching edge codes between pieces.
#[derive(Parser)]
#[command(name = "jigsaw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalogue file holding puzzles, pieces and persisted connections.
    #[arg(long, global = true, env = "JIGSAW_STORE", default_value = persistence::DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a puzzle, or update the declared piece count of an existing one.
    CreatePuzzle { name: String, total_pieces: u32 },
    /// Add a piece with its edge codes to an existing puzzle.
    #[command(allow_negative_numbers = true)]
    AddPiece {
        puzzle: String,
        piece_id: PieceId,
        edges: Vec<EdgeCode>,
    },
    /// List stored puzzles with declared and stored piece counts.
    Puzzles,
    /// List the pieces of a puzzle.
    Pieces { puzzle: String },
    /// Group a puzzle's pieces into connected components.
    #[command(allow_negative_numbers = true)]
    Solve {
        puzzle: String,
        /// Piece to start assembling from.
        #[arg(long)]
        start: Option<PieceId>,
        /// Print the solution as JSON.
        #[arg(long)]
        json: bool,
        /// Do not write discovered connections back to the catalogue.
        #[arg(long)]
        no_persist: bool,
    },
    /// List connections recorded by earlier solves.
    Connections { puzzle: String },
    /// Delete every puzzle, piece and connection.
    Cleanup,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the logger; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Executes one command, printing results to `out` and warnings to `err`.
fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut store = persistence::load(&cli.store)?;

    match &cli.command {
        Command::CreatePuzzle { name, total_pieces } => {
            store.create_puzzle(name, *total_pieces);
            persistence::save(&store, &cli.store)?;
            writeln!(out, "Puzzle '{}' created successfully", name)?;
        }
        Command::AddPiece { puzzle, piece_id, edges } => {
            store.add_piece(Piece::new(puzzle.as_str(), *piece_id, edges.clone()))?;
            persistence::save(&store, &cli.store)?;
            writeln!(out, "Piece {} added to '{}'", piece_id, puzzle)?;
        }
        Command::Puzzles => {
            write!(out, "{}", report::format_puzzles(&store.puzzles()))?;
        }
        Command::Pieces { puzzle } => {
            write!(out, "{}", report::format_pieces(&store.pieces(puzzle)))?;
        }
        Command::Solve {
            puzzle,
            start,
            json,
            no_persist,
        } => {
            let (solution, warnings) = if *no_persist {
                (solver::solve(&store, puzzle, *start)?, Vec::new())
            } else {
                let solved = solver::solve_and_persist(&mut store, puzzle, *start)?;
                (solved.solution, solved.warnings)
            };

            if *json {
                serde_json::to_writer_pretty(&mut *out, &solution)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", report::format_solution(&solution))?;
            }

            if !warnings.is_empty() {
                writeln!(
                    err,
                    "warning: {} of {} connections were not persisted",
                    warnings.len(),
                    solution.connections().count()
                )?;
            }

            // the solution stands even when the catalogue cannot be written
            if !*no_persist {
                if let Err(e) = persistence::save(&store, &cli.store) {
                    writeln!(
                        err,
                        "warning: connections were not saved to {}: {}",
                        cli.store.display(),
                        e
                    )?;
                }
            }
        }
        Command::Connections { puzzle } => {
            if store.list_piece_ids(puzzle)?.is_empty() {
                writeln!(out, "Puzzle '{}' has no pieces", puzzle)?;
            } else {
                write!(out, "{}", report::format_connections(&store.connections(puzzle)))?;
            }
        }
        Command::Cleanup => {
            store.clear();
            persistence::save(&store, &cli.store)?;
            writeln!(out, "Catalogue cleaned successfully")?;
        }
    }

    Ok(())
}
