//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver clock <hours> <start> <end> [--json]
//!   puzzle-solver strings <start> <end> [--json]
//!   puzzle-solver hoppers <board.txt> [--json]
//!   puzzle-solver play <board.txt>
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default: warn).

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::info;

use puzzle_solver::{ptui, Board, ClockState, HoppersModel, SolveReport, Solver, StringsState};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Shortest-path solver for the Clock, Strings and Hoppers puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a clock hand one hour at a time from start to end
    Clock {
        /// Number of hours on the clock face
        hours: u32,
        start: u32,
        end: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rotate one letter at a time from start to end
    Strings {
        start: String,
        end: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve a Hoppers board file
    Hoppers {
        /// Path to the board file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a Hoppers board interactively on the console
    Play {
        /// Path to the board file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clock {
            hours,
            start,
            end,
            json,
        } => {
            let clock = ClockState::new(hours, start, end).unwrap_or_else(|e| fail(e));
            let solver = Solver::new(clock);
            let path = solver.path(&clock, &clock.target());
            let label = format!("Hours: {}, Start: {}, End: {}", hours, start, end);
            print_report(&SolveReport::new(label, &solver, &path), json);
        }

        Commands::Strings { start, end, json } => {
            let word = StringsState::new(&start, &end).unwrap_or_else(|e| fail(e));
            let solver = Solver::new(word.clone());
            let path = solver.path(&word, &word.target());
            let label = format!("Start: {}, End: {}", start, end);
            print_report(&SolveReport::new(label, &solver, &path), json);
        }

        Commands::Hoppers { file, json } => {
            let board = Board::load(&file).unwrap_or_else(|e| fail(e));
            info!("solving {}", file.display());
            let solver = Solver::new(board);
            let label = format!("File: {}", file.display());
            print_report(&SolveReport::new(label, &solver, &solver.solution_path()), json);
        }

        Commands::Play { file } => {
            let mut model = HoppersModel::open(&file).unwrap_or_else(|e| fail(e));
            let stdin = io::stdin();
            if let Err(e) = ptui::run(&mut model, stdin.lock(), &mut io::stdout()) {
                fail(e);
            }
        }
    }
}

fn print_report(report: &SolveReport, json: bool) {
    if json {
        match report.render_json() {
            Ok(text) => println!("{}", text),
            Err(e) => fail(e),
        }
    } else {
        print!("{}", report.render_text());
    }
}

fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    process::exit(1);
}
