//! Breadth-first puzzle solving.
//!
//! Any type implementing [`PuzzleState`] can be handed to [`Solver`], which
//! finds a shortest sequence of moves to a goal. Three puzzles come with the
//! crate: [`ClockState`], [`StringsState`] and the Hoppers [`Board`].

pub mod clock;
pub mod error;
pub mod hoppers;
pub mod ptui;
pub mod report;
pub mod solver;
pub mod state;
pub mod strings;

// Re-export main types
pub use clock::ClockState;
pub use error::{LoadError, SetupError};
pub use hoppers::{Board, Cell, Coordinates, HoppersModel, ModelEvent};
pub use report::SolveReport;
pub use solver::Solver;
pub use state::PuzzleState;
pub use strings::StringsState;
