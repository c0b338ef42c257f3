//! Interactive Hoppers session: a current board plus the moves a player can
//! make on it.
//!
//! Every operation returns a [`ModelEvent`] describing what happened; the
//! front-end decides how to show it.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{info, warn};
use smallvec::SmallVec;

use super::board::{Board, Coordinates};
use crate::error::LoadError;
use crate::solver::Solver;

/// Outcome of a model operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    Loaded { name: String },
    LoadFailed { path: PathBuf, reason: String },
    Reset,
    Selected(Coordinates),
    NoFrog(Coordinates),
    Jumped { from: Coordinates, to: Coordinates },
    IllegalJump { from: Coordinates, to: Coordinates },
    NextStep,
    AlreadySolved,
    NoSolution,
}

impl fmt::Display for ModelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelEvent::Loaded { name } => write!(f, "Loaded: {}", name),
            ModelEvent::LoadFailed { path, reason } => {
                write!(f, "Failed to load: {} ({})", path.display(), reason)
            }
            ModelEvent::Reset => write!(f, "Puzzle reset!"),
            ModelEvent::Selected(at) => write!(f, "Selected {}", at),
            ModelEvent::NoFrog(at) => write!(f, "No frog at {}", at),
            ModelEvent::Jumped { from, to } => write!(f, "Jumped from {} to {}", from, to),
            ModelEvent::IllegalJump { from, to } => write!(f, "Can't jump from {} to {}", from, to),
            ModelEvent::NextStep => write!(f, "Next step!"),
            ModelEvent::AlreadySolved => write!(f, "Already solved!"),
            ModelEvent::NoSolution => write!(f, "No solution!"),
        }
    }
}

/// A board being played, the file it came from and the cells picked so far
#[derive(Debug, Clone)]
pub struct HoppersModel {
    board: Board,
    source: PathBuf,
    selection: SmallVec<[Coordinates; 2]>,
}

impl HoppersModel {
    /// Start a session on the board stored at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let board = Board::load(path.as_ref())?;
        Ok(Self::with_board(board, path.as_ref()))
    }

    /// Start a session on an already loaded board; `reset` reloads `source`
    pub fn with_board<P: Into<PathBuf>>(board: Board, source: P) -> Self {
        Self {
            board,
            source: source.into(),
            selection: SmallVec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Cells selected and waiting for a destination
    pub fn selection(&self) -> &[Coordinates] {
        &self.selection
    }

    /// Switch to the board stored at `path`. On failure the current board and
    /// file are kept.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> ModelEvent {
        let path = path.as_ref();
        match Board::load(path) {
            Ok(board) => {
                self.board = board;
                self.source = path.to_path_buf();
                self.selection.clear();
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                info!("loaded {}", path.display());
                ModelEvent::Loaded { name }
            }
            Err(e) => {
                warn!("failed to load {}: {}", path.display(), e);
                ModelEvent::LoadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Reload the current file from disk
    pub fn reset(&mut self) -> ModelEvent {
        match Board::load(&self.source) {
            Ok(board) => {
                self.board = board;
                self.selection.clear();
                ModelEvent::Reset
            }
            Err(e) => {
                warn!("failed to reset from {}: {}", self.source.display(), e);
                ModelEvent::LoadFailed {
                    path: self.source.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Pick a cell. The first pick must be a frog, the second is where it
    /// should land; after the second pick the selection starts over whether
    /// or not the jump was legal.
    pub fn select(&mut self, row: i32, col: i32) -> ModelEvent {
        let at = Coordinates::new(row, col);

        let Some(&from) = self.selection.first() else {
            if self.board.cell(at).is_some_and(|cell| cell.is_frog()) {
                self.selection.push(at);
                return ModelEvent::Selected(at);
            }
            return ModelEvent::NoFrog(at);
        };

        self.selection.clear();
        match self.board.jump(from, at) {
            Some(next) => {
                self.board = next;
                ModelEvent::Jumped { from, to: at }
            }
            None => ModelEvent::IllegalJump { from, to: at },
        }
    }

    /// Shortest sequence of boards from the current one to a solved one,
    /// empty if there is none
    pub fn solve(&self) -> Vec<Board> {
        Solver::new(self.board.clone()).solution_path()
    }

    /// Advance the board one step along a shortest solution
    pub fn hint(&mut self) -> ModelEvent {
        self.selection.clear();
        let mut path = self.solve().into_iter();
        match (path.next(), path.next()) {
            (Some(_), Some(next)) => {
                self.board = next;
                ModelEvent::NextStep
            }
            (Some(_), None) => ModelEvent::AlreadySolved,
            _ => ModelEvent::NoSolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PuzzleState;
    use std::fs;

    const TWO_JUMPS: &str = "1 9\nR . G . . . G . .\n";

    fn model(text: &str) -> HoppersModel {
        HoppersModel::with_board(text.parse().unwrap(), "/nonexistent/board.txt")
    }

    fn temp_board(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("puzzle-solver-{}-{}", std::process::id(), name));
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_select_and_jump() {
        let mut m = model(TWO_JUMPS);
        assert_eq!(m.select(0, 0), ModelEvent::Selected(Coordinates::new(0, 0)));
        assert_eq!(m.selection(), &[Coordinates::new(0, 0)]);
        assert_eq!(
            m.select(0, 4),
            ModelEvent::Jumped {
                from: Coordinates::new(0, 0),
                to: Coordinates::new(0, 4)
            }
        );
        assert!(m.selection().is_empty());
        assert_eq!(m.board(), &"1 9\n. . . . R . G . .".parse::<Board>().unwrap());
    }

    #[test]
    fn test_select_empty_cell() {
        let mut m = model(TWO_JUMPS);
        assert_eq!(m.select(0, 1), ModelEvent::NoFrog(Coordinates::new(0, 1)));
        assert_eq!(m.select(5, 5), ModelEvent::NoFrog(Coordinates::new(5, 5)));
        assert!(m.selection().is_empty());
    }

    #[test]
    fn test_illegal_jump_leaves_board() {
        let mut m = model(TWO_JUMPS);
        let before = m.board().clone();
        m.select(0, 0);
        assert_eq!(
            m.select(0, 2),
            ModelEvent::IllegalJump {
                from: Coordinates::new(0, 0),
                to: Coordinates::new(0, 2)
            }
        );
        assert_eq!(m.board(), &before);
        assert!(m.selection().is_empty());
    }

    #[test]
    fn test_hint_walks_to_solution() {
        let mut m = model(TWO_JUMPS);
        assert_eq!(m.hint(), ModelEvent::NextStep);
        assert_eq!(m.hint(), ModelEvent::NextStep);
        assert!(m.board().is_goal());
        assert_eq!(m.hint(), ModelEvent::AlreadySolved);
    }

    #[test]
    fn test_hint_without_solution() {
        let mut m = model("1 5\nR . . . G");
        let before = m.board().clone();
        assert_eq!(m.hint(), ModelEvent::NoSolution);
        assert_eq!(m.board(), &before);
    }

    #[test]
    fn test_load_and_reset() {
        let path = temp_board("load", TWO_JUMPS);
        let mut m = model("1 1\nR");
        assert!(matches!(m.load(&path), ModelEvent::Loaded { .. }));
        assert_eq!(m.source(), path.as_path());

        m.hint();
        assert_ne!(m.board(), &TWO_JUMPS.parse::<Board>().unwrap());
        assert_eq!(m.reset(), ModelEvent::Reset);
        assert_eq!(m.board(), &TWO_JUMPS.parse::<Board>().unwrap());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_load_keeps_board() {
        let mut m = model(TWO_JUMPS);
        let before = m.board().clone();
        assert!(matches!(m.load("/nonexistent/other.txt"), ModelEvent::LoadFailed { .. }));
        assert!(matches!(m.reset(), ModelEvent::LoadFailed { .. }));
        assert_eq!(m.board(), &before);
        assert_eq!(m.source(), Path::new("/nonexistent/board.txt"));
    }

    #[test]
    fn test_bundled_boards() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");

        let m = HoppersModel::open(data.join("hoppers-two-jumps.txt")).unwrap();
        let path = m.solve();
        assert_eq!(path.len(), 3);
        assert_eq!(path[2].frogs(), &[Coordinates::new(0, 4)]);

        let mut m = HoppersModel::open(data.join("hoppers-stuck.txt")).unwrap();
        assert_eq!(m.hint(), ModelEvent::NoSolution);
    }
}
