//! Hoppers board state.

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use super::jumps::{candidates, Jump};
use crate::state::PuzzleState;

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Water,
    Red,
    Green,
}

impl Cell {
    /// Anything other than `.`, `R` or `G` is water
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '.' => Cell::Empty,
            'R' => Cell::Red,
            'G' => Cell::Green,
            _ => Cell::Water,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Water => '*',
            Cell::Red => 'R',
            Cell::Green => 'G',
        }
    }

    pub fn is_frog(self) -> bool {
        matches!(self, Cell::Red | Cell::Green)
    }
}

/// Position on the board. Signed so that jump offsets can step off the edge
/// and be rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    pub row: i32,
    pub col: i32,
}

impl Coordinates {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, (rows, cols): (i32, i32)) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Frog positions, row-major
type Frogs = SmallVec<[Coordinates; 16]>;

/// An immutable Hoppers position.
///
/// `frogs` is derived from `cells` and is left out of equality and hashing.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    frogs: Frogs,
}

impl Board {
    /// Build a board from row-major cells; `cells.len()` must be `rows * cols`
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        let frogs = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_frog())
            .map(|(i, _)| Coordinates::new((i / cols) as i32, (i % cols) as i32))
            .collect();
        Self {
            rows,
            cols,
            cells,
            frogs,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Every cell holding a frog of either colour, row by row
    pub fn frogs(&self) -> &[Coordinates] {
        &self.frogs
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn green_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Green).count()
    }

    pub fn in_bounds(&self, at: Coordinates) -> bool {
        self.index(at).is_some()
    }

    fn index(&self, at: Coordinates) -> Option<usize> {
        if at.row < 0 || at.col < 0 {
            return None;
        }
        let (row, col) = (at.row as usize, at.col as usize);
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// The cell at `at`, or `None` off the board
    pub fn cell(&self, at: Coordinates) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    /// A frog at `from` lands on an empty cell `to` after leaping a green frog
    pub fn is_legal(&self, jump: &Jump) -> bool {
        self.checked(jump).is_some()
    }

    /// Cell indices of `(from, over, to)` when `jump` is legal on this board
    fn checked(&self, jump: &Jump) -> Option<(usize, usize, usize)> {
        let from = self.index(jump.from).filter(|&i| self.cells[i].is_frog())?;
        let over = self.index(jump.over).filter(|&i| self.cells[i] == Cell::Green)?;
        let to = self.index(jump.to).filter(|&i| self.cells[i] == Cell::Empty)?;
        Some((from, over, to))
    }

    /// Every legal jump on the board, frog by frog
    pub fn legal_jumps(&self) -> Vec<Jump> {
        self.frogs
            .iter()
            .flat_map(|&frog| candidates(frog))
            .filter(|jump| self.is_legal(jump))
            .collect()
    }

    /// The legal jump taking the frog at `from` to `to`, if there is one
    pub fn jump_between(&self, from: Coordinates, to: Coordinates) -> Option<Jump> {
        candidates(from)
            .find(|jump| jump.to == to)
            .filter(|jump| self.is_legal(jump))
    }

    /// The board after moving the frog at `from` to `to`, if that is legal
    pub fn jump(&self, from: Coordinates, to: Coordinates) -> Option<Board> {
        let jump = candidates(from).find(|jump| jump.to == to)?;
        self.checked(&jump).map(|indices| self.apply(indices))
    }

    /// Move the frog at `from` to `to` and clear `over`, all indices checked
    fn apply(&self, (from, over, to): (usize, usize, usize)) -> Board {
        let mut cells = self.cells.clone();
        let mover = cells[from];
        cells[from] = Cell::Empty;
        cells[over] = Cell::Empty;
        cells[to] = mover;
        Board::from_cells(self.rows, self.cols, cells)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        self.cells.hash(state);
    }
}

impl PuzzleState for Board {
    /// Solved once every green frog has been captured
    fn is_goal(&self) -> bool {
        !self.cells.contains(&Cell::Green)
    }

    fn neighbors(&self) -> Vec<Self> {
        self.frogs
            .iter()
            .flat_map(|&frog| candidates(frog))
            .filter_map(|jump| self.checked(&jump))
            .map(|indices| self.apply(indices))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = self.row(row).iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
