//! Error types for loading boards and setting up puzzles.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Failure to build a Hoppers board from text.
///
/// Loading is all-or-nothing: on error no board is produced and whatever
/// board the caller already holds is untouched.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The board file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input holds no `rows cols` header line
    #[error("missing `rows cols` header")]
    MissingHeader,
    /// The header line is not two integers
    #[error("malformed header `{0}`, expected `rows cols`")]
    MalformedHeader(String),
    /// One of the dimensions is not an integer
    #[error("invalid dimension: {0}")]
    ParseInt(#[from] ParseIntError),
    /// A board must have at least one row and one column
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },
    /// The header describes a board too large to address
    #[error("board dimensions {rows}x{cols} are too large")]
    BoardTooLarge { rows: usize, cols: usize },
    /// The input ended before every row was read
    #[error("expected {expected} rows, found {found}")]
    MissingRow { expected: usize, found: usize },
    /// A row does not have `cols` symbols
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Cells are single characters
    #[error("row {row}: `{token}` is not a single-character cell")]
    BadSymbol { row: usize, token: String },
    /// Non-blank text after the last row
    #[error("unexpected content after the last row: `{0}`")]
    TrailingContent(String),
}

/// Invalid arguments for the Clock and Strings puzzles
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a clock needs at least one hour")]
    NoHours,
    #[error("hour {hour} is outside 1..={hours}")]
    HourOutOfRange { hour: u32, hours: u32 },
    #[error("strings must not be empty")]
    EmptyString,
    #[error("`{start}` and `{end}` differ in length")]
    LengthMismatch { start: String, end: String },
    #[error("`{0}` contains characters outside A-Z")]
    NotUppercase(String),
}
