//! Loading boards from their text format.
//!
//! ```text
//! 5 5
//! . * . * .
//! * G * G *
//! . * R * .
//! * G * G *
//! . * . * .
//! ```
//!
//! The first line holds `rows cols`, then one line per row with `cols`
//! whitespace separated single-character cells.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::board::{Board, Cell};
use crate::error::LoadError;

impl Board {
    /// Read and parse a board file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let board: Board = text.parse()?;
        debug!(
            "loaded {}x{} board from {} with {} frogs",
            board.rows(),
            board.cols(),
            path.display(),
            board.frogs().len()
        );
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines().map(str::trim);

        let header = lines
            .by_ref()
            .find(|line| !line.is_empty())
            .ok_or(LoadError::MissingHeader)?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        let (rows, cols) = match fields.as_slice() {
            [rows, cols] => (rows.parse::<usize>()?, cols.parse::<usize>()?),
            _ => return Err(LoadError::MalformedHeader(header.to_string())),
        };
        if rows == 0 || cols == 0 {
            return Err(LoadError::EmptyBoard { rows, cols });
        }

        // coordinates are i32, and the header alone must not decide the allocation
        let area = rows
            .checked_mul(cols)
            .filter(|_| i32::try_from(rows).is_ok() && i32::try_from(cols).is_ok())
            .ok_or(LoadError::BoardTooLarge { rows, cols })?;
        let mut cells = Vec::with_capacity(area.min(text.len()));
        for row in 0..rows {
            let line = lines.next().ok_or(LoadError::MissingRow {
                expected: rows,
                found: row,
            })?;

            let mut found = 0;
            for token in line.split_whitespace() {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => cells.push(Cell::from_symbol(symbol)),
                    _ => {
                        return Err(LoadError::BadSymbol {
                            row,
                            token: token.to_string(),
                        })
                    }
                }
                found += 1;
            }
            if found != cols {
                return Err(LoadError::RowWidth {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        if let Some(extra) = lines.find(|line| !line.is_empty()) {
            return Err(LoadError::TrailingContent(extra.to_string()));
        }

        Ok(Board::from_cells(rows, cols, cells))
    }
}
