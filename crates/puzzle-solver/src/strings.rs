//! The Strings puzzle: rotate one letter at a time from `start` to `end`.

use std::fmt;

use crate::error::SetupError;
use crate::state::PuzzleState;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringsState {
    current: Vec<u8>,
    end: Vec<u8>,
}

impl StringsState {
    /// Both words must be non-empty, of equal length and spelled with `A..=Z`
    pub fn new(start: &str, end: &str) -> Result<Self, SetupError> {
        if start.is_empty() || end.is_empty() {
            return Err(SetupError::EmptyString);
        }
        if start.len() != end.len() {
            return Err(SetupError::LengthMismatch {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        for word in [start, end] {
            if !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(SetupError::NotUppercase(word.to_string()));
            }
        }
        Ok(Self {
            current: start.as_bytes().to_vec(),
            end: end.as_bytes().to_vec(),
        })
    }

    /// The word already spelling its target
    pub fn target(&self) -> Self {
        Self {
            current: self.end.clone(),
            end: self.end.clone(),
        }
    }

    pub fn current(&self) -> &str {
        // only ever holds A-Z
        std::str::from_utf8(&self.current).unwrap_or_default()
    }

    fn with_letter(&self, index: usize, letter: u8) -> Self {
        let mut current = self.current.clone();
        current[index] = letter;
        Self {
            current,
            end: self.end.clone(),
        }
    }
}

fn next_letter(letter: u8) -> u8 {
    if letter == b'Z' {
        b'A'
    } else {
        letter + 1
    }
}

fn previous_letter(letter: u8) -> u8 {
    if letter == b'A' {
        b'Z'
    } else {
        letter - 1
    }
}

impl PuzzleState for StringsState {
    fn is_goal(&self) -> bool {
        self.current == self.end
    }

    fn neighbors(&self) -> Vec<Self> {
        let mut neighbors = Vec::with_capacity(self.current.len() * 2);
        for (index, &letter) in self.current.iter().enumerate() {
            neighbors.push(self.with_letter(index, next_letter(letter)));
            neighbors.push(self.with_letter(index, previous_letter(letter)));
        }
        neighbors
    }
}

impl fmt::Display for StringsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())
    }
}
