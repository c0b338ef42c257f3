//! The Clock puzzle: turn the hand one hour at a time until it shows `end`.

use std::fmt;

use crate::error::SetupError;
use crate::state::PuzzleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockState {
    hours: u32,
    current: u32,
    end: u32,
}

impl ClockState {
    /// A clock face numbered `1..=hours` showing `start`, aiming for `end`
    pub fn new(hours: u32, start: u32, end: u32) -> Result<Self, SetupError> {
        if hours == 0 {
            return Err(SetupError::NoHours);
        }
        for hour in [start, end] {
            if !(1..=hours).contains(&hour) {
                return Err(SetupError::HourOutOfRange { hour, hours });
            }
        }
        Ok(Self {
            hours,
            current: start,
            end,
        })
    }

    /// The clock already showing its target hour
    pub fn target(&self) -> Self {
        Self {
            current: self.end,
            ..*self
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    fn with_current(&self, current: u32) -> Self {
        Self { current, ..*self }
    }
}

impl PuzzleState for ClockState {
    fn is_goal(&self) -> bool {
        self.current == self.end
    }

    /// One hour forward, then one hour back, wrapping around the face
    fn neighbors(&self) -> Vec<Self> {
        let forward = if self.current == self.hours { 1 } else { self.current + 1 };
        let back = if self.current == 1 { self.hours } else { self.current - 1 };
        vec![self.with_current(forward), self.with_current(back)]
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_wrap() {
        let clock = ClockState::new(12, 12, 3).unwrap();
        let hours: Vec<u32> = clock.neighbors().iter().map(|c| c.current()).collect();
        assert_eq!(hours, vec![1, 11]);

        let clock = ClockState::new(12, 1, 3).unwrap();
        let hours: Vec<u32> = clock.neighbors().iter().map(|c| c.current()).collect();
        assert_eq!(hours, vec![2, 12]);
    }

    #[test]
    fn test_goal_and_target() {
        let clock = ClockState::new(5, 2, 4).unwrap();
        assert!(!clock.is_goal());
        assert!(clock.target().is_goal());
        assert_eq!(clock.target().current(), 4);
    }

    #[test]
    fn test_rejects_bad_hours() {
        assert_eq!(ClockState::new(0, 1, 1), Err(SetupError::NoHours));
        assert_eq!(
            ClockState::new(12, 13, 1),
            Err(SetupError::HourOutOfRange { hour: 13, hours: 12 })
        );
        assert_eq!(
            ClockState::new(12, 1, 0),
            Err(SetupError::HourOutOfRange { hour: 0, hours: 12 })
        );
    }
}
