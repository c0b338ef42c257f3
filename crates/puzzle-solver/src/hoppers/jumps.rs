//! The fixed table of Hoppers jumps.
//!
//! A frog always captures: it leaps over the cell halfway to its landing
//! spot, which must hold a green frog. Diagonal jumps travel two cells and
//! straight jumps travel four: on a Hoppers board orthogonally adjacent lily
//! pads sit two cells apart.

use super::board::Coordinates;

/// Direction family of a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpClass {
    Diagonal,
    Horizontal,
    Vertical,
}

/// A jump relative to the moving frog: where it lands and what it jumps over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JumpRule {
    pub land: (i32, i32),
    pub over: (i32, i32),
    pub class: JumpClass,
}

impl JumpRule {
    const fn new(land: (i32, i32), over: (i32, i32), class: JumpClass) -> Self {
        Self { land, over, class }
    }

    /// Anchor this rule at `origin`
    pub fn at(&self, origin: Coordinates) -> Jump {
        Jump {
            from: origin,
            over: origin.offset(self.over),
            to: origin.offset(self.land),
        }
    }
}

/// Every jump a frog may attempt. No other moves exist.
pub const JUMP_RULES: [JumpRule; 8] = [
    JumpRule::new((2, 2), (1, 1), JumpClass::Diagonal),
    JumpRule::new((-2, -2), (-1, -1), JumpClass::Diagonal),
    JumpRule::new((-2, 2), (-1, 1), JumpClass::Diagonal),
    JumpRule::new((2, -2), (1, -1), JumpClass::Diagonal),
    JumpRule::new((0, 4), (0, 2), JumpClass::Horizontal),
    JumpRule::new((0, -4), (0, -2), JumpClass::Horizontal),
    JumpRule::new((-4, 0), (-2, 0), JumpClass::Vertical),
    JumpRule::new((4, 0), (2, 0), JumpClass::Vertical),
];

/// A concrete jump on a board. Coordinates may lie off the board until the
/// jump is checked against one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    pub from: Coordinates,
    pub over: Coordinates,
    pub to: Coordinates,
}

/// All candidate jumps for a frog standing at `origin`
pub fn candidates(origin: Coordinates) -> impl Iterator<Item = Jump> {
    JUMP_RULES.iter().map(move |rule| rule.at(origin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_halfway() {
        for rule in &JUMP_RULES {
            assert_eq!(rule.land.0, rule.over.0 * 2);
            assert_eq!(rule.land.1, rule.over.1 * 2);
            match rule.class {
                JumpClass::Diagonal => assert!(rule.land.0.abs() == 2 && rule.land.1.abs() == 2),
                JumpClass::Horizontal => assert!(rule.land.0 == 0 && rule.land.1.abs() == 4),
                JumpClass::Vertical => assert!(rule.land.0.abs() == 4 && rule.land.1 == 0),
            }
        }
    }

    #[test]
    fn test_rules_are_distinct() {
        let lands: std::collections::HashSet<_> = JUMP_RULES.iter().map(|r| r.land).collect();
        assert_eq!(lands.len(), JUMP_RULES.len());
    }

    #[test]
    fn test_anchor() {
        let jump = JUMP_RULES[7].at(Coordinates::new(1, 3));
        assert_eq!(jump.from, Coordinates::new(1, 3));
        assert_eq!(jump.over, Coordinates::new(3, 3));
        assert_eq!(jump.to, Coordinates::new(5, 3));
        assert_eq!(candidates(Coordinates::new(0, 0)).count(), 8);
    }
}
