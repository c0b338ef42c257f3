//! The Hoppers puzzle: frogs jump over green frogs until only red ones are
//! left.

pub mod board;
pub mod jumps;
pub mod model;
mod parse;

pub use board::{Board, Cell, Coordinates};
pub use jumps::{Jump, JumpClass, JumpRule, JUMP_RULES};
pub use model::{HoppersModel, ModelEvent};
