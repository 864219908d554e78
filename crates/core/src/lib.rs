//! Dunk core crate - move catalog and attempt records for the dunk contest.

mod attempt;
mod moves;
mod state;

pub use attempt::{AttemptData, AttemptResult};
pub use moves::{MoveEvent, MoveKind};
pub use state::{ContestPhase, Rating};
