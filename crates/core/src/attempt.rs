//! Records passed from the tracker to scoring and from scoring to display.

use crate::{MoveEvent, MoveKind};
use serde::{Deserialize, Serialize};

/// Snapshot of a finished attempt, consumed by scoring.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct AttemptData {
    /// Recorded moves in chronological order.
    pub moves: Vec<MoveEvent>,
    pub dunk_successful: bool,
    pub has_spin: bool,
    /// Dunk timestamp relative to jump start, 0 when there was no dunk.
    pub dunk_timing_ms: f64,
    #[serde(default)]
    pub move_sequence_count: usize,
    #[serde(default)]
    pub total_air_time_ms: f64,
}

impl AttemptData {
    /// Builds an attempt from a move list, deriving spin and dunk timing.
    pub fn from_moves(moves: Vec<MoveEvent>, dunk_successful: bool) -> Self {
        let has_spin = moves.iter().any(|m| m.kind == MoveKind::Spin);
        let dunk_timing_ms = if dunk_successful {
            moves
                .iter()
                .find(|m| m.kind == MoveKind::Dunk)
                .map_or(0.0, |m| m.timestamp_ms)
        } else {
            0.0
        };
        let total_air_time_ms = moves.last().map_or(0.0, |m| m.timestamp_ms);
        Self {
            move_sequence_count: moves.len(),
            moves,
            dunk_successful,
            has_spin,
            dunk_timing_ms,
            total_air_time_ms,
        }
    }

    /// Recorded moves that are not the dunk itself.
    pub fn tricks(&self) -> impl Iterator<Item = &MoveEvent> + '_ {
        self.moves.iter().filter(|m| m.kind != MoveKind::Dunk)
    }
}

/// Score breakdown for one attempt.
///
/// `total_score` is produced by the scoring algorithm, not recomputed here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct AttemptResult {
    pub dunk_successful: bool,
    pub base_score: i32,
    pub trick_bonus: i32,
    pub variety_bonus: i32,
    pub timing_bonus: i32,
    pub creativity_bonus: i32,
    pub penalties: i32,
    pub total_score: i32,
}

impl AttemptResult {
    pub fn failed() -> Self {
        Self::default()
    }
}
