//! Move kinds and recorded move events.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum MoveKind {
    /// No current move. Never recorded.
    #[default]
    None,
    HandUp,
    HandDown,
    BetweenLegs,
    Spin,
    /// Terminal move of every attempt.
    Dunk,
}

impl MoveKind {
    pub const COUNT: usize = 6;

    pub const ALL: [MoveKind; Self::COUNT] = [
        MoveKind::None,
        MoveKind::HandUp,
        MoveKind::HandDown,
        MoveKind::BetweenLegs,
        MoveKind::Spin,
        MoveKind::Dunk,
    ];

    /// Moves that count as tricks for scoring.
    pub const TRICKS: [MoveKind; 4] = [
        MoveKind::HandUp,
        MoveKind::HandDown,
        MoveKind::BetweenLegs,
        MoveKind::Spin,
    ];

    /// Dense index for enum-keyed tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::None => 0,
            Self::HandUp => 1,
            Self::HandDown => 2,
            Self::BetweenLegs => 3,
            Self::Spin => 4,
            Self::Dunk => 5,
        }
    }

    /// Short token used in combo strings.
    pub fn token(self) -> &'static str {
        match self {
            Self::HandUp => "Up",
            Self::HandDown => "Down",
            Self::BetweenLegs => "Legs",
            Self::Spin => "Spin",
            Self::Dunk => "Dunk",
            Self::None => "?",
        }
    }

    #[inline]
    pub fn is_trick(self) -> bool {
        !matches!(self, Self::None | Self::Dunk)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A recorded move. `timestamp_ms` is relative to the start of the jump window.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct MoveEvent {
    pub kind: MoveKind,
    pub timestamp_ms: f64,
}

impl MoveEvent {
    pub fn new(kind: MoveKind, timestamp_ms: f64) -> Self {
        Self { kind, timestamp_ms }
    }
}
