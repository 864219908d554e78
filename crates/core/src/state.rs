//! Contest phase and result rating.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ContestPhase {
    #[default]
    Ready,
    InAttempt,
    Results,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Rating {
    Ok,
    Good,
    Great,
    Excellent,
    Insane,
    Legendary,
}

impl Rating {
    pub fn from_score(total: i32) -> Self {
        match total {
            t if t >= 300 => Self::Legendary,
            t if t >= 250 => Self::Insane,
            t if t >= 200 => Self::Excellent,
            t if t >= 150 => Self::Great,
            t if t >= 100 => Self::Good,
            _ => Self::Ok,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Legendary => "LEGENDARY!",
            Self::Insane => "INSANE!",
            Self::Excellent => "EXCELLENT!",
            Self::Great => "GREAT!",
            Self::Good => "GOOD",
            Self::Ok => "OK",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_ready() {
        assert_eq!(ContestPhase::default(), ContestPhase::Ready);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::from_score(0), Rating::Ok);
        assert_eq!(Rating::from_score(99), Rating::Ok);
        assert_eq!(Rating::from_score(100), Rating::Good);
        assert_eq!(Rating::from_score(150), Rating::Great);
        assert_eq!(Rating::from_score(249), Rating::Excellent);
        assert_eq!(Rating::from_score(250), Rating::Insane);
        assert_eq!(Rating::from_score(420), Rating::Legendary);
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(Rating::Legendary.to_string(), "LEGENDARY!");
        assert_eq!(Rating::Ok.label(), "OK");
    }
}
