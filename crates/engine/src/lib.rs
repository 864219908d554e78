//! dunk-engine - move tracking and scoring for the dunk contest.
//!
//! A [`MoveTracker`] validates timed move inputs inside one attempt, a
//! [`ScoringEngine`] turns the finished attempt into a score breakdown, and
//! [`ContestSession`] drives both from already-decided game events.

pub mod config;
pub mod scoring;
pub mod session;
pub mod style;
pub mod tracker;

pub use config::{ConfigError, ScoringConfig, TrackerConfig};
pub use scoring::{calculate_score, ScoringEngine, BASE_DUNK_SCORE, POINTS_PER_TRICK};
pub use session::ContestSession;
pub use style::StyleMeter;
pub use tracker::{MoveRejection, MoveTracker};
