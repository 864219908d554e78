//! Contest loop driver: Ready -> InAttempt -> Results -> Ready.
//!
//! Physics, zone detection and input polling live outside; the session is
//! told what already happened ("jumped", "airborne", "entered dunk zone",
//! "landed") and turns it into tracker calls and a scored result.

use crate::config::{ScoringConfig, TrackerConfig};
use crate::scoring::ScoringEngine;
use crate::tracker::MoveTracker;
use dunk_core::{AttemptResult, ContestPhase, MoveKind, Rating};
use tracing::{debug, info};

pub struct ContestSession {
    phase: ContestPhase,
    tracker: MoveTracker,
    scoring: ScoringEngine,
    jumped: bool,
    last_result: Option<AttemptResult>,
}

impl ContestSession {
    pub fn new(tracker: TrackerConfig, scoring: ScoringConfig) -> Self {
        Self {
            phase: ContestPhase::Ready,
            tracker: MoveTracker::new(tracker),
            scoring: ScoringEngine::new(scoring),
            jumped: false,
            last_result: None,
        }
    }

    pub fn phase(&self) -> ContestPhase {
        self.phase
    }

    pub fn tracker(&self) -> &MoveTracker {
        &self.tracker
    }

    pub fn has_jumped(&self) -> bool {
        self.jumped
    }

    pub fn last_result(&self) -> Option<&AttemptResult> {
        self.last_result.as_ref()
    }

    pub fn last_rating(&self) -> Option<Rating> {
        self.last_result
            .filter(|r| r.dunk_successful)
            .map(|r| Rating::from_score(r.total_score))
    }

    pub fn begin(&mut self, now: f64) -> bool {
        if self.phase != ContestPhase::Ready {
            return false;
        }
        self.fresh_tracker();
        self.tracker.start_attempt(now);
        self.jumped = false;
        self.phase = ContestPhase::InAttempt;
        true
    }

    /// Takeoff. Only the first jump of an attempt counts.
    pub fn jump(&mut self, now: f64) -> bool {
        if self.phase != ContestPhase::InAttempt || self.jumped {
            return false;
        }
        self.jumped = true;
        self.tracker.reset_attempt(now);
        true
    }

    /// A trick input. Ignored on the ground, before takeoff, or for `Dunk`.
    pub fn perform(&mut self, kind: MoveKind, now: f64, airborne: bool) -> bool {
        if self.phase != ContestPhase::InAttempt || !self.jumped || !airborne {
            return false;
        }
        if !kind.is_trick() {
            debug!(%kind, "not a trick input");
            return false;
        }
        self.tracker.record_move(kind, now)
    }

    /// The airborne player reached the dunk zone: record the dunk and score.
    pub fn enter_dunk_zone(&mut self, now: f64) -> Option<AttemptResult> {
        if self.phase != ContestPhase::InAttempt || !self.jumped {
            return None;
        }
        if !self.tracker.record_move(MoveKind::Dunk, now) {
            debug!(now, "dunk not recorded, scoring attempt as successful");
        }
        Some(self.finish(true))
    }

    /// Touched down without dunking.
    pub fn land(&mut self, _now: f64) -> Option<AttemptResult> {
        if self.phase != ContestPhase::InAttempt || !self.jumped {
            return None;
        }
        Some(self.finish(false))
    }

    /// Leave the results screen.
    pub fn acknowledge(&mut self) -> bool {
        if self.phase != ContestPhase::Results {
            return false;
        }
        self.fresh_tracker();
        self.jumped = false;
        self.phase = ContestPhase::Ready;
        true
    }

    pub fn tick(&mut self, dt_ms: f64) -> f32 {
        self.tracker.tick(dt_ms)
    }

    fn fresh_tracker(&mut self) {
        self.tracker = MoveTracker::new(self.tracker.config().clone());
    }

    fn finish(&mut self, dunk_successful: bool) -> AttemptResult {
        let data = self.tracker.snapshot(dunk_successful);
        let result = self.scoring.calculate_score(&data);
        info!(
            dunk_successful,
            combo = %self.tracker.combo_string(),
            total = result.total_score,
            "attempt finished"
        );
        self.phase = ContestPhase::Results;
        self.last_result = Some(result);
        result
    }
}

impl Default for ContestSession {
    fn default() -> Self {
        Self::new(TrackerConfig::arcade(), ScoringConfig::arcade())
    }
}
