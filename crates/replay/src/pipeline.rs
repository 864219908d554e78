use crate::script::{ReplayEvent, ReplayScript};
use dunk_core::{AttemptResult, ContestPhase, MoveEvent, Rating};
use dunk_engine::ContestSession;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttemptSummary {
    pub result: AttemptResult,
    pub rating: Option<Rating>,
    pub combo: String,
    pub moves: Vec<MoveEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplayReport {
    pub attempts: Vec<AttemptSummary>,
    pub final_phase: ContestPhase,
    pub style_meter: f32,
    /// Indices of events the session ignored.
    pub rejected: Vec<usize>,
}

impl ReplayReport {
    pub fn best_score(&self) -> Option<i32> {
        self.attempts.iter().map(|a| a.result.total_score).max()
    }
}

pub fn run_replay(script: &ReplayScript) -> ReplayReport {
    let mut session = ContestSession::new(script.tracker.clone(), script.scoring.clone());
    let mut attempts = Vec::new();
    let mut rejected = Vec::new();

    for (index, event) in script.events.iter().enumerate() {
        let accepted = match *event {
            ReplayEvent::Begin { at_ms } => session.begin(at_ms),
            ReplayEvent::Jump { at_ms } => session.jump(at_ms),
            ReplayEvent::Trick {
                at_ms,
                kind,
                airborne,
            } => session.perform(kind, at_ms, airborne),
            ReplayEvent::DunkZone { at_ms } => {
                let result = session.enter_dunk_zone(at_ms);
                summarize(&session, result, &mut attempts)
            }
            ReplayEvent::Land { at_ms } => {
                let result = session.land(at_ms);
                summarize(&session, result, &mut attempts)
            }
            ReplayEvent::Tick { dt_ms } => {
                session.tick(dt_ms);
                true
            }
            ReplayEvent::Acknowledge => session.acknowledge(),
        };
        if !accepted {
            debug!(index, ?event, "replay event ignored");
            rejected.push(index);
        }
    }

    ReplayReport {
        attempts,
        final_phase: session.phase(),
        style_meter: session.tracker().style_meter(),
        rejected,
    }
}

fn summarize(
    session: &ContestSession,
    result: Option<AttemptResult>,
    attempts: &mut Vec<AttemptSummary>,
) -> bool {
    let Some(result) = result else {
        return false;
    };
    let tracker = session.tracker();
    attempts.push(AttemptSummary {
        result,
        rating: session.last_rating(),
        combo: tracker.combo_string(),
        moves: tracker.recorded_moves(),
    });
    true
}

/// Run independent scripts in parallel; reports keep input order.
pub fn score_batch(scripts: &[ReplayScript]) -> Vec<ReplayReport> {
    scripts.par_iter().map(run_replay).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dunk_core::MoveKind;

    fn events(events: Vec<ReplayEvent>) -> ReplayScript {
        ReplayScript {
            events,
            ..ReplayScript::default()
        }
    }

    #[test]
    fn test_empty_replay() {
        let report = run_replay(&ReplayScript::default());
        assert!(report.attempts.is_empty());
        assert!(report.rejected.is_empty());
        assert_eq!(report.final_phase, ContestPhase::Ready);
        assert_eq!(report.best_score(), None);
    }

    #[test]
    fn test_dunk_replay_summary() {
        let report = run_replay(&events(vec![
            ReplayEvent::Begin { at_ms: 0.0 },
            ReplayEvent::Jump { at_ms: 500.0 },
            ReplayEvent::Trick {
                at_ms: 700.0,
                kind: MoveKind::Spin,
                airborne: true,
            },
            ReplayEvent::Trick {
                at_ms: 750.0,
                kind: MoveKind::Spin,
                airborne: true,
            },
            ReplayEvent::DunkZone { at_ms: 1000.0 },
        ]));
        assert_eq!(report.rejected, vec![3]);
        assert_eq!(report.attempts.len(), 1);
        let attempt = &report.attempts[0];
        assert_eq!(attempt.combo, "Spin, Dunk");
        // 100 + 15 + 20 + (25 + 5) + 25
        assert_eq!(attempt.result.total_score, 190);
        assert_eq!(attempt.rating, Some(Rating::Great));
        assert_eq!(report.final_phase, ContestPhase::Results);
        assert_eq!(report.style_meter, 16.0);
    }

    #[test]
    fn test_landing_records_failed_attempt() {
        let report = run_replay(&events(vec![
            ReplayEvent::Begin { at_ms: 0.0 },
            ReplayEvent::Land { at_ms: 10.0 },
            ReplayEvent::Jump { at_ms: 20.0 },
            ReplayEvent::Land { at_ms: 700.0 },
            ReplayEvent::Acknowledge,
        ]));
        assert_eq!(report.rejected, vec![1]);
        assert_eq!(report.attempts.len(), 1);
        assert!(!report.attempts[0].result.dunk_successful);
        assert_eq!(report.attempts[0].rating, None);
        assert_eq!(report.final_phase, ContestPhase::Ready);
    }

    #[test]
    fn test_tick_drains_reported_style() {
        let report = run_replay(&events(vec![
            ReplayEvent::Begin { at_ms: 0.0 },
            ReplayEvent::Jump { at_ms: 0.0 },
            ReplayEvent::Trick {
                at_ms: 100.0,
                kind: MoveKind::HandUp,
                airborne: true,
            },
            ReplayEvent::Tick { dt_ms: 400.0 },
        ]));
        assert!((report.style_meter - 2.0).abs() < 0.0001);
        assert_eq!(report.final_phase, ContestPhase::InAttempt);
    }

    #[test]
    fn test_batch_preserves_order() {
        let dunk = events(vec![
            ReplayEvent::Begin { at_ms: 0.0 },
            ReplayEvent::Jump { at_ms: 0.0 },
            ReplayEvent::DunkZone { at_ms: 400.0 },
        ]);
        let miss = events(vec![
            ReplayEvent::Begin { at_ms: 0.0 },
            ReplayEvent::Jump { at_ms: 0.0 },
            ReplayEvent::Land { at_ms: 900.0 },
        ]);
        let reports = score_batch(&[dunk.clone(), miss, dunk]);
        let totals: Vec<_> = reports.iter().map(|r| r.best_score()).collect();
        assert_eq!(totals, vec![Some(125), Some(0), Some(125)]);
    }
}
