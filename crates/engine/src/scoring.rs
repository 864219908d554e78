use crate::config::ScoringConfig;
use dunk_core::{AttemptData, AttemptResult, MoveEvent};
use smallvec::SmallVec;

pub const BASE_DUNK_SCORE: i32 = 100;
pub const POINTS_PER_TRICK: i32 = 15;

type Tricks = SmallVec<[MoveEvent; 8]>;

/// Stateless score calculator over a fixed config.
#[derive(Clone, Debug, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn calculate_score(&self, attempt: &AttemptData) -> AttemptResult {
        calculate_score(attempt, &self.config)
    }
}

pub fn calculate_score(attempt: &AttemptData, config: &ScoringConfig) -> AttemptResult {
    if !attempt.dunk_successful {
        return AttemptResult::failed();
    }

    let tricks: Tricks = attempt.tricks().copied().collect();

    let base_score = config.base_dunk_score;
    let trick_bonus = tricks.len() as i32 * config.points_per_trick;
    let variety_bonus = unique_kinds(&tricks) as i32 * config.points_per_unique_trick;
    let timing_bonus = timing_bonus(attempt.dunk_timing_ms, &tricks, config);
    let creativity_bonus = creativity_bonus(&tricks, attempt.has_spin, config);
    let penalties = adjacent_repeats(&tricks) as i32 * config.repeat_penalty;

    AttemptResult {
        dunk_successful: true,
        base_score,
        trick_bonus,
        variety_bonus,
        timing_bonus,
        creativity_bonus,
        penalties,
        total_score: base_score + trick_bonus + variety_bonus + timing_bonus + creativity_bonus
            - penalties,
    }
}

fn unique_kinds(tricks: &[MoveEvent]) -> u32 {
    let mask = tricks
        .iter()
        .fold(0u8, |mask, m| mask | (1 << m.kind.index()));
    mask.count_ones()
}

fn timing_bonus(dunk_timing_ms: f64, tricks: &[MoveEvent], config: &ScoringConfig) -> i32 {
    let mut bonus = 0;

    let (lo, hi) = config.dunk_window_ms;
    if dunk_timing_ms >= lo && dunk_timing_ms <= hi {
        bonus += config.dunk_window_bonus;
    }

    let (lo, hi) = config.mid_jump_window_ms;
    let mid_jump = tricks
        .iter()
        .filter(|m| m.timestamp_ms > lo && m.timestamp_ms < hi)
        .count();
    bonus + mid_jump as i32 * config.mid_jump_bonus
}

fn creativity_bonus(tricks: &[MoveEvent], has_spin: bool, config: &ScoringConfig) -> i32 {
    let mut bonus = 0;
    if tricks.len() >= config.combo_threshold {
        bonus += config.combo_bonus;
    }
    if has_spin {
        bonus += config.spin_bonus;
    }
    if has_good_alternation(tricks) {
        bonus += config.alternation_bonus;
    }
    bonus
}

/// At least half of the consecutive pairs change kind (integer halving).
fn has_good_alternation(tricks: &[MoveEvent]) -> bool {
    if tricks.len() < 2 {
        return false;
    }
    let changes = tricks.len() - 1 - adjacent_repeats(tricks);
    changes >= tricks.len() / 2
}

fn adjacent_repeats(tricks: &[MoveEvent]) -> usize {
    tricks.windows(2).filter(|w| w[0].kind == w[1].kind).count()
}
