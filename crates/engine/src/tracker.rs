//! Per-attempt move tracking: cooldowns, anti-spam and the style meter.

use crate::config::TrackerConfig;
use crate::style::{StyleMeter, FRAME_MS};
use dunk_core::{AttemptData, MoveEvent, MoveKind};
use thiserror::Error;
use tracing::{debug, trace};

/// Why a move was not recorded. Expected gameplay outcomes, not faults.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MoveRejection {
    #[error("no attempt in progress")]
    NotInAttempt,
    #[error("`None` is not a recordable move")]
    NoMove,
    #[error("{kind} still cooling down for {remaining_ms:.0}ms")]
    Cooldown { kind: MoveKind, remaining_ms: f64 },
    #[error("{kind} repeated {streak} times in a row")]
    Repeated { kind: MoveKind, streak: u32 },
}

pub struct MoveTracker {
    config: TrackerConfig,
    moves: Vec<MoveEvent>,
    last_seen: [Option<f64>; MoveKind::COUNT],
    last_kind: MoveKind,
    repeats: u32,
    current_trick: MoveKind,
    style: StyleMeter,
    in_attempt: bool,
    jump_start: f64,
}

impl MoveTracker {
    pub fn new(config: TrackerConfig) -> Self {
        let style = StyleMeter::new(
            config.style_gain,
            config.style_max,
            config.style_decay_per_sec,
        );
        Self {
            config,
            moves: Vec::new(),
            last_seen: [None; MoveKind::COUNT],
            last_kind: MoveKind::None,
            repeats: 0,
            current_trick: MoveKind::None,
            style,
            in_attempt: false,
            jump_start: 0.0,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Begin a new attempt, discarding anything recorded before.
    pub fn start_attempt(&mut self, now: f64) {
        debug!(now, "attempt started");
        self.in_attempt = true;
        self.moves.clear();
        self.clear_jump_bookkeeping();
        self.style.reset();
    }

    /// Mark a jump at `now`; later timestamps are relative to it.
    /// The move log and attempt flag are untouched.
    pub fn reset_attempt(&mut self, now: f64) {
        debug!(now, "jump window opened");
        self.jump_start = now;
        self.clear_jump_bookkeeping();
    }

    fn clear_jump_bookkeeping(&mut self) {
        self.last_seen = [None; MoveKind::COUNT];
        self.last_kind = MoveKind::None;
        self.repeats = 0;
        self.current_trick = MoveKind::None;
    }

    pub fn record_move(&mut self, kind: MoveKind, now: f64) -> bool {
        match self.try_record(kind, now) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, now, "move rejected");
                false
            }
        }
    }

    /// Record `kind` at `now`, or say why not. State is untouched on error.
    pub fn try_record(&mut self, kind: MoveKind, now: f64) -> Result<(), MoveRejection> {
        if !self.in_attempt {
            return Err(MoveRejection::NotInAttempt);
        }
        if kind == MoveKind::None {
            return Err(MoveRejection::NoMove);
        }

        if let Some(last) = self.last_seen[kind.index()] {
            let elapsed = now - last;
            if elapsed < self.config.cooldown_ms {
                return Err(MoveRejection::Cooldown {
                    kind,
                    remaining_ms: self.config.cooldown_ms - elapsed,
                });
            }
        }

        // cooldowns are per kind and survive other kinds in between;
        // the repeat streak does not
        let repeats = if kind == self.last_kind {
            self.repeats + 1
        } else {
            0
        };
        if repeats > self.config.max_consecutive_repeats {
            return Err(MoveRejection::Repeated {
                kind,
                streak: repeats + 1,
            });
        }

        self.repeats = repeats;
        self.last_kind = kind;
        self.last_seen[kind.index()] = Some(now);
        self.current_trick = kind;
        let timestamp_ms = now - self.jump_start;
        self.moves.push(MoveEvent::new(kind, timestamp_ms));
        let style = self.style.bump();
        trace!(%kind, timestamp_ms, style, "move recorded");

        if kind == MoveKind::Dunk {
            debug!(timestamp_ms, moves = self.moves.len(), "attempt ended by dunk");
            self.in_attempt = false;
        }
        Ok(())
    }

    pub fn is_in_attempt(&self) -> bool {
        self.in_attempt
    }

    pub fn current_trick(&self) -> MoveKind {
        self.current_trick
    }

    /// Owned copy of the move log.
    pub fn recorded_moves(&self) -> Vec<MoveEvent> {
        self.moves.clone()
    }

    pub fn moves(&self) -> &[MoveEvent] {
        &self.moves
    }

    pub fn trick_count(&self) -> usize {
        self.moves.iter().filter(|m| m.kind != MoveKind::Dunk).count()
    }

    pub fn combo_string(&self) -> String {
        if self.moves.is_empty() {
            return "None".to_string();
        }
        self.moves
            .iter()
            .map(|m| m.kind.token())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn style_meter(&self) -> f32 {
        self.style.get()
    }

    /// Drain the style meter by `dt_ms` of elapsed time.
    pub fn tick(&mut self, dt_ms: f64) -> f32 {
        self.style.advance(dt_ms)
    }

    /// Per-frame read that drains one 60 Hz frame first.
    /// Only meaningful when called exactly once per frame.
    pub fn sample_style_meter(&mut self) -> f32 {
        self.style.advance(FRAME_MS)
    }

    pub fn dunk_timing(&self) -> f64 {
        self.moves
            .iter()
            .find(|m| m.kind == MoveKind::Dunk)
            .map_or(0.0, |m| m.timestamp_ms)
    }

    pub fn total_air_time(&self) -> f64 {
        self.moves.last().map_or(0.0, |m| m.timestamp_ms)
    }

    /// Scoring input for the attempt as it stands.
    pub fn snapshot(&self, dunk_successful: bool) -> AttemptData {
        AttemptData {
            moves: self.recorded_moves(),
            dunk_successful,
            has_spin: self.moves.iter().any(|m| m.kind == MoveKind::Spin),
            dunk_timing_ms: if dunk_successful {
                self.dunk_timing()
            } else {
                0.0
            },
            move_sequence_count: self.moves.len(),
            total_air_time_ms: self.total_air_time(),
        }
    }
}

impl Default for MoveTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::arcade())
    }
}
