//! Tunables for move tracking and scoring.
//!
//! `arcade()` presets carry the contest's shipped constants. Both configs
//! deserialize with per-field defaults so partial files only override what
//! they name.

use crate::scoring::{BASE_DUNK_SCORE, POINTS_PER_TRICK};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be non-negative and finite, got {value}")]
    NegativeOrNaN { field: &'static str, value: f64 },
    #[error("style max must be positive, got {0}")]
    StyleMax(f32),
    #[error("`{field}` window is inverted: [{lo}, {hi}]")]
    InvertedWindow { field: &'static str, lo: f64, hi: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum gap between two records of the same kind.
    pub cooldown_ms: f64,
    /// Consecutive repeats allowed after the first success of a kind.
    pub max_consecutive_repeats: u32,
    pub style_gain: f32,
    pub style_max: f32,
    pub style_decay_per_sec: f32,
}

impl TrackerConfig {
    pub fn arcade() -> Self {
        Self {
            cooldown_ms: 200.0,
            max_consecutive_repeats: 2,
            style_gain: 8.0,
            style_max: 100.0,
            style_decay_per_sec: 15.0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("cooldown_ms", self.cooldown_ms)?;
        non_negative("style_gain", self.style_gain as f64)?;
        non_negative("style_decay_per_sec", self.style_decay_per_sec as f64)?;
        if self.style_max <= 0.0 || !self.style_max.is_finite() {
            return Err(ConfigError::StyleMax(self.style_max));
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::arcade()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_dunk_score: i32,
    pub points_per_trick: i32,
    pub points_per_unique_trick: i32,
    /// Inclusive window for the dunk timestamp.
    pub dunk_window_ms: (f64, f64),
    pub dunk_window_bonus: i32,
    /// Exclusive window for mid-jump tricks.
    pub mid_jump_window_ms: (f64, f64),
    pub mid_jump_bonus: i32,
    pub combo_threshold: usize,
    pub combo_bonus: i32,
    pub spin_bonus: i32,
    pub alternation_bonus: i32,
    pub repeat_penalty: i32,
}

impl ScoringConfig {
    pub fn arcade() -> Self {
        Self {
            base_dunk_score: BASE_DUNK_SCORE,
            points_per_trick: POINTS_PER_TRICK,
            points_per_unique_trick: 20,
            dunk_window_ms: (200.0, 800.0),
            dunk_window_bonus: 25,
            mid_jump_window_ms: (100.0, 600.0),
            mid_jump_bonus: 5,
            combo_threshold: 3,
            combo_bonus: 30,
            spin_bonus: 25,
            alternation_bonus: 20,
            repeat_penalty: 10,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        window("dunk_window_ms", self.dunk_window_ms)?;
        window("mid_jump_window_ms", self.mid_jump_window_ms)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::arcade()
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeOrNaN { field, value })
    }
}

fn window(field: &'static str, (lo, hi): (f64, f64)) -> Result<(), ConfigError> {
    non_negative(field, lo)?;
    non_negative(field, hi)?;
    if lo > hi {
        return Err(ConfigError::InvertedWindow { field, lo, hi });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcade_presets_validate() {
        assert!(TrackerConfig::arcade().validate().is_ok());
        assert!(ScoringConfig::arcade().validate().is_ok());
    }

    #[test]
    fn test_default_is_arcade() {
        assert_eq!(TrackerConfig::default(), TrackerConfig::arcade());
        assert_eq!(ScoringConfig::default(), ScoringConfig::arcade());
    }

    #[test]
    fn test_negative_cooldown_rejected() {
        let config = TrackerConfig {
            cooldown_ms: -1.0,
            ..TrackerConfig::arcade()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeOrNaN { field: "cooldown_ms", .. })
        ));
    }

    #[test]
    fn test_zero_style_max_rejected() {
        let config = TrackerConfig {
            style_max: 0.0,
            ..TrackerConfig::arcade()
        };
        assert_eq!(config.validate(), Err(ConfigError::StyleMax(0.0)));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let config = ScoringConfig {
            dunk_window_ms: (900.0, 100.0),
            ..ScoringConfig::arcade()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedWindow { .. })
        ));
    }

    #[test]
    fn test_partial_json_overrides_single_field() {
        let config: TrackerConfig = serde_json::from_str(r#"{"cooldown_ms": 350.0}"#).unwrap();
        assert_eq!(config.cooldown_ms, 350.0);
        assert_eq!(config.max_consecutive_repeats, 2);
    }
}
