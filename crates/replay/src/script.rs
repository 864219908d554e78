use dunk_core::MoveKind;
use dunk_engine::{ConfigError, ScoringConfig, TrackerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read replay script: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse replay script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config in replay script: {0}")]
    Config(#[from] ConfigError),
}

/// One already-decided game event, timestamped by the caller's clock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    Begin { at_ms: f64 },
    Jump { at_ms: f64 },
    Trick {
        at_ms: f64,
        kind: MoveKind,
        #[serde(default = "airborne_default")]
        airborne: bool,
    },
    DunkZone { at_ms: f64 },
    Land { at_ms: f64 },
    Tick { dt_ms: f64 },
    Acknowledge,
}

fn airborne_default() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    pub fn validate(&self) -> Result<(), ReplayError> {
        self.tracker.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}

pub fn parse_script(json: &str) -> Result<ReplayScript, ReplayError> {
    let script: ReplayScript = serde_json::from_str(json)?;
    script.validate()?;
    Ok(script)
}

pub fn load_script(path: impl AsRef<Path>) -> Result<ReplayScript, ReplayError> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_script_uses_arcade_configs() {
        let script = parse_script(r#"{"events":[{"event":"begin","at_ms":0}]}"#).unwrap();
        assert_eq!(script.tracker, TrackerConfig::arcade());
        assert_eq!(script.scoring, ScoringConfig::arcade());
        assert_eq!(script.events, vec![ReplayEvent::Begin { at_ms: 0.0 }]);
    }

    #[test]
    fn test_trick_airborne_defaults_true() {
        let script = parse_script(
            r#"{"events":[{"event":"trick","at_ms":120,"kind":"BetweenLegs"}]}"#,
        )
        .unwrap();
        assert_eq!(
            script.events[0],
            ReplayEvent::Trick {
                at_ms: 120.0,
                kind: MoveKind::BetweenLegs,
                airborne: true
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = parse_script(r#"{"tracker":{"cooldown_ms":-5},"events":[]}"#).unwrap_err();
        assert!(matches!(err, ReplayError::Config(_)));
    }

    #[test]
    fn test_unknown_event_rejected() {
        let err = parse_script(r#"{"events":[{"event":"teleport"}]}"#).unwrap_err();
        assert!(matches!(err, ReplayError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_script("/nonexistent/replay.json").unwrap_err();
        assert!(matches!(err, ReplayError::Io(_)));
    }
}
