//! Dunk replay crate - scripted contest inputs, batch scoring and reports.

mod pipeline;
mod script;

pub use pipeline::{run_replay, score_batch, AttemptSummary, ReplayReport};
pub use script::{load_script, parse_script, ReplayError, ReplayEvent, ReplayScript};
