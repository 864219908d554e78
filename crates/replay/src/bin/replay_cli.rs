use dunk_replay::{load_script, score_batch, ReplayScript};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay_cli=info,dunk_replay=info,dunk_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: replay_cli <script.json>...");
        return ExitCode::from(2);
    }

    let mut scripts: Vec<ReplayScript> = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_script(path) {
            Ok(script) => scripts.push(script),
            Err(err) => {
                tracing::error!(%path, %err, "could not load replay");
                return ExitCode::FAILURE;
            }
        }
    }

    for (path, report) in paths.iter().zip(score_batch(&scripts)) {
        tracing::info!(%path, attempts = report.attempts.len(), best = ?report.best_score(), "replayed");
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(%path, %err, "could not encode report");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
