use std::fs;
use std::path::Path;

use anyhow::Context;
use carteira_core::store::AppState;
use serde::Serialize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output on stdout stays parseable.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Loads the saved state, or the default state when nothing has been saved yet.
pub fn load_state(path: &Path) -> anyhow::Result<AppState> {
    if !path.exists() {
        tracing::info!(
            "No state file at {}, starting from defaults",
            path.display()
        );
        return Ok(AppState::default());
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading state file {}", path.display()))?;
    let state = AppState::from_json(&json)
        .with_context(|| format!("parsing state file {}", path.display()))?;
    tracing::info!(
        "Loaded {} assets, {} goals and {} dividends from {}",
        state.assets.len(),
        state.investment_goals.len(),
        state.dividends.len(),
        path.display()
    );
    Ok(state)
}

pub fn save_state(path: &Path, state: &AppState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating state directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(state).context("serializing state")?;
    fs::write(path, json).with_context(|| format!("writing state file {}", path.display()))?;
    tracing::info!("Saved state to {}", path.display());
    Ok(())
}

pub fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}
