mod commands;
mod config;
mod events;
mod main_lib;


use std::path::PathBuf;
use std::sync::Arc;

use carteira_core::store::AppStore;
use clap::Parser;
use commands::Commands;
use config::Config;
use events::SnapshotEventSink;
use main_lib::{init_tracing, load_state, render, save_state};

#[derive(Parser)]
#[command(name = "carteira")]
#[command(about = "Portfolio rebalancing and contribution planning", long_about = None)]
struct Cli {
    /// State file to read (overrides CARTEIRA_STATE_PATH)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);
    let cli = Cli::parse();

    let state_path = cli.state.unwrap_or(config.state_path);
    let sink = SnapshotEventSink::new();
    let store = AppStore::new(load_state(&state_path)?, Arc::new(sink.clone()));

    let output = commands::run(&cli.cmd, &store)?;

    let events = sink.take_pending();
    if !events.is_empty() {
        tracing::debug!("{} store events pending, saving state", events.len());
        save_state(&state_path, &*store.snapshot()?)?;
    }

    println!("{}", render(&output, config.pretty)?);
    Ok(())
}
