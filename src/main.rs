use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use crate::{
    indexer::Indexer,
    kernel::{chain::OfflineChainReader, events::EventRecord, store::InMemoryStore},
};

mod config;
mod currency;
mod indexer;
mod kernel;
mod listing;
mod space;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize a Tracing Subscriber
    let fmt_builder = tracing_subscriber::fmt()
        .with_file(false)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal());

    // Use the compact formatter if we're in a terminal, otherwise use the JSON formatter.
    if std::io::stderr().is_terminal() {
        tracing::subscriber::set_global_default(fmt_builder.compact().finish())?;
    } else {
        tracing::subscriber::set_global_default(fmt_builder.json().finish())?;
    }

    // Parse the command line arguments, will exit automatically on `--help` or
    // with invalid arguments.
    match config::Options::parse() {
        config::Options::Run(opts) => run_replay(opts).await,
    }
}

async fn run_replay(opts: config::RunOptions) -> Result<()> {
    let raw = std::fs::read_to_string(&opts.events)
        .with_context(|| format!("failed to read event stream {}", opts.events))?;
    let records = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str::<EventRecord>(line)
                .with_context(|| format!("malformed event record on line {}", number + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(events = records.len(), path = opts.events, "Replaying event stream");

    let store = std::sync::Arc::new(InMemoryStore::default());
    let indexer = Indexer::new(store.clone(), std::sync::Arc::new(OfflineChainReader));

    let stats = indexer.run(records).await;
    tracing::info!(applied = stats.applied, failed = stats.failed, "Replay finished");

    if opts.dump {
        let snapshot = store.snapshot().await;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
