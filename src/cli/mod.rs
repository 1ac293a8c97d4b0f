//! CLI entry points
//!
//! Argument parsing, log level selection and the single collection run
//! performed per invocation.

pub mod args;

pub use args::Cli;

use crate::agent::{AgentClient, FileSource, StatisticsSource};
use crate::pipeline;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Map the `-v` count to a tracing filter
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,reqwest=debug", // -vvv shows everything including dependencies
    }
}

/// Pick the statistics source the arguments ask for
pub fn build_source(cli: &Cli) -> Result<Box<dyn StatisticsSource>> {
    if let Some(path) = &cli.input {
        return Ok(Box::new(FileSource::new(path)));
    }

    let config = cli.agent_config()?;
    Ok(Box::new(AgentClient::new(&config)?))
}

/// Fetch one snapshot and render it as line protocol
pub async fn collect(source: &dyn StatisticsSource) -> Result<String> {
    let origin = source.describe();
    debug!("Collecting task statistics from {}", origin);

    let raw = source
        .fetch()
        .await
        .with_context(|| format!("Failed to fetch task statistics from {origin}"))?;
    let output = pipeline::render(&raw)
        .with_context(|| format!("Failed to parse task statistics from {origin}"))?;

    info!("Rendered {} task lines", output.lines().count());
    Ok(output)
}

/// Run one collection and write the lines to stdout
pub async fn execute(cli: Cli) -> Result<()> {
    let source = build_source(&cli)?;
    let output = collect(source.as_ref()).await?;

    if output.is_empty() {
        debug!("No tasks matched, nothing to write");
    } else {
        println!("{output}");
    }
    Ok(())
}
