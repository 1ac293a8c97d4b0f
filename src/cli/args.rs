//! CLI argument structures

use crate::config::{AgentConfig, DEFAULT_AGENT_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Report Mesos task resource usage in line protocol
#[derive(Parser, Debug)]
#[command(name = "mesos-tasks")]
#[command(
    about = "mesos-tasks - Average Mesos agent task statistics per task for telegraf",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Mesos agent URL, e.g. 'http://localhost:5051'
    #[arg(env = "MESOS_AGENT_URL", default_value = DEFAULT_AGENT_URL)]
    pub url: String,

    /// Timeout for HTTP requests in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Read a saved statistics document instead of querying the agent ('-' for stdin)
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the agent settings from the parsed arguments
    pub fn agent_config(&self) -> Result<AgentConfig> {
        AgentConfig::new(&self.url, self.timeout)
    }
}
