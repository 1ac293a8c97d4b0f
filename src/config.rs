//! Agent connection settings
//!
//! Built once from the command line and handed to the fetch side; nothing
//! in the crate reads configuration from globals.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Agent queried when no URL is given
pub const DEFAULT_AGENT_URL: &str = "http://localhost:5051";

/// Request timeout used when none is given, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Path of the task statistics endpoint relative to the agent URL
pub const STATISTICS_PATH: &str = "/monitor/statistics.json";

/// Where and how to reach the Mesos agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    base_url: Url,
    timeout: Duration,
}

impl AgentConfig {
    /// Validate the agent URL and timeout
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported agent URL scheme '{}', expected http or https",
                base_url.scheme()
            )));
        }
        if timeout_secs == 0 {
            return Err(Error::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the statistics endpoint, keeping any path prefix of the base URL
    pub fn statistics_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url().as_str().trim_end_matches('/'),
            STATISTICS_PATH
        )
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_AGENT_URL).expect("default agent URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
