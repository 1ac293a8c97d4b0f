//! HTTP client for the Mesos agent monitor endpoint

use super::StatisticsSource;
use crate::config::AgentConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Fetches statistics from a live agent with a single GET
pub struct AgentClient {
    client: Client,
    url: String,
}

impl AgentClient {
    /// Create a client bounded by the configured timeout
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.statistics_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatisticsSource for AgentClient {
    async fn fetch(&self) -> Result<String> {
        debug!("Requesting {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus(status));
        }

        let body = response.text().await?;
        debug!("Received {} bytes from agent", body.len());
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
