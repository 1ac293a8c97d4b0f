//! Sources of the raw task statistics document
//!
//! The pipeline only needs the JSON text; where it comes from is abstracted
//! behind [`StatisticsSource`] so the live agent and a saved file are
//! interchangeable.

mod client;
mod file;

pub use client::AgentClient;
pub use file::FileSource;

use crate::error::Result;
use async_trait::async_trait;

/// Provider of a `/monitor/statistics.json` document
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    /// Return the raw JSON text of one statistics snapshot
    async fn fetch(&self) -> Result<String>;

    /// Human readable origin, used in log messages
    fn describe(&self) -> String;
}
