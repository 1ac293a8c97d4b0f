//! Replay of a saved statistics document

use super::StatisticsSource;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Reads the statistics document from a file, or stdin for `-`
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

#[async_trait]
impl StatisticsSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        if self.is_stdin() {
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            return Ok(raw);
        }

        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}
