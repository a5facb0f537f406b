//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_page_limit() -> usize {
    30
}

fn default_max_page_limit() -> usize {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    // Durable store (None = in-memory only)
    #[serde(default)]
    pub snapshot_path: Option<String>,

    // Pagination
    #[serde(default = "default_page_limit")]
    pub default_page_limit: usize,
    #[serde(default = "default_max_page_limit")]
    pub max_page_limit: usize,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        if config.default_page_limit == 0 || config.max_page_limit == 0 {
            anyhow::bail!("Page limits must be positive");
        }
        Ok(config)
    }

    /// 要求されたlimitに既定値と上限を適用する
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_limit)
            .min(self.max_page_limit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            default_page_limit: default_page_limit(),
            max_page_limit: default_max_page_limit(),
        }
    }
}
