//! JSON Snapshot Repository Implementation
//!
//! SnapshotRepositoryのJSON実装（ストア状態をJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::in_memory::StoreState;
use super::snapshot_repository::SnapshotRepository;

/// JSONファイルベースのスナップショットリポジトリ
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `path` - スナップショットファイルのパス
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルから状態を読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<Option<StoreState>> {
        if !path.exists() {
            info!("No existing snapshot found at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path).context("Failed to read store snapshot file")?;

        let state: StoreState =
            serde_json::from_str(&content).context("Failed to parse store snapshot JSON")?;

        info!(
            "Loaded store snapshot: {} entities",
            state.total_entities()
        );

        Ok(Some(state))
    }

    /// ファイルに状態を保存する（同期処理）
    ///
    /// 一時ファイルに書いてからリネームするので、途中で失敗しても
    /// 以前のスナップショットは壊れない
    fn save_sync(path: &Path, json: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create snapshot directory")?;
            }
        }

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json).context("Failed to write store snapshot file")?;
        fs::rename(&tmp_path, path).context("Failed to replace store snapshot file")?;

        Ok(())
    }
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotRepository {
    async fn load(&self) -> Result<Option<StoreState>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn save(&self, state: &StoreState) -> Result<()> {
        let json =
            serde_json::to_string_pretty(state).context("Failed to serialize store snapshot")?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &json))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        info!("Saved store snapshot: {} entities", state.total_entities());

        Ok(())
    }
}
