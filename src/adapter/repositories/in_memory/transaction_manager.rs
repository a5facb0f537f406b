//! In-Memory Transaction Manager
//!
//! TransactionManagerのIn-Memory実装
//!
//! 書き込みトランザクションは `RwLock` の書き込みロックを保持したまま、
//! ストア状態の作業コピーに対して作業を実行する。成功時は（設定されていれば）
//! スナップショットを保存してから作業コピーを差し替え、失敗時は破棄する。

use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapter::repositories::snapshot_repository::SnapshotRepository;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{Scope, TransactionManager};

use super::store::StoreState;

/// anyhowのエラーチェーンを1行の文字列にする
fn error_chain_to_string(e: &anyhow::Error) -> String {
    e.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// In-Memory トランザクションマネージャ
///
/// 明示的に構築して `Arc` で共有する。破棄するとストア状態も破棄される
/// （スナップショットが設定されていれば最後のコミットがファイルに残る）。
pub struct InMemoryTransactionManager {
    state: RwLock<StoreState>,
    snapshots: Option<Arc<dyn SnapshotRepository>>,
}

impl InMemoryTransactionManager {
    /// 空のストアで作成（永続化なし）
    pub fn new() -> Self {
        Self::from_state(StoreState::new())
    }

    /// 指定の状態から作成（永続化なし）
    pub fn from_state(state: StoreState) -> Self {
        Self {
            state: RwLock::new(state),
            snapshots: None,
        }
    }

    /// スナップショットから復元して作成
    ///
    /// 以後のコミットは全てスナップショットに保存される
    ///
    /// # Errors
    ///
    /// スナップショットの読み込みに失敗した場合、または復元した状態が
    /// 整合しない場合（識別子の重複、重なるレンタル）に `Storage` エラーを返す
    pub async fn with_snapshots(snapshots: Arc<dyn SnapshotRepository>) -> DomainResult<Self> {
        let mut state = snapshots
            .load()
            .await
            .map_err(|e| DomainError::Storage(error_chain_to_string(&e)))?
            .unwrap_or_default();
        state.reconcile()?;

        info!(
            "Opened store with {} entities",
            state.total_entities()
        );

        Ok(Self {
            state: RwLock::new(state),
            snapshots: Some(snapshots),
        })
    }

    /// コミット済み状態のコピーを返す
    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }
}

impl Default for InMemoryTransactionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionManager for InMemoryTransactionManager {
    async fn run<T, F>(&self, work: F) -> DomainResult<T>
    where
        T: Send,
        F: FnOnce(&mut dyn Scope) -> DomainResult<T> + Send,
    {
        let mut committed = self.state.write().await;
        let mut working = committed.clone();

        let value = match work(&mut working as &mut dyn Scope) {
            Ok(value) => value,
            Err(e) => {
                debug!("Transaction rolled back: {}", e);
                return Err(e);
            }
        };

        if let Some(snapshots) = &self.snapshots {
            if let Err(e) = snapshots.save(&working).await {
                let message = error_chain_to_string(&e);
                warn!("Transaction rolled back, snapshot save failed: {}", message);
                return Err(DomainError::Storage(message));
            }
        }

        *committed = working;
        debug!("Transaction committed");

        Ok(value)
    }

    async fn read<T, F>(&self, work: F) -> DomainResult<T>
    where
        T: Send,
        F: FnOnce(&dyn Scope) -> DomainResult<T> + Send,
    {
        let committed = self.state.read().await;
        work(&*committed as &dyn Scope)
    }
}
