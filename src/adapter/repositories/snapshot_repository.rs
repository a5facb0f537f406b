//! Snapshot Repository Trait
//!
//! In-Memory ストアのコミット済み状態の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::in_memory::StoreState;

/// スナップショットリポジトリ
///
/// トランザクションマネージャがコミットのたびに状態全体を保存し、
/// 起動時に最後にコミットされた状態を復元する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// 保存済みの状態を読み込む
    ///
    /// # Returns
    ///
    /// 保存済みの状態。まだ保存されていない場合は `None`
    ///
    /// # Errors
    ///
    /// 読み込みまたはパースに失敗した場合にエラーを返す
    async fn load(&self) -> Result<Option<StoreState>>;

    /// 状態を保存する
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合にエラーを返す
    async fn save(&self, state: &StoreState) -> Result<()>;
}
