//! # Transaction Manager Trait
//!
//! 複数のリポジトリにまたがる作業単位（Unit of Work）を抽象化
//!
//! ## 保証
//!
//! - `run` のクロージャ内の操作は単一の一貫したスナップショットを観測し、
//!   全て成功してコミットされるか、何も反映されないかのどちらか
//! - クロージャが `Err` を返した場合は変更を破棄し、同じエラーをそのまま返す
//! - 書き込みトランザクション同士は直列化される
//! - `read` は並行して実行できるが、コミット途中の状態は観測しない

use async_trait::async_trait;

use super::club_repository::ClubRepository;
use super::court_repository::CourtRepository;
use super::rental_repository::RentalRepository;
use super::user_repository::UserRepository;
use crate::domain::error::DomainResult;

/// トランザクションスコープ
///
/// 同じストア状態に束縛された全リポジトリへのアクセスを提供する
pub trait Scope: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn users_mut(&mut self) -> &mut dyn UserRepository;

    fn clubs(&self) -> &dyn ClubRepository;
    fn clubs_mut(&mut self) -> &mut dyn ClubRepository;

    fn courts(&self) -> &dyn CourtRepository;
    fn courts_mut(&mut self) -> &mut dyn CourtRepository;

    fn rentals(&self) -> &dyn RentalRepository;
    fn rentals_mut(&mut self) -> &mut dyn RentalRepository;
}

/// トランザクションマネージャ
///
/// クロージャは同期的に実行される。ロックは1トランザクションにつき
/// トップレベルの1つだけを保持するため、デッドロックは起こらない。
#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// 書き込みトランザクションを実行する
    ///
    /// # Arguments
    ///
    /// * `work` - スコープを受け取る作業。`Ok` ならコミット、`Err` ならロールバック
    ///
    /// # Errors
    ///
    /// `work` が返したエラー、またはコミット時の `Storage` エラー
    async fn run<T, F>(&self, work: F) -> DomainResult<T>
    where
        T: Send,
        F: FnOnce(&mut dyn Scope) -> DomainResult<T> + Send;

    /// 読み取り専用のスコープで実行する
    ///
    /// # Errors
    ///
    /// `work` が返したエラー
    async fn read<T, F>(&self, work: F) -> DomainResult<T>
    where
        T: Send,
        F: FnOnce(&dyn Scope) -> DomainResult<T> + Send;
}
