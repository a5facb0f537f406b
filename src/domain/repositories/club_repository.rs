//! # Club Repository Trait
//!
//! クラブの永続化を抽象化

use crate::domain::entities::{Club, ClubId, Name, Page, UserId};
use crate::domain::error::DomainResult;

/// クラブリポジトリ
pub trait ClubRepository {
    /// クラブを作成する
    ///
    /// # Errors
    ///
    /// オーナーが存在しない場合に `ReferenceNotFound` を返す
    fn create_club(&mut self, name: Name, owner: UserId) -> DomainResult<Club>;

    /// 識別子でクラブを検索する
    fn find_by_identifier(&self, cid: ClubId) -> Option<Club>;

    /// 作成順でクラブを返す
    fn find_all(&self, page: Page) -> Vec<Club>;

    /// オーナーのクラブを作成順で返す
    fn find_by_owner(&self, owner: UserId, page: Page) -> Vec<Club>;

    /// クラブの総数
    fn count(&self) -> usize;

    /// オーナーのクラブ数
    fn count_by_owner(&self, owner: UserId) -> usize;

    /// 全クラブを削除する（テスト用）
    fn clear(&mut self);
}
