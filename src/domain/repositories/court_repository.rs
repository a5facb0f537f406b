//! # Court Repository Trait
//!
//! コートの永続化を抽象化

use crate::domain::entities::{ClubId, Court, CourtId, Name, Page, UserId};
use crate::domain::error::DomainResult;

/// コートリポジトリ
pub trait CourtRepository {
    /// コートを作成する
    ///
    /// # Errors
    ///
    /// クラブが存在しない場合に `ReferenceNotFound` を返す
    fn create_court(&mut self, name: Name, club: ClubId) -> DomainResult<Court>;

    /// 識別子でコートを検索する
    fn find_by_identifier(&self, crid: CourtId) -> Option<Court>;

    /// クラブのコートを作成順で返す
    fn find_by_club_identifier(&self, club: ClubId, page: Page) -> Vec<Court>;

    /// クラブのコート数
    fn count(&self, club: ClubId) -> usize;

    /// ユーザーが借りたことのあるコートを返す
    ///
    /// 同じコートを複数回借りていても1件として扱う。順序はコートの作成順。
    fn find_rented_by(&self, renter: UserId, page: Page) -> Vec<Court>;

    /// ユーザーが借りたことのあるコートの数（重複なし）
    fn count_rented_by(&self, renter: UserId) -> usize;

    /// 全コートを削除する（テスト用）
    fn clear(&mut self);
}
