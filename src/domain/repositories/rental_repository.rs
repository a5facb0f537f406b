//! # Rental Repository Trait
//!
//! レンタルの永続化を抽象化

use chrono::NaiveDate;

use crate::domain::entities::{ClubId, CourtId, Page, Rental, RentalId, TimeSlot, UserId};
use crate::domain::error::DomainResult;

/// レンタルリポジトリ
///
/// 時間帯の重複チェックは行わない。呼び出し側は同一スコープ内で
/// `BookingConflictValidator` を通してから `create_rental` を呼ぶこと。
pub trait RentalRepository {
    /// レンタルを作成する
    ///
    /// # Errors
    ///
    /// コートまたは借り手が存在しない場合に `ReferenceNotFound` を返す
    fn create_rental(
        &mut self,
        date: NaiveDate,
        slot: TimeSlot,
        renter: UserId,
        court: CourtId,
    ) -> DomainResult<Rental>;

    /// 識別子でレンタルを検索する
    fn find_by_identifier(&self, rid: RentalId) -> Option<Rental>;

    /// 指定のコート・日付のレンタルを全件返す
    fn find_by_court_and_date(&self, court: CourtId, date: NaiveDate) -> Vec<Rental>;

    /// コートのレンタルを作成順で返す（日付指定は任意）
    fn find_by_court(&self, court: CourtId, date: Option<NaiveDate>, page: Page) -> Vec<Rental>;

    /// コートのレンタル数（日付指定は任意）
    fn count_by_court(&self, court: CourtId, date: Option<NaiveDate>) -> usize;

    /// クラブの全コートについて、指定日のレンタルを作成順で返す
    fn find_by_club_and_date(&self, club: ClubId, date: NaiveDate) -> Vec<Rental>;

    /// ユーザーのレンタルを作成順で返す
    fn find_by_renter(&self, renter: UserId, page: Page) -> Vec<Rental>;

    /// ユーザーのレンタル数
    fn count_by_renter(&self, renter: UserId) -> usize;

    /// 全レンタルを削除する（テスト用）
    fn clear(&mut self);
}
