//! # Rental Service
//!
//! コートの予約と予約履歴の検索
//!
//! 予約の作成は、重複判定と作成を1つの書き込みトランザクション内で行う。
//! 書き込みトランザクションは直列化されるため、同じコート・日付への
//! 同時予約が両方とも判定を通過することはない。

use chrono::NaiveDate;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::dto::{Paged, PaginationInfo, UserRentalTimes};
use crate::domain::entities::{ClubId, CourtId, Page, Rental, RentalId, TimeSlot, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::TransactionManager;
use crate::domain::services::BookingConflictValidator;

/// レンタルサービス
pub struct RentalService<T: TransactionManager> {
    trx: Arc<T>,
    clock: Arc<dyn Clock>,
}

impl<T: TransactionManager> RentalService<T> {
    /// 新しいサービスを作成
    ///
    /// # Arguments
    ///
    /// * `trx` - トランザクションマネージャ
    /// * `clock` - 予約の下限日（今日）を決める時計
    pub fn new(trx: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self { trx, clock }
    }

    /// コートを予約する
    ///
    /// # Arguments
    ///
    /// * `date` - 予約日（今日以降）
    /// * `slot` - 時間帯
    /// * `renter` - 借り手
    /// * `court` - コート
    ///
    /// # Errors
    ///
    /// - 過去の日付の場合は `Validation`（ストアにはアクセスしない）
    /// - コートまたは借り手が存在しない場合は `ReferenceNotFound`
    /// - 既存の予約と重なる場合は `RentalConflict`
    pub async fn create_rental(
        &self,
        date: NaiveDate,
        slot: TimeSlot,
        renter: UserId,
        court: CourtId,
    ) -> DomainResult<Rental> {
        let today = self.clock.today();
        if date < today {
            return Err(DomainError::validation(
                "date",
                format!("{} is in the past (today is {})", date, today),
            ));
        }

        let result = self
            .trx
            .run(move |scope| {
                BookingConflictValidator::check(scope.rentals(), court, date, &slot)?;
                scope.rentals_mut().create_rental(date, slot, renter, court)
            })
            .await;

        match &result {
            Ok(rental) => info!(
                "Rental {} created: court {} on {} {} by user {}",
                rental.rid, court, date, slot, renter
            ),
            Err(DomainError::RentalConflict { conflicting, .. }) => warn!(
                "Rental rejected: court {} on {} {} overlaps rental {}",
                court, date, slot, conflicting.rid
            ),
            Err(_) => {}
        }

        result
    }

    /// 識別子でレンタルを取得する
    ///
    /// # Errors
    ///
    /// 存在しない場合に `EntityNotFound` を返す
    pub async fn get_rental(&self, rid: RentalId) -> DomainResult<Rental> {
        self.trx
            .read(move |scope| {
                scope
                    .rentals()
                    .find_by_identifier(rid)
                    .ok_or_else(|| DomainError::not_found(EntityKind::Rental, rid))
            })
            .await
    }

    /// コートのレンタルを作成順で返す（日付指定は任意）
    pub async fn get_rentals(
        &self,
        court: CourtId,
        date: Option<NaiveDate>,
        page: Page,
    ) -> DomainResult<Vec<Rental>> {
        self.trx
            .read(move |scope| Ok(scope.rentals().find_by_court(court, date, page)))
            .await
    }

    pub async fn number_of_rentals(
        &self,
        court: CourtId,
        date: Option<NaiveDate>,
    ) -> DomainResult<PaginationInfo> {
        self.trx
            .read(move |scope| Ok(PaginationInfo::new(scope.rentals().count_by_court(court, date))))
            .await
    }

    /// ユーザーのレンタル履歴を作成順で返す
    pub async fn get_user_rentals(&self, renter: UserId, page: Page) -> DomainResult<Vec<Rental>> {
        self.trx
            .read(move |scope| Ok(scope.rentals().find_by_renter(renter, page)))
            .await
    }

    pub async fn number_of_user_rentals(&self, renter: UserId) -> DomainResult<PaginationInfo> {
        self.trx
            .read(move |scope| Ok(PaginationInfo::new(scope.rentals().count_by_renter(renter))))
            .await
    }

    /// コートのレンタル一覧と総件数を同じスナップショットから返す
    pub async fn get_rentals_paged(
        &self,
        court: CourtId,
        date: Option<NaiveDate>,
        page: Page,
    ) -> DomainResult<Paged<Rental>> {
        self.trx
            .read(move |scope| {
                let rentals = scope.rentals();
                Ok(Paged::new(
                    rentals.find_by_court(court, date, page),
                    PaginationInfo::new(rentals.count_by_court(court, date)),
                ))
            })
            .await
    }

    pub async fn get_user_rentals_paged(
        &self,
        renter: UserId,
        page: Page,
    ) -> DomainResult<Paged<Rental>> {
        self.trx
            .read(move |scope| {
                let rentals = scope.rentals();
                Ok(Paged::new(
                    rentals.find_by_renter(renter, page),
                    PaginationInfo::new(rentals.count_by_renter(renter)),
                ))
            })
            .await
    }

    /// コートの指定日の空き時間帯
    ///
    /// # Errors
    ///
    /// コートが存在しない場合に `EntityNotFound` を返す
    pub async fn available_slots(
        &self,
        court: CourtId,
        date: NaiveDate,
    ) -> DomainResult<Vec<TimeSlot>> {
        self.trx
            .read(move |scope| {
                if scope.courts().find_by_identifier(court).is_none() {
                    return Err(DomainError::not_found(EntityKind::Court, court));
                }
                let existing = scope.rentals().find_by_court_and_date(court, date);
                Ok(BookingConflictValidator::available_slots(
                    &existing,
                    TimeSlot::whole_day(),
                ))
            })
            .await
    }

    /// クラブの全コートについて、指定日にユーザーごとに何回予約しているか
    ///
    /// 各ユーザーの最初の予約の作成順に並ぶ。総件数は借り手の人数。
    ///
    /// # Errors
    ///
    /// クラブが存在しない場合に `EntityNotFound` を返す
    pub async fn users_rental_times_on_date(
        &self,
        club: ClubId,
        date: NaiveDate,
        page: Page,
    ) -> DomainResult<Paged<UserRentalTimes>> {
        self.trx
            .read(move |scope| {
                if scope.clubs().find_by_identifier(club).is_none() {
                    return Err(DomainError::not_found(EntityKind::Club, club));
                }

                let mut order: Vec<UserId> = Vec::new();
                let mut times: HashMap<UserId, usize> = HashMap::new();
                for rental in scope.rentals().find_by_club_and_date(club, date) {
                    let counter = times.entry(rental.renter).or_insert_with(|| {
                        order.push(rental.renter);
                        0
                    });
                    *counter += 1;
                }

                let total = order.len();
                let users = scope.users();
                let items = page
                    .apply(order.into_iter())
                    .into_iter()
                    .filter_map(|uid| {
                        let count = times.get(&uid).copied().unwrap_or_default();
                        users
                            .find_by_identifier(uid)
                            .map(|user| UserRentalTimes::new(user, count))
                    })
                    .collect();

                Ok(Paged::new(items, PaginationInfo::new(total)))
            })
            .await
    }
}
