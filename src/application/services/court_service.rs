//! # Court Service
//!
//! コートの作成と検索、ユーザーが借りたコートの集計

use log::info;
use std::sync::Arc;

use crate::application::dto::{Paged, PaginationInfo};
use crate::domain::entities::{ClubId, Court, CourtId, Name, Page, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::TransactionManager;

/// コートサービス
pub struct CourtService<T: TransactionManager> {
    trx: Arc<T>,
}

impl<T: TransactionManager> CourtService<T> {
    pub fn new(trx: Arc<T>) -> Self {
        Self { trx }
    }

    /// クラブのコートを作成順で返す
    ///
    /// # Arguments
    ///
    /// * `club` - クラブID
    /// * `page` - ページ指定
    pub async fn get_courts(&self, club: ClubId, page: Page) -> DomainResult<Vec<Court>> {
        self.trx
            .read(move |scope| Ok(scope.courts().find_by_club_identifier(club, page)))
            .await
    }

    /// クラブのコート数
    pub async fn number_of_courts(&self, club: ClubId) -> DomainResult<PaginationInfo> {
        self.trx
            .read(move |scope| Ok(PaginationInfo::new(scope.courts().count(club))))
            .await
    }

    /// ユーザーが借りたことのあるコートの数
    ///
    /// 同じコートを何度借りても1つとして数える
    pub async fn number_of_user_courts_that_have_rentals_of_user(
        &self,
        renter: UserId,
    ) -> DomainResult<PaginationInfo> {
        self.trx
            .read(move |scope| Ok(PaginationInfo::new(scope.courts().count_rented_by(renter))))
            .await
    }

    /// 識別子でコートを取得する
    ///
    /// # Errors
    ///
    /// 存在しない場合に `EntityNotFound` を返す
    pub async fn get_court_by_id(&self, crid: CourtId) -> DomainResult<Court> {
        self.trx
            .read(move |scope| {
                scope
                    .courts()
                    .find_by_identifier(crid)
                    .ok_or_else(|| DomainError::not_found(EntityKind::Court, crid))
            })
            .await
    }

    /// コートを作成する
    ///
    /// # Errors
    ///
    /// クラブが存在しない場合に `ReferenceNotFound` を返す
    pub async fn create_court(&self, name: Name, club: ClubId) -> DomainResult<Court> {
        let court = self
            .trx
            .run(move |scope| scope.courts_mut().create_court(name, club))
            .await?;

        info!("Created court {} '{}' in club {}", court.crid, court.name, court.club);
        Ok(court)
    }

    /// ユーザーが借りたことのあるコートを返す（重複なし）
    pub async fn get_courts_user_rentals(
        &self,
        renter: UserId,
        page: Page,
    ) -> DomainResult<Vec<Court>> {
        self.trx
            .read(move |scope| Ok(scope.courts().find_rented_by(renter, page)))
            .await
    }

    /// クラブのコート一覧と総件数を同じスナップショットから返す
    pub async fn get_courts_paged(&self, club: ClubId, page: Page) -> DomainResult<Paged<Court>> {
        self.trx
            .read(move |scope| {
                let courts = scope.courts();
                Ok(Paged::new(
                    courts.find_by_club_identifier(club, page),
                    PaginationInfo::new(courts.count(club)),
                ))
            })
            .await
    }

    pub async fn get_courts_user_rentals_paged(
        &self,
        renter: UserId,
        page: Page,
    ) -> DomainResult<Paged<Court>> {
        self.trx
            .read(move |scope| {
                let courts = scope.courts();
                Ok(Paged::new(
                    courts.find_rented_by(renter, page),
                    PaginationInfo::new(courts.count_rented_by(renter)),
                ))
            })
            .await
    }
}
