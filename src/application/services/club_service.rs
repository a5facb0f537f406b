//! # Club Service
//!
//! クラブの作成と検索

use log::info;
use std::sync::Arc;

use crate::application::dto::{Paged, PaginationInfo};
use crate::domain::entities::{Club, ClubId, Name, Page, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::TransactionManager;

/// クラブサービス
pub struct ClubService<T: TransactionManager> {
    trx: Arc<T>,
}

impl<T: TransactionManager> ClubService<T> {
    pub fn new(trx: Arc<T>) -> Self {
        Self { trx }
    }

    /// クラブを作成する
    ///
    /// # Errors
    ///
    /// オーナーが存在しない場合に `ReferenceNotFound` を返す
    pub async fn create_club(&self, name: Name, owner: UserId) -> DomainResult<Club> {
        let club = self
            .trx
            .run(move |scope| scope.clubs_mut().create_club(name, owner))
            .await?;

        info!("Created club {} '{}' owned by {}", club.cid, club.name, club.owner);
        Ok(club)
    }

    /// 識別子でクラブを取得する
    ///
    /// # Errors
    ///
    /// 存在しない場合に `EntityNotFound` を返す
    pub async fn get_club(&self, cid: ClubId) -> DomainResult<Club> {
        self.trx
            .read(move |scope| {
                scope
                    .clubs()
                    .find_by_identifier(cid)
                    .ok_or_else(|| DomainError::not_found(EntityKind::Club, cid))
            })
            .await
    }

    pub async fn get_clubs(&self, page: Page) -> DomainResult<Vec<Club>> {
        self.trx
            .read(move |scope| Ok(scope.clubs().find_all(page)))
            .await
    }

    pub async fn number_of_clubs(&self) -> DomainResult<PaginationInfo> {
        self.trx
            .read(|scope| Ok(PaginationInfo::new(scope.clubs().count())))
            .await
    }

    pub async fn get_clubs_by_owner(&self, owner: UserId, page: Page) -> DomainResult<Vec<Club>> {
        self.trx
            .read(move |scope| Ok(scope.clubs().find_by_owner(owner, page)))
            .await
    }

    pub async fn number_of_clubs_by_owner(&self, owner: UserId) -> DomainResult<PaginationInfo> {
        self.trx
            .read(move |scope| Ok(PaginationInfo::new(scope.clubs().count_by_owner(owner))))
            .await
    }

    /// クラブ一覧と総件数を同じスナップショットから返す
    pub async fn get_clubs_paged(&self, page: Page) -> DomainResult<Paged<Club>> {
        self.trx
            .read(move |scope| {
                let clubs = scope.clubs();
                Ok(Paged::new(
                    clubs.find_all(page),
                    PaginationInfo::new(clubs.count()),
                ))
            })
            .await
    }

    pub async fn get_clubs_by_owner_paged(
        &self,
        owner: UserId,
        page: Page,
    ) -> DomainResult<Paged<Club>> {
        self.trx
            .read(move |scope| {
                let clubs = scope.clubs();
                Ok(Paged::new(
                    clubs.find_by_owner(owner, page),
                    PaginationInfo::new(clubs.count_by_owner(owner)),
                ))
            })
            .await
    }
}
