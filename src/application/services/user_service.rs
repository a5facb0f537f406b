//! # User Service
//!
//! ユーザー登録と検索

use log::info;
use std::sync::Arc;

use crate::application::dto::{Paged, PaginationInfo};
use crate::domain::entities::{Email, Name, Page, User, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::TransactionManager;

/// ユーザーサービス
pub struct UserService<T: TransactionManager> {
    trx: Arc<T>,
}

impl<T: TransactionManager> UserService<T> {
    pub fn new(trx: Arc<T>) -> Self {
        Self { trx }
    }

    /// ユーザーを登録する
    ///
    /// # Errors
    ///
    /// メールアドレスが登録済みの場合に `Validation` エラーを返す
    pub async fn create_user(&self, name: Name, email: Email) -> DomainResult<User> {
        let user = self
            .trx
            .run(move |scope| scope.users_mut().create_user(name, email))
            .await?;

        info!("Registered user {} <{}>", user.uid, user.email);
        Ok(user)
    }

    /// 識別子でユーザーを取得する
    ///
    /// # Errors
    ///
    /// 存在しない場合に `EntityNotFound` を返す
    pub async fn get_user(&self, uid: UserId) -> DomainResult<User> {
        self.trx
            .read(move |scope| {
                scope
                    .users()
                    .find_by_identifier(uid)
                    .ok_or_else(|| DomainError::not_found(EntityKind::User, uid))
            })
            .await
    }

    pub async fn get_users(&self, page: Page) -> DomainResult<Vec<User>> {
        self.trx
            .read(move |scope| Ok(scope.users().find_all(page)))
            .await
    }

    pub async fn number_of_users(&self) -> DomainResult<PaginationInfo> {
        self.trx
            .read(|scope| Ok(PaginationInfo::new(scope.users().count())))
            .await
    }

    /// ユーザー一覧と総件数を同じスナップショットから返す
    pub async fn get_users_paged(&self, page: Page) -> DomainResult<Paged<User>> {
        self.trx
            .read(move |scope| {
                let users = scope.users();
                Ok(Paged::new(
                    users.find_all(page),
                    PaginationInfo::new(users.count()),
                ))
            })
            .await
    }
}
