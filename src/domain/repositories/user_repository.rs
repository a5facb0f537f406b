//! # User Repository Trait
//!
//! ユーザーの永続化を抽象化

use crate::domain::entities::{Email, Name, Page, User, UserId};
use crate::domain::error::DomainResult;

/// ユーザーリポジトリ
pub trait UserRepository {
    /// ユーザーを作成する
    ///
    /// # Errors
    ///
    /// メールアドレスが登録済みの場合に `Validation` エラーを返す
    fn create_user(&mut self, name: Name, email: Email) -> DomainResult<User>;

    /// 識別子でユーザーを検索する
    fn find_by_identifier(&self, uid: UserId) -> Option<User>;

    /// メールアドレスでユーザーを検索する
    fn find_by_email(&self, email: &Email) -> Option<User>;

    /// 作成順でユーザーを返す
    fn find_all(&self, page: Page) -> Vec<User>;

    /// ユーザーの総数
    fn count(&self) -> usize;

    /// 全ユーザーを削除する（テスト用）
    fn clear(&mut self);
}
