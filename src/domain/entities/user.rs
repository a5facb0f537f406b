//! # User Entity
//!
//! 利用者のドメインエンティティ

use serde::{Deserialize, Serialize};

use super::ids::UserId;
use super::value_objects::{Email, Name};

/// ユーザー
///
/// 登録時に作成され、以後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: UserId,
    pub name: Name,
    pub email: Email,
}

impl User {
    pub fn new(uid: UserId, name: Name, email: Email) -> Self {
        Self { uid, name, email }
    }
}
