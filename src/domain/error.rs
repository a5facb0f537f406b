//! # Domain Errors
//!
//! ドメイン層のエラー型
//!
//! リポジトリ・バリデータ・トランザクションマネージャはこの型で失敗を返し、
//! サービス層はそのまま呼び出し元に `Result` として返す。

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::domain::entities::ids::CourtId;
use crate::domain::entities::rental::Rental;

/// ドメイン操作の結果型
pub type DomainResult<T> = Result<T, DomainError>;

/// エンティティの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Club,
    Court,
    Rental,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "user",
            EntityKind::Club => "club",
            EntityKind::Court => "court",
            EntityKind::Rental => "rental",
        };
        f.write_str(name)
    }
}

/// ドメインエラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// 作成時に参照先の親エンティティが存在しない
    #[error("referenced {kind} {id} does not exist")]
    ReferenceNotFound { kind: EntityKind, id: u32 },

    /// 識別子による直接の検索で見つからなかった
    #[error("{kind} {id} not found")]
    EntityNotFound { kind: EntityKind, id: u32 },

    /// 既存のレンタルと時間帯が重なっている
    #[error("court {court} is already rented on {date} at {}", .conflicting.slot)]
    RentalConflict {
        court: CourtId,
        date: NaiveDate,
        conflicting: Box<Rental>,
    },

    /// 値オブジェクトの構築時の検証エラー
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// 永続化バックエンドの失敗
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// 検証エラーを作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: impl Into<u32>) -> Self {
        DomainError::EntityNotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn missing_reference(kind: EntityKind, id: impl Into<u32>) -> Self {
        DomainError::ReferenceNotFound {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ids::UserId;

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::User.to_string(), "user");
        assert_eq!(EntityKind::Court.to_string(), "court");
    }

    #[test]
    fn test_reference_not_found_message() {
        let err = DomainError::missing_reference(EntityKind::Club, 7u32);
        assert_eq!(err.to_string(), "referenced club 7 does not exist");
    }

    #[test]
    fn test_not_found_from_typed_id() {
        let err = DomainError::not_found(EntityKind::User, UserId(3));
        assert_eq!(
            err,
            DomainError::EntityNotFound {
                kind: EntityKind::User,
                id: 3
            }
        );
    }

    #[test]
    fn test_validation_message() {
        let err = DomainError::validation("name", "must not be empty");
        assert_eq!(err.to_string(), "invalid name: must not be empty");
    }
}
