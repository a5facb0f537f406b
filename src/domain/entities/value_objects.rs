//! # Value Objects
//!
//! 名前・メールアドレスのバリューオブジェクト
//!
//! 構築時に検証を行うため、存在する値は常に妥当である。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// 名前（ユーザー名・クラブ名・コート名）
///
/// 前後の空白を除いて空でない文字列
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// 新しい名前を作成
    ///
    /// # Errors
    ///
    /// 空白のみ、または空の場合に `Validation` エラーを返す
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// メールアドレス
///
/// `local@domain.tld` 形式。比較のため小文字に正規化して保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// 新しいメールアドレスを作成
    ///
    /// # Errors
    ///
    /// 形式が不正な場合に `Validation` エラーを返す
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if !is_well_formed(&value) {
            return Err(DomainError::validation(
                "email",
                format!("'{}' is not a valid address", value),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_well_formed(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // ドメインはドット区切りで、空のラベルを含まない
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_trims_whitespace() {
        let name = Name::new("  Court A  ").unwrap();
        assert_eq!(name.as_str(), "Court A");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert!(Name::new("").is_err());
        assert!(matches!(
            Name::new("   "),
            Err(DomainError::Validation { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_email_valid() {
        let email = Email::new("Owner@Email.com").unwrap();
        assert_eq!(email.as_str(), "owner@email.com");
    }

    #[test]
    fn test_email_invalid_forms() {
        for raw in [
            "",
            "owner",
            "@email.com",
            "owner@",
            "owner@email",
            "owner@@email.com",
            "owner@email..com",
            "ow ner@email.com",
        ] {
            assert!(Email::new(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_name_deserialize_validates() {
        let ok: Result<Name, _> = serde_json::from_str("\"Sports Club\"");
        assert!(ok.is_ok());

        let bad: Result<Name, _> = serde_json::from_str("\"  \"");
        assert!(bad.is_err());
    }
}
