//! # Page Value Object
//!
//! オフセットベースのページ指定

use crate::domain::error::{DomainError, DomainResult};

/// ページ指定
///
/// 先頭から `skip` 件を読み飛ばし、最大 `limit` 件を返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: usize,
    skip: usize,
}

impl Page {
    /// 新しいページ指定を作成
    ///
    /// # Errors
    ///
    /// `limit` が0の場合に `Validation` エラーを返す
    pub fn new(limit: usize, skip: usize) -> DomainResult<Self> {
        if limit == 0 {
            return Err(DomainError::validation("limit", "must be positive"));
        }
        Ok(Self { limit, skip })
    }

    /// 全件を返すページ指定
    pub fn all() -> Self {
        Self {
            limit: usize::MAX,
            skip: 0,
        }
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// 次のページ
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            skip: self.skip.saturating_add(self.limit),
        }
    }

    /// イテレータにページ指定を適用して収集する
    pub fn apply<T>(&self, items: impl Iterator<Item = T>) -> Vec<T> {
        items.skip(self.skip).take(self.limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_limit() {
        assert!(Page::new(0, 0).is_err());
        assert!(Page::new(1, 0).is_ok());
    }

    #[test]
    fn test_apply() {
        let page = Page::new(2, 1).unwrap();
        let result = page.apply(1..=5);
        assert_eq!(result, vec![2, 3]);
    }

    #[test]
    fn test_apply_past_end() {
        let page = Page::new(10, 8).unwrap();
        let result = page.apply(0..5);
        assert!(result.is_empty());
    }

    #[test]
    fn test_next() {
        let page = Page::new(3, 0).unwrap().next();
        assert_eq!(page.skip(), 3);
        assert_eq!(page.limit(), 3);
    }
}
