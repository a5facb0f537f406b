//! # Pagination DTOs
//!
//! 一覧結果とページネーション情報のData Transfer Object

use serde::{Deserialize, Serialize};

/// ページネーション情報
///
/// ページ指定とは無関係な総件数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total_elements: usize,
}

impl PaginationInfo {
    pub fn new(total_elements: usize) -> Self {
        Self { total_elements }
    }
}

/// ページ付きの一覧
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub pagination_info: PaginationInfo,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, pagination_info: PaginationInfo) -> Self {
        Self {
            items,
            pagination_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_info_serializes_camel_case() {
        let json = serde_json::to_value(PaginationInfo::new(2)).unwrap();
        assert_eq!(json, serde_json::json!({ "totalElements": 2 }));
    }

    #[test]
    fn test_paged_serializes() {
        let paged = Paged::new(vec![1, 2], PaginationInfo::new(5));

        let json = serde_json::to_value(&paged).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "items": [1, 2], "paginationInfo": { "totalElements": 5 } })
        );
    }
}
