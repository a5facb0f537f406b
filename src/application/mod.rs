//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（サービス）
//!
//! ## 特徴
//!
//! - 1操作につき1つのトランザクションスコープを開き、リポジトリを組み合わせる
//! - TransactionManager traitに依存（実装には依存しない）
//! - 結果は常に `DomainResult` として返す
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **services**: User / Club / Court / Rental サービス
//! - **clock**: 予約の下限日を決める時計

pub mod clock;
pub mod dto;
pub mod services;
