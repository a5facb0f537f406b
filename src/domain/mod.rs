//! # Domain Layer
//!
//! このモジュールはコートレンタルのビジネスルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ストレージやCLIについて何も知らない
//! - 値オブジェクトは構築時に検証される
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（User, Club, Court, Rental）と値オブジェクト
//! - **repositories**: Repository trait と TransactionManager trait
//! - **services**: Domain Service（予約の重複判定など）
//! - **error**: ドメインエラー

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
