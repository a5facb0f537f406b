//! # Courtbook
//!
//! スポーツクラブのコートレンタル管理
//!
//! 同じコートの予約が時間的に重ならないことを、トランザクション単位の
//! 直列化によって保証する。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、Repository trait、予約の重複判定
//! - **Application層**: サービス（ユースケース）
//! - **Adapter層**: In-Memoryストア、JSONスナップショット、設定
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（サービス）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
