//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - エンティティ群ごとのtraitを `Scope` にまとめ、
//!   `TransactionManager` がスコープ単位の原子性を保証する

pub mod club_repository;
pub mod court_repository;
pub mod rental_repository;
pub mod transaction;
pub mod user_repository;

pub use club_repository::ClubRepository;
pub use court_repository::CourtRepository;
pub use rental_repository::RentalRepository;
pub use transaction::{Scope, TransactionManager};
pub use user_repository::UserRepository;
