//! In-Memory Repositories
//!
//! 全リポジトリtraitを1つのストア状態で実装し、
//! トランザクションマネージャがその状態へのアクセスを直列化する

mod club_repository;
mod court_repository;
mod rental_repository;
mod store;
mod transaction_manager;
mod user_repository;

pub use store::StoreState;
pub use transaction_manager::InMemoryTransactionManager;
