//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod in_memory;
pub mod json_snapshot_repository;
pub mod snapshot_repository;

pub use in_memory::{InMemoryTransactionManager, StoreState};
pub use json_snapshot_repository::JsonSnapshotRepository;
pub use snapshot_repository::SnapshotRepository;
