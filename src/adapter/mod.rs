//! Adapter Layer
//!
//! 外部システム（ファイルシステム、設定）との統合とストアの実装

pub mod config;
pub mod repositories;
