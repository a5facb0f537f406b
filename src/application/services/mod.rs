//! # Services
//!
//! 外部からの呼び出しをトランザクションスコープ内のリポジトリ操作に変換する
//!
//! ## サービス
//!
//! - **UserService**: ユーザー登録と検索
//! - **ClubService**: クラブの作成と検索
//! - **CourtService**: コートの作成・検索と、借りたコートの集計
//! - **RentalService**: 重複判定付きの予約と予約履歴の検索

pub mod club_service;
pub mod court_service;
pub mod rental_service;
pub mod user_service;

pub use club_service::ClubService;
pub use court_service::CourtService;
pub use rental_service::RentalService;
pub use user_service::UserService;
