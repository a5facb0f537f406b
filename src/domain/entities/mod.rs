//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **User**: 利用者
//! - **Club**: クラブ（オーナーはユーザー）
//! - **Court**: クラブに属するコート
//! - **Rental**: コートの時間帯予約
//!
//! ## バリューオブジェクト
//!
//! - **Name** / **Email**: 検証済みの文字列
//! - **TimeSlot**: 半開区間の時間帯
//! - **Page**: オフセットベースのページ指定

pub mod club;
pub mod court;
pub mod ids;
pub mod pagination;
pub mod rental;
pub mod time_slot;
pub mod user;
pub mod value_objects;

pub use club::Club;
pub use court::Court;
pub use ids::{ClubId, CourtId, RentalId, UserId};
pub use pagination::Page;
pub use rental::Rental;
pub use time_slot::TimeSlot;
pub use user::User;
pub use value_objects::{Email, Name};
