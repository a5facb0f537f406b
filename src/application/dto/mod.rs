//! # Data Transfer Objects
//!
//! サービスが返す一覧・集計結果

pub mod pagination_info;
pub mod user_rental_times;

pub use pagination_info::{Paged, PaginationInfo};
pub use user_rental_times::UserRentalTimes;
