//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **BookingConflictValidator**: 予約時間帯の重複判定と空き時間帯の算出

pub mod booking_conflict;

pub use booking_conflict::BookingConflictValidator;
