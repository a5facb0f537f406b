//! # Rental Entity
//!
//! コートレンタル（予約）のドメインエンティティ

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{CourtId, RentalId, UserId};
use super::time_slot::TimeSlot;

/// レンタル
///
/// 追記のみ（作成後の変更・キャンセルは扱わない）。
/// コートと借り手は識別子による弱参照。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub rid: RentalId,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub renter: UserId,
    pub court: CourtId,
}

impl Rental {
    pub fn new(
        rid: RentalId,
        date: NaiveDate,
        slot: TimeSlot,
        renter: UserId,
        court: CourtId,
    ) -> Self {
        Self {
            rid,
            date,
            slot,
            renter,
            court,
        }
    }

    /// 指定のコート・日付の予約かどうか
    pub fn is_on(&self, court: CourtId, date: NaiveDate) -> bool {
        self.court == court && self.date == date
    }
}
