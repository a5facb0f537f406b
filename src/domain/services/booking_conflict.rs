//! # Booking Conflict Validator
//!
//! 予約の重複判定サービス

use chrono::NaiveDate;

use crate::domain::entities::{CourtId, Rental, TimeSlot};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::RentalRepository;

/// 予約重複バリデータ
///
/// レンタル作成と同じトランザクションスコープ内で呼び出すこと。
/// 書き込みトランザクションの直列化により、チェックから作成までの間に
/// 他の予約が割り込むことはない。
pub struct BookingConflictValidator;

impl BookingConflictValidator {
    /// 候補の時間帯と最初に重なる既存レンタルを返す
    ///
    /// # Arguments
    ///
    /// * `existing` - 同じコート・日付の既存レンタル
    /// * `candidate` - 予約しようとしている時間帯
    pub fn find_conflict<'a>(existing: &'a [Rental], candidate: &TimeSlot) -> Option<&'a Rental> {
        existing.iter().find(|rental| rental.slot.overlaps(candidate))
    }

    /// 予約を受け付けられるか判定する
    ///
    /// # Errors
    ///
    /// 既存レンタルと重なる場合に、最初に重なったレンタルを含む
    /// `RentalConflict` を返す
    pub fn check(
        rentals: &dyn RentalRepository,
        court: CourtId,
        date: NaiveDate,
        candidate: &TimeSlot,
    ) -> DomainResult<()> {
        let existing = rentals.find_by_court_and_date(court, date);

        match Self::find_conflict(&existing, candidate) {
            Some(conflicting) => Err(DomainError::RentalConflict {
                court,
                date,
                conflicting: Box::new(conflicting.clone()),
            }),
            None => Ok(()),
        }
    }

    /// 予約済みの時間帯を除いた空き時間帯を返す
    ///
    /// `window` 内で、既存レンタルと重ならない最大の連続区間を時刻順に返す。
    pub fn available_slots(existing: &[Rental], window: TimeSlot) -> Vec<TimeSlot> {
        let mut booked: Vec<TimeSlot> = existing
            .iter()
            .map(|rental| rental.slot)
            .filter(|slot| slot.overlaps(&window))
            .collect();
        booked.sort_by_key(|slot| slot.start());

        let mut free = Vec::new();
        let mut cursor = window.start();
        for slot in booked {
            if slot.start() > cursor {
                if let Ok(gap) = TimeSlot::new(cursor, slot.start().min(window.end())) {
                    free.push(gap);
                }
            }
            cursor = cursor.max(slot.end());
        }
        if cursor < window.end() {
            if let Ok(tail) = TimeSlot::new(cursor, window.end()) {
                free.push(tail);
            }
        }
        free
    }
}
