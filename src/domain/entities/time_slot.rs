//! # TimeSlot Value Object
//!
//! 1日の中の時間帯 `[start, end)`（時単位）

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// 1日の最終時刻（終了時刻の上限）
pub const HOURS_PER_DAY: u8 = 24;

/// 予約時間帯
///
/// 半開区間 `[start, end)`。`0 <= start < end <= 24` を満たす。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot")]
pub struct TimeSlot {
    start: u8,
    end: u8,
}

#[derive(Deserialize)]
struct RawTimeSlot {
    start: u8,
    end: u8,
}

impl TimeSlot {
    /// 新しい時間帯を作成
    ///
    /// # Errors
    ///
    /// 範囲外、または `end <= start` の場合に `Validation` エラーを返す
    pub fn new(start: u8, end: u8) -> DomainResult<Self> {
        if end > HOURS_PER_DAY {
            return Err(DomainError::validation(
                "end",
                format!("must be at most {}", HOURS_PER_DAY),
            ));
        }
        if start >= end {
            return Err(DomainError::validation(
                "start",
                format!("start ({}) must be before end ({})", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// 1日全体 `[0, 24)`
    pub fn whole_day() -> Self {
        Self {
            start: 0,
            end: HOURS_PER_DAY,
        }
    }

    #[inline]
    pub fn start(&self) -> u8 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u8 {
        self.end
    }

    /// 時間数
    #[inline]
    pub fn duration(&self) -> u8 {
        self.end - self.start
    }

    /// 2つの時間帯が重なるかどうか
    ///
    /// 半開区間なので隣接（`self.end == other.start`）は重ならない。
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = DomainError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02}:00, {:02}:00)", self.start, self.end)
    }
}
