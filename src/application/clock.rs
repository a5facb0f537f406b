//! # Clock
//!
//! 予約の下限日（当日）を決めるための時計

use chrono::{Local, NaiveDate};

/// 時計
pub trait Clock: Send + Sync {
    /// 今日の日付
    fn today(&self) -> NaiveDate;
}

/// システム時計（ローカルタイムゾーン）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日付の時計
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
