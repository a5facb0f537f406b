//! In-Memory Store State
//!
//! 全エンティティを作成順に保持するストア状態

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::entities::{Club, Court, CourtId, Rental, User};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::{
    ClubRepository, CourtRepository, RentalRepository, Scope, UserRepository,
};
use crate::domain::services::BookingConflictValidator;

/// 採番カウンタ
///
/// `clear()` ではリセットしないので、識別子は再利用されない
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct Sequences {
    pub(super) user: u32,
    pub(super) club: u32,
    pub(super) court: u32,
    pub(super) rental: u32,
}

impl Sequences {
    /// カウンタを進めて次の識別子を返す
    ///
    /// # Errors
    ///
    /// 識別子を使い切った場合に `Storage` エラーを返す
    pub(super) fn next(counter: &mut u32, kind: EntityKind) -> DomainResult<u32> {
        let next = counter
            .checked_add(1)
            .ok_or_else(|| DomainError::Storage(format!("{} identifiers exhausted", kind)))?;
        *counter = next;
        Ok(next)
    }

    fn raise(counter: &mut u32, kind: EntityKind, highest: u32) {
        if *counter < highest {
            warn!(
                "Restored {} sequence {} is behind identifier {}, advancing",
                kind, counter, highest
            );
            *counter = highest;
        }
    }
}

/// ストア状態
///
/// 各テーブルは挿入順（＝作成順）の `Vec`。トランザクションマネージャは
/// この状態の作業コピーに対してクロージャを実行し、成功時に差し替える。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    pub(super) users: Vec<User>,
    pub(super) clubs: Vec<Club>,
    pub(super) courts: Vec<Court>,
    pub(super) rentals: Vec<Rental>,
    pub(super) sequences: Sequences,
}

impl StoreState {
    /// 空のストア状態を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 全エンティティ数（ログ出力用）
    pub fn total_entities(&self) -> usize {
        self.users.len() + self.clubs.len() + self.courts.len() + self.rentals.len()
    }

    /// 外部から復元した状態を検査し、採番カウンタを補正する
    ///
    /// 各カウンタはテーブル内の最大IDまで引き上げるので、以後の作成で
    /// 既存の識別子が払い出されることはない。
    ///
    /// # Errors
    ///
    /// 識別子が重複している場合、または同じコート・日付に重なる
    /// レンタルがある場合に `Storage` エラーを返す
    pub fn reconcile(&mut self) -> DomainResult<()> {
        let highest_user = highest_id(EntityKind::User, self.users.iter().map(|u| u.uid.0))?;
        let highest_club = highest_id(EntityKind::Club, self.clubs.iter().map(|c| c.cid.0))?;
        let highest_court = highest_id(EntityKind::Court, self.courts.iter().map(|c| c.crid.0))?;
        let highest_rental = highest_id(EntityKind::Rental, self.rentals.iter().map(|r| r.rid.0))?;

        let mut booked: HashMap<(CourtId, NaiveDate), Vec<Rental>> = HashMap::new();
        for rental in &self.rentals {
            let existing = booked.entry((rental.court, rental.date)).or_default();
            if let Some(other) = BookingConflictValidator::find_conflict(existing, &rental.slot) {
                return Err(DomainError::Storage(format!(
                    "rentals {} and {} overlap on court {} on {}",
                    other.rid, rental.rid, rental.court, rental.date
                )));
            }
            existing.push(rental.clone());
        }

        Sequences::raise(&mut self.sequences.user, EntityKind::User, highest_user);
        Sequences::raise(&mut self.sequences.club, EntityKind::Club, highest_club);
        Sequences::raise(&mut self.sequences.court, EntityKind::Court, highest_court);
        Sequences::raise(&mut self.sequences.rental, EntityKind::Rental, highest_rental);
        Ok(())
    }
}

fn highest_id(kind: EntityKind, ids: impl Iterator<Item = u32>) -> DomainResult<u32> {
    let mut seen = HashSet::new();
    let mut highest = 0;
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::Storage(format!(
                "duplicate {} identifier {}",
                kind, id
            )));
        }
        highest = highest.max(id);
    }
    Ok(highest)
}

impl Scope for StoreState {
    fn users(&self) -> &dyn UserRepository {
        self
    }

    fn users_mut(&mut self) -> &mut dyn UserRepository {
        self
    }

    fn clubs(&self) -> &dyn ClubRepository {
        self
    }

    fn clubs_mut(&mut self) -> &mut dyn ClubRepository {
        self
    }

    fn courts(&self) -> &dyn CourtRepository {
        self
    }

    fn courts_mut(&mut self) -> &mut dyn CourtRepository {
        self
    }

    fn rentals(&self) -> &dyn RentalRepository {
        self
    }

    fn rentals_mut(&mut self) -> &mut dyn RentalRepository {
        self
    }
}
