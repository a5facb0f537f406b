//! CourtRepository の In-Memory 実装

use std::collections::HashSet;

use crate::domain::entities::{ClubId, Court, CourtId, Name, Page, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::CourtRepository;

use super::store::{Sequences, StoreState};

impl StoreState {
    /// ユーザーが借りたコートをコートの作成順で列挙する（重複なし）
    fn courts_rented_by(&self, renter: UserId) -> impl Iterator<Item = &Court> {
        let rented: HashSet<CourtId> = self
            .rentals
            .iter()
            .filter(|rental| rental.renter == renter)
            .map(|rental| rental.court)
            .collect();

        self.courts
            .iter()
            .filter(move |court| rented.contains(&court.crid))
    }
}

impl CourtRepository for StoreState {
    fn create_court(&mut self, name: Name, club: ClubId) -> DomainResult<Court> {
        if !self.clubs.iter().any(|c| c.cid == club) {
            return Err(DomainError::missing_reference(EntityKind::Club, club));
        }

        let crid = CourtId(Sequences::next(&mut self.sequences.court, EntityKind::Court)?);
        let court = Court::new(crid, name, club);
        self.courts.push(court.clone());
        Ok(court)
    }

    fn find_by_identifier(&self, crid: CourtId) -> Option<Court> {
        self.courts.iter().find(|court| court.crid == crid).cloned()
    }

    fn find_by_club_identifier(&self, club: ClubId, page: Page) -> Vec<Court> {
        page.apply(self.courts.iter().filter(|court| court.club == club).cloned())
    }

    fn count(&self, club: ClubId) -> usize {
        self.courts.iter().filter(|court| court.club == club).count()
    }

    fn find_rented_by(&self, renter: UserId, page: Page) -> Vec<Court> {
        page.apply(self.courts_rented_by(renter).cloned())
    }

    fn count_rented_by(&self, renter: UserId) -> usize {
        self.courts_rented_by(renter).count()
    }

    fn clear(&mut self) {
        self.courts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Email, TimeSlot};
    use crate::domain::repositories::{ClubRepository, RentalRepository, UserRepository};
    use chrono::NaiveDate;

    fn setup() -> (StoreState, UserId, ClubId) {
        let mut state = StoreState::new();
        let owner = state
            .create_user(Name::new("owner").unwrap(), Email::new("owner@email.com").unwrap())
            .unwrap();
        let club = state
            .create_club(Name::new("Sports Club").unwrap(), owner.uid)
            .unwrap();
        (state, owner.uid, club.cid)
    }

    fn court(state: &mut StoreState, club: ClubId, name: &str) -> Court {
        state.create_court(Name::new(name).unwrap(), club).unwrap()
    }

    #[test]
    fn test_create_requires_club() {
        let (mut state, _, _) = setup();

        let result = state.create_court(Name::new("Court A").unwrap(), ClubId(42));

        assert_eq!(
            result,
            Err(DomainError::ReferenceNotFound {
                kind: EntityKind::Club,
                id: 42
            })
        );
    }

    #[test]
    fn test_find_by_club_identifier_pagination() {
        let (mut state, _, club) = setup();
        for name in ["A", "B", "C", "D", "E"] {
            court(&mut state, club, name);
        }

        let first = state.find_by_club_identifier(club, Page::new(2, 0).unwrap());
        let second = state.find_by_club_identifier(club, Page::new(2, 2).unwrap());
        let third = state.find_by_club_identifier(club, Page::new(2, 4).unwrap());

        let names: Vec<_> = first
            .iter()
            .chain(second.iter())
            .chain(third.iter())
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(CourtRepository::count(&state, club), 5);
    }

    #[test]
    fn test_rented_by_counts_each_court_once() {
        let (mut state, owner, club) = setup();
        let a = court(&mut state, club, "A");
        let b = court(&mut state, club, "B");
        court(&mut state, club, "C");
        let date = NaiveDate::from_ymd_opt(2025, 5, 8).unwrap();

        for (crid, start) in [(b.crid, 8), (a.crid, 9), (b.crid, 10), (b.crid, 11)] {
            state
                .create_rental(date, TimeSlot::new(start, start + 1).unwrap(), owner, crid)
                .unwrap();
        }

        assert_eq!(state.count_rented_by(owner), 2);
        let rented = state.find_rented_by(owner, Page::all());
        assert_eq!(rented, vec![a, b]);
        assert_eq!(state.count_rented_by(UserId(77)), 0);
    }
}
