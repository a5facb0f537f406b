//! RentalRepository の In-Memory 実装

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::entities::{ClubId, CourtId, Page, Rental, RentalId, TimeSlot, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::RentalRepository;

use super::store::{Sequences, StoreState};

impl RentalRepository for StoreState {
    fn create_rental(
        &mut self,
        date: NaiveDate,
        slot: TimeSlot,
        renter: UserId,
        court: CourtId,
    ) -> DomainResult<Rental> {
        if !self.courts.iter().any(|c| c.crid == court) {
            return Err(DomainError::missing_reference(EntityKind::Court, court));
        }
        if !self.users.iter().any(|u| u.uid == renter) {
            return Err(DomainError::missing_reference(EntityKind::User, renter));
        }

        let rid = RentalId(Sequences::next(&mut self.sequences.rental, EntityKind::Rental)?);
        let rental = Rental::new(rid, date, slot, renter, court);
        self.rentals.push(rental.clone());
        Ok(rental)
    }

    fn find_by_identifier(&self, rid: RentalId) -> Option<Rental> {
        self.rentals.iter().find(|rental| rental.rid == rid).cloned()
    }

    fn find_by_court_and_date(&self, court: CourtId, date: NaiveDate) -> Vec<Rental> {
        self.rentals
            .iter()
            .filter(|rental| rental.is_on(court, date))
            .cloned()
            .collect()
    }

    fn find_by_court(&self, court: CourtId, date: Option<NaiveDate>, page: Page) -> Vec<Rental> {
        page.apply(
            self.rentals
                .iter()
                .filter(|rental| rental.court == court)
                .filter(|rental| date.map_or(true, |d| rental.date == d))
                .cloned(),
        )
    }

    fn count_by_court(&self, court: CourtId, date: Option<NaiveDate>) -> usize {
        self.rentals
            .iter()
            .filter(|rental| rental.court == court)
            .filter(|rental| date.map_or(true, |d| rental.date == d))
            .count()
    }

    fn find_by_club_and_date(&self, club: ClubId, date: NaiveDate) -> Vec<Rental> {
        let courts: HashSet<CourtId> = self
            .courts
            .iter()
            .filter(|court| court.club == club)
            .map(|court| court.crid)
            .collect();

        self.rentals
            .iter()
            .filter(|rental| rental.date == date && courts.contains(&rental.court))
            .cloned()
            .collect()
    }

    fn find_by_renter(&self, renter: UserId, page: Page) -> Vec<Rental> {
        page.apply(
            self.rentals
                .iter()
                .filter(|rental| rental.renter == renter)
                .cloned(),
        )
    }

    fn count_by_renter(&self, renter: UserId) -> usize {
        self.rentals
            .iter()
            .filter(|rental| rental.renter == renter)
            .count()
    }

    fn clear(&mut self) {
        self.rentals.clear();
    }
}
