//! ClubRepository の In-Memory 実装

use crate::domain::entities::{Club, ClubId, Name, Page, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::ClubRepository;

use super::store::{Sequences, StoreState};

impl ClubRepository for StoreState {
    fn create_club(&mut self, name: Name, owner: UserId) -> DomainResult<Club> {
        if !self.users.iter().any(|user| user.uid == owner) {
            return Err(DomainError::missing_reference(EntityKind::User, owner));
        }

        let cid = ClubId(Sequences::next(&mut self.sequences.club, EntityKind::Club)?);
        let club = Club::new(cid, name, owner);
        self.clubs.push(club.clone());
        Ok(club)
    }

    fn find_by_identifier(&self, cid: ClubId) -> Option<Club> {
        self.clubs.iter().find(|club| club.cid == cid).cloned()
    }

    fn find_all(&self, page: Page) -> Vec<Club> {
        page.apply(self.clubs.iter().cloned())
    }

    fn find_by_owner(&self, owner: UserId, page: Page) -> Vec<Club> {
        page.apply(self.clubs.iter().filter(|club| club.owner == owner).cloned())
    }

    fn count(&self) -> usize {
        self.clubs.len()
    }

    fn count_by_owner(&self, owner: UserId) -> usize {
        self.clubs.iter().filter(|club| club.owner == owner).count()
    }

    fn clear(&mut self) {
        self.clubs.clear();
    }
}
