//! UserRepository の In-Memory 実装

use crate::domain::entities::{Email, Name, Page, User, UserId};
use crate::domain::error::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::UserRepository;

use super::store::{Sequences, StoreState};

impl UserRepository for StoreState {
    fn create_user(&mut self, name: Name, email: Email) -> DomainResult<User> {
        if self.users.iter().any(|user| user.email == email) {
            return Err(DomainError::validation(
                "email",
                format!("'{}' is already registered", email),
            ));
        }

        let uid = UserId(Sequences::next(&mut self.sequences.user, EntityKind::User)?);
        let user = User::new(uid, name, email);
        self.users.push(user.clone());
        Ok(user)
    }

    fn find_by_identifier(&self, uid: UserId) -> Option<User> {
        self.users.iter().find(|user| user.uid == uid).cloned()
    }

    fn find_by_email(&self, email: &Email) -> Option<User> {
        self.users.iter().find(|user| &user.email == email).cloned()
    }

    fn find_all(&self, page: Page) -> Vec<User> {
        page.apply(self.users.iter().cloned())
    }

    fn count(&self) -> usize {
        self.users.len()
    }

    fn clear(&mut self) {
        self.users.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(state: &mut StoreState, name: &str, email: &str) -> DomainResult<User> {
        state.create_user(Name::new(name).unwrap(), Email::new(email).unwrap())
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut state = StoreState::new();

        let first = create(&mut state, "alice", "alice@email.com").unwrap();
        let second = create(&mut state, "bob", "bob@email.com").unwrap();

        assert_eq!(first.uid, UserId(1));
        assert_eq!(second.uid, UserId(2));
    }

    #[test]
    fn test_create_rejects_duplicate_email() {
        let mut state = StoreState::new();
        create(&mut state, "alice", "alice@email.com").unwrap();

        let result = create(&mut state, "other", "ALICE@email.com");

        assert!(matches!(
            result,
            Err(DomainError::Validation { ref field, .. }) if field == "email"
        ));
        assert_eq!(UserRepository::count(&state), 1);
    }

    #[test]
    fn test_find_by_email() {
        let mut state = StoreState::new();
        let alice = create(&mut state, "alice", "alice@email.com").unwrap();

        let found = state.find_by_email(&Email::new("alice@email.com").unwrap());

        assert_eq!(found, Some(alice));
    }

    #[test]
    fn test_clear_does_not_reuse_ids() {
        let mut state = StoreState::new();
        create(&mut state, "alice", "alice@email.com").unwrap();

        UserRepository::clear(&mut state);
        let again = create(&mut state, "alice", "alice@email.com").unwrap();

        assert_eq!(UserRepository::count(&state), 1);
        assert_eq!(again.uid, UserId(2));
        assert!(UserRepository::find_by_identifier(&state, UserId(1)).is_none());
    }
}
