//! Booking Integration Tests
//!
//! サービス層を通した予約の重複防止・原子性・ページネーションの検証

use chrono::NaiveDate;
use std::sync::Arc;

use courtbook::adapter::repositories::InMemoryTransactionManager;
use courtbook::application::clock::FixedClock;
use courtbook::application::services::{ClubService, CourtService, RentalService, UserService};
use courtbook::domain::entities::{ClubId, CourtId, Email, Name, Page, TimeSlot, UserId};
use courtbook::domain::error::{DomainError, EntityKind};
use courtbook::domain::repositories::{Scope, TransactionManager};

type Trx = InMemoryTransactionManager;

/// テスト用のサービス一式
struct App {
    trx: Arc<Trx>,
    users: UserService<Trx>,
    clubs: ClubService<Trx>,
    courts: CourtService<Trx>,
    rentals: RentalService<Trx>,
}

impl App {
    fn new() -> Self {
        let trx = Arc::new(InMemoryTransactionManager::new());
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        Self {
            users: UserService::new(trx.clone()),
            clubs: ClubService::new(trx.clone()),
            courts: CourtService::new(trx.clone()),
            rentals: RentalService::new(trx.clone(), Arc::new(FixedClock(today))),
            trx,
        }
    }

    async fn user(&self, name: &str) -> UserId {
        self.users
            .create_user(
                Name::new(name).unwrap(),
                Email::new(format!("{}@email.com", name)).unwrap(),
            )
            .await
            .unwrap()
            .uid
    }

    async fn club(&self, owner: UserId) -> ClubId {
        self.clubs
            .create_club(Name::new("Sports Club").unwrap(), owner)
            .await
            .unwrap()
            .cid
    }

    async fn court(&self, club: ClubId, name: &str) -> CourtId {
        self.courts
            .create_court(Name::new(name).unwrap(), club)
            .await
            .unwrap()
            .crid
    }
}

fn booking_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 8).unwrap()
}

fn slot(start: u8, end: u8) -> TimeSlot {
    TimeSlot::new(start, end).unwrap()
}

#[tokio::test]
async fn test_same_slot_twice_is_rental_conflict() {
    let app = App::new();
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court = app.court(club, "Court A").await;

    let first = app
        .rentals
        .create_rental(booking_date(), slot(17, 18), user, court)
        .await;
    let second = app
        .rentals
        .create_rental(booking_date(), slot(17, 18), user, court)
        .await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(DomainError::RentalConflict { .. })));
}

#[tokio::test]
async fn test_adjacent_slots_are_not_conflicts() {
    let app = App::new();
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court = app.court(club, "Court A").await;

    let first = app
        .rentals
        .create_rental(booking_date(), slot(17, 18), user, court)
        .await;
    let second = app
        .rentals
        .create_rental(booking_date(), slot(18, 19), user, court)
        .await;

    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[tokio::test]
async fn test_rental_on_missing_court_is_reference_not_found() {
    let app = App::new();
    let user = app.user("owner").await;

    let result = app
        .rentals
        .create_rental(booking_date(), slot(17, 18), user, CourtId(12345))
        .await;

    assert_eq!(
        result,
        Err(DomainError::ReferenceNotFound {
            kind: EntityKind::Court,
            id: 12345
        })
    );
}

#[tokio::test]
async fn test_courts_rented_by_user_counted_once() {
    let app = App::new();
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court_a = app.court(club, "Court A").await;
    let court_b = app.court(club, "Court B").await;

    app.rentals
        .create_rental(booking_date(), slot(10, 13), user, court_a)
        .await
        .unwrap();
    app.rentals
        .create_rental(booking_date(), slot(14, 16), user, court_b)
        .await
        .unwrap();

    let count = app
        .courts
        .number_of_user_courts_that_have_rentals_of_user(user)
        .await
        .unwrap();
    assert_eq!(count.total_elements, 2);

    app.rentals
        .create_rental(booking_date(), slot(16, 17), user, court_a)
        .await
        .unwrap();
    app.rentals
        .create_rental(booking_date(), slot(20, 21), user, court_a)
        .await
        .unwrap();

    let count = app
        .courts
        .number_of_user_courts_that_have_rentals_of_user(user)
        .await
        .unwrap();
    assert_eq!(count.total_elements, 2);
}

#[tokio::test]
async fn test_failed_booking_leaves_no_trace() {
    let app = App::new();
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court = app.court(club, "Court A").await;
    app.rentals
        .create_rental(booking_date(), slot(9, 12), user, court)
        .await
        .unwrap();
    let before = app.trx.snapshot().await;

    let result = app
        .rentals
        .create_rental(booking_date(), slot(11, 13), user, court)
        .await;

    assert!(matches!(result, Err(DomainError::RentalConflict { .. })));
    assert_eq!(app.trx.snapshot().await, before);
    assert_eq!(
        app.rentals
            .number_of_rentals(court, Some(booking_date()))
            .await
            .unwrap()
            .total_elements,
        1
    );
    assert_eq!(
        app.rentals
            .get_user_rentals(user, Page::all())
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_multi_step_transaction_is_atomic() {
    let app = App::new();
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court = app.court(club, "Court A").await;
    app.rentals
        .create_rental(booking_date(), slot(17, 18), user, court)
        .await
        .unwrap();

    // 新しいコートを作ってから、失敗する予約をする
    let result = app
        .trx
        .run(move |scope: &mut dyn Scope| {
            scope
                .courts_mut()
                .create_court(Name::new("Court B")?, club)?;
            scope
                .rentals_mut()
                .create_rental(booking_date(), slot(8, 9), UserId(999), court)
        })
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ReferenceNotFound {
            kind: EntityKind::User,
            ..
        })
    ));
    assert_eq!(app.courts.number_of_courts(club).await.unwrap().total_elements, 1);
}

#[tokio::test]
async fn test_pagination_partitions_full_listing() {
    let app = App::new();
    let user = app.user("owner").await;
    let club = app.club(user).await;
    for i in 0..7 {
        app.court(club, &format!("Court {}", i)).await;
    }

    let full = app.courts.get_courts(club, Page::all()).await.unwrap();
    let total = app.courts.number_of_courts(club).await.unwrap().total_elements;

    let mut page = Page::new(3, 0).unwrap();
    let mut collected = Vec::new();
    loop {
        let chunk = app.courts.get_courts(club, page).await.unwrap();
        if chunk.is_empty() {
            break;
        }
        assert!(chunk.len() <= page.limit());
        collected.extend(chunk);
        page = page.next();
    }

    assert_eq!(total, 7);
    assert_eq!(collected, full);
    assert_eq!(collected.len(), total);
}

#[tokio::test]
async fn test_find_by_identifier_is_idempotent() {
    let app = App::new();
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court = app.court(club, "Court A").await;

    let first = app.courts.get_court_by_id(court).await.unwrap();
    let second = app.courts.get_court_by_id(court).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bookings_admit_exactly_one() {
    let app = Arc::new(App::new());
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court = app.court(club, "Court A").await;

    let mut handles = Vec::new();
    for _ in 0..32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            app.rentals
                .create_rental(booking_date(), slot(17, 19), user, court)
                .await
        }));
    }

    let mut admitted = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => admitted += 1,
            Err(DomainError::RentalConflict { .. }) => conflicts += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(admitted, 1);
    assert_eq!(conflicts, 31);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_overlapping_bookings_never_overlap() {
    let app = Arc::new(App::new());
    let user = app.user("owner").await;
    let club = app.club(user).await;
    let court = app.court(club, "Court A").await;

    let mut handles = Vec::new();
    for start in 0..22u8 {
        for len in 1..=3u8 {
            let app = app.clone();
            handles.push(tokio::spawn(async move {
                let end = (start + len).min(24);
                app.rentals
                    .create_rental(booking_date(), slot(start, end), user, court)
                    .await
            }));
        }
    }
    for handle in handles {
        let _ = handle.await.unwrap();
    }

    let committed = app
        .rentals
        .get_rentals(court, Some(booking_date()), Page::all())
        .await
        .unwrap();
    assert!(!committed.is_empty());
    for (i, a) in committed.iter().enumerate() {
        for b in committed.iter().skip(i + 1) {
            assert!(
                !a.slot.overlaps(&b.slot),
                "{} overlaps {}",
                a.slot,
                b.slot
            );
        }
    }
}

mod no_overlap_property {
    use super::*;
    use proptest::prelude::*;

    fn slots() -> impl Strategy<Value = Vec<(u8, u8)>> {
        prop::collection::vec((0u8..24, 1u8..6), 1..40)
            .prop_map(|raw| {
                raw.into_iter()
                    .map(|(start, len)| (start, (start + len).min(24)))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn committed_rentals_never_overlap(requests in slots()) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            runtime.block_on(async {
                let app = App::new();
                let user = app.user("owner").await;
                let club = app.club(user).await;
                let court = app.court(club, "Court A").await;

                for (start, end) in requests {
                    let candidate = slot(start, end);
                    let before = app
                        .rentals
                        .get_rentals(court, Some(booking_date()), Page::all())
                        .await
                        .unwrap();
                    let expected_conflict = before.iter().any(|r| r.slot.overlaps(&candidate));

                    let result = app
                        .rentals
                        .create_rental(booking_date(), candidate, user, court)
                        .await;

                    prop_assert_eq!(
                        expected_conflict,
                        matches!(result, Err(DomainError::RentalConflict { .. }))
                    );
                }

                let committed = app
                    .rentals
                    .get_rentals(court, Some(booking_date()), Page::all())
                    .await
                    .unwrap();
                for (i, a) in committed.iter().enumerate() {
                    for b in committed.iter().skip(i + 1) {
                        prop_assert!(!a.slot.overlaps(&b.slot));
                    }
                }
                Ok(())
            })?;
        }
    }
}
