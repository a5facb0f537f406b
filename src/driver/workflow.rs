//! Workflow Orchestration
//!
//! 設定からストアとサービスを組み立て、CLIコマンドを実行する

use anyhow::Result;
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::{InMemoryTransactionManager, JsonSnapshotRepository};
use crate::application::clock::{Clock, SystemClock};
use crate::application::services::{ClubService, CourtService, RentalService, UserService};
use crate::domain::entities::{
    ClubId, CourtId, Email, Name, Page, RentalId, TimeSlot, UserId,
};
use crate::domain::repositories::TransactionManager;

use super::cli::{Command, PageArgs};

/// Court Booking Workflow
pub struct BookingWorkflow<T: TransactionManager> {
    config: Config,
    users: UserService<T>,
    clubs: ClubService<T>,
    courts: CourtService<T>,
    rentals: RentalService<T>,
}

impl BookingWorkflow<InMemoryTransactionManager> {
    /// 設定に従ってストアを開き、ワークフローを作成する
    ///
    /// `snapshot_path` が設定されていればJSONスナップショットから復元し、
    /// 以後のコミットをそこに保存する
    pub async fn open(config: Config) -> Result<Self> {
        let trx = match &config.snapshot_path {
            Some(path) => {
                info!("Using store snapshot {}", path);
                let snapshots = Arc::new(JsonSnapshotRepository::new(path));
                InMemoryTransactionManager::with_snapshots(snapshots).await?
            }
            None => {
                info!("No snapshot configured, using a volatile in-memory store");
                InMemoryTransactionManager::new()
            }
        };

        Ok(Self::new(config, Arc::new(trx), Arc::new(SystemClock)))
    }
}

impl<T: TransactionManager> BookingWorkflow<T> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config, trx: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: UserService::new(trx.clone()),
            clubs: ClubService::new(trx.clone()),
            courts: CourtService::new(trx.clone()),
            rentals: RentalService::new(trx, clock),
            config,
        }
    }

    fn page(&self, args: PageArgs) -> Result<Page> {
        Ok(Page::new(self.config.effective_limit(args.limit), args.skip)?)
    }

    /// コマンドを実行し、結果をJSONで返す
    ///
    /// # Errors
    ///
    /// 入力の検証エラー、またはサービスが返したドメインエラー
    pub async fn execute(&self, command: Command) -> Result<Value> {
        let output = match command {
            Command::CreateUser { name, email } => to_json(
                self.users
                    .create_user(Name::new(name)?, Email::new(email)?)
                    .await?,
            )?,
            Command::GetUser { uid } => to_json(self.users.get_user(UserId(uid)).await?)?,
            Command::Users { page } => {
                to_json(self.users.get_users_paged(self.page(page)?).await?)?
            }
            Command::CreateClub { name, owner } => to_json(
                self.clubs
                    .create_club(Name::new(name)?, UserId(owner))
                    .await?,
            )?,
            Command::GetClub { cid } => to_json(self.clubs.get_club(ClubId(cid)).await?)?,
            Command::Clubs { owner, page } => {
                let page = self.page(page)?;
                match owner.map(UserId) {
                    Some(owner) => {
                        to_json(self.clubs.get_clubs_by_owner_paged(owner, page).await?)?
                    }
                    None => to_json(self.clubs.get_clubs_paged(page).await?)?,
                }
            }
            Command::CreateCourt { name, club } => to_json(
                self.courts
                    .create_court(Name::new(name)?, ClubId(club))
                    .await?,
            )?,
            Command::GetCourt { crid } => {
                to_json(self.courts.get_court_by_id(CourtId(crid)).await?)?
            }
            Command::Courts { club, page } => to_json(
                self.courts
                    .get_courts_paged(ClubId(club), self.page(page)?)
                    .await?,
            )?,
            Command::RentedCourts { user, page } => to_json(
                self.courts
                    .get_courts_user_rentals_paged(UserId(user), self.page(page)?)
                    .await?,
            )?,
            Command::CreateRental {
                court,
                renter,
                date,
                start,
                end,
            } => to_json(
                self.rentals
                    .create_rental(
                        date,
                        TimeSlot::new(start, end)?,
                        UserId(renter),
                        CourtId(court),
                    )
                    .await?,
            )?,
            Command::GetRental { rid } => to_json(self.rentals.get_rental(RentalId(rid)).await?)?,
            Command::Rentals { court, date, page } => to_json(
                self.rentals
                    .get_rentals_paged(CourtId(court), date, self.page(page)?)
                    .await?,
            )?,
            Command::UserRentals { user, page } => to_json(
                self.rentals
                    .get_user_rentals_paged(UserId(user), self.page(page)?)
                    .await?,
            )?,
            Command::AvailableHours { court, date } => {
                to_json(self.rentals.available_slots(CourtId(court), date).await?)?
            }
            Command::RentalTimes { club, date, page } => to_json(
                self.rentals
                    .users_rental_times_on_date(ClubId(club), date, self.page(page)?)
                    .await?,
            )?,
        };

        Ok(output)
    }
}

fn to_json<S: Serialize>(value: S) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
