//! CLI Argument Parsing
//!
//! CLIの引数解析

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// コートレンタルを管理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "courtbook")]
#[command(about = "Manage sports-club court rentals without overlapping bookings", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./.courtbook/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

/// ページ指定の引数
#[derive(clap::Args, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageArgs {
    /// Maximum number of results (defaults to the configured page limit)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Number of results to skip
    #[arg(long, default_value_t = 0)]
    pub skip: usize,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new user
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Show a user
    GetUser { uid: u32 },
    /// List users
    Users {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a club owned by an existing user
    CreateClub {
        #[arg(long)]
        name: String,
        #[arg(long)]
        owner: u32,
    },
    /// Show a club
    GetClub { cid: u32 },
    /// List clubs, optionally only those of one owner
    Clubs {
        #[arg(long)]
        owner: Option<u32>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a court in an existing club
    CreateCourt {
        #[arg(long)]
        name: String,
        #[arg(long)]
        club: u32,
    },
    /// Show a court
    GetCourt { crid: u32 },
    /// List the courts of a club
    Courts {
        #[arg(long)]
        club: u32,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List the distinct courts a user has rented
    RentedCourts {
        #[arg(long)]
        user: u32,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Book a court for the half-open hour range [start, end)
    CreateRental {
        #[arg(long)]
        court: u32,
        #[arg(long)]
        renter: u32,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        start: u8,
        #[arg(long)]
        end: u8,
    },
    /// Show a rental
    GetRental { rid: u32 },
    /// List the rentals of a court, optionally on one date
    Rentals {
        #[arg(long)]
        court: u32,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List the rentals of a user
    UserRentals {
        #[arg(long)]
        user: u32,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show the free hour ranges of a court on a date
    AvailableHours {
        #[arg(long)]
        court: u32,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Count rentals per user across a club's courts on a date
    RentalTimes {
        #[arg(long)]
        club: u32,
        #[arg(long)]
        date: NaiveDate,
        #[command(flatten)]
        page: PageArgs,
    },
}
