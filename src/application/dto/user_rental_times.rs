//! # User Rental Times DTO
//!
//! ある日付にユーザーが何回予約しているか

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// ユーザーごとの予約回数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRentalTimes {
    pub renter: User,
    pub times: usize,
}

impl UserRentalTimes {
    pub fn new(renter: User, times: usize) -> Self {
        Self { renter, times }
    }
}
