//! # Court Entity
//!
//! コートのドメインエンティティ

use serde::{Deserialize, Serialize};

use super::ids::{ClubId, CourtId};
use super::value_objects::Name;

/// コート
///
/// 所属クラブとは多対一。クラブは識別子で参照する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub crid: CourtId,
    pub name: Name,
    pub club: ClubId,
}

impl Court {
    pub fn new(crid: CourtId, name: Name, club: ClubId) -> Self {
        Self { crid, name, club }
    }
}
