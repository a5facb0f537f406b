//! # Club Entity
//!
//! クラブのドメインエンティティ

use serde::{Deserialize, Serialize};

use super::ids::{ClubId, UserId};
use super::value_objects::Name;

/// クラブ
///
/// オーナーは識別子で参照する（オブジェクトは保持しない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub cid: ClubId,
    pub name: Name,
    pub owner: UserId,
}

impl Club {
    pub fn new(cid: ClubId, name: Name, owner: UserId) -> Self {
        Self { cid, name, owner }
    }
}
