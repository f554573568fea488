//! Membership domain - the many-to-many relation between teams and persons
//!
//! Memberships are relation rows keyed by the (team, person) pair. Member
//! lookups are always id-based key queries against this relation store,
//! never equality scans over loaded person records.

mod entity;
mod repository;

use thiserror::Error;

pub use entity::{Membership, MembershipId};
pub use repository::MembershipRepository;

#[cfg(test)]
pub use repository::mock;

/// Errors raised by membership add/remove operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MembershipError {
    #[error("Team '{0}' not found")]
    TeamNotFound(String),

    #[error("Person '{0}' not found")]
    PersonNotFound(String),

    #[error("Person '{person_id}' is already a member of team '{team_id}'")]
    AlreadyMember { team_id: String, person_id: String },

    #[error("Person '{person_id}' is not a member of team '{team_id}'")]
    NotAMember { team_id: String, person_id: String },
}
