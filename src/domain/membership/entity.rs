//! Membership relation entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::person::PersonId;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::team::TeamId;

/// Membership identifier composed from the pair of entity ids.
///
/// The `<team_id>:<person_id>` form makes pair uniqueness a single-key
/// constraint: the storage layer rejects a second insert for the same pair
/// atomically, which is what serializes concurrent double-adds. Entity ids
/// never contain ':' so the composition is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MembershipId(String);

impl MembershipId {
    /// Compose the key for a (team, person) pair
    pub fn for_pair(team_id: &TeamId, person_id: &PersonId) -> Self {
        Self(format!("{}:{}", team_id.as_str(), person_id.as_str()))
    }
}

impl std::fmt::Display for MembershipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for MembershipId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// One row of the team-person relation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Composed pair key
    id: MembershipId,
    /// Owning team
    team_id: TeamId,
    /// Member person
    person_id: PersonId,
    /// When the person joined the team
    created_at: DateTime<Utc>,
}

impl Membership {
    /// Create a relation row for a (team, person) pair
    pub fn new(team_id: TeamId, person_id: PersonId) -> Self {
        Self {
            id: MembershipId::for_pair(&team_id, &person_id),
            team_id,
            person_id,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &MembershipId {
        &self.id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn person_id(&self) -> &PersonId {
        &self.person_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl StorageEntity for Membership {
    type Key = MembershipId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
