//! Membership repository trait

use async_trait::async_trait;

use super::entity::Membership;
use crate::domain::person::PersonId;
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Repository for the team-person relation rows
#[async_trait]
pub trait MembershipRepository: Send + Sync + std::fmt::Debug {
    /// Insert a relation row. Fails with a conflict when the pair exists;
    /// the insert is atomic, so concurrent adds for the same pair cannot
    /// both succeed.
    async fn add(&self, membership: Membership) -> Result<Membership, DomainError>;

    /// Delete the relation row for the pair, returns true if a row was removed
    async fn remove(&self, team_id: &TeamId, person_id: &PersonId) -> Result<bool, DomainError>;

    /// Id-based membership test for the pair
    async fn exists(&self, team_id: &TeamId, person_id: &PersonId) -> Result<bool, DomainError>;

    /// Person ids belonging to the team, ordered by join time
    async fn members_of(&self, team_id: &TeamId) -> Result<Vec<PersonId>, DomainError>;

    /// Team ids the person belongs to
    async fn teams_of(&self, person_id: &PersonId) -> Result<Vec<TeamId>, DomainError>;

    /// Drop every relation row for the team, returns the number removed
    async fn remove_all_for_team(&self, team_id: &TeamId) -> Result<u64, DomainError>;

    /// Drop every relation row for the person, returns the number removed
    async fn remove_all_for_person(&self, person_id: &PersonId) -> Result<u64, DomainError>;
}
