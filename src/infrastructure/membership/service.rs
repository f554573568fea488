//! Membership service - add/remove of persons to/from teams

use std::sync::Arc;

use tracing::info;

use crate::domain::membership::{Membership, MembershipError, MembershipRepository};
use crate::domain::person::{Person, PersonId, PersonRepository};
use crate::domain::team::{TeamId, TeamRepository};
use crate::domain::DomainError;

/// Membership service mediating the team-person relation
///
/// Member tests always go through the relation store keyed by the id pair.
/// Loaded person records are never compared for equality to decide
/// membership, so two persons with identical attributes but different ids
/// stay distinct.
#[derive(Debug)]
pub struct MembershipService {
    memberships: Arc<dyn MembershipRepository>,
    persons: Arc<dyn PersonRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl MembershipService {
    /// Create a new membership service
    pub fn new(
        memberships: Arc<dyn MembershipRepository>,
        persons: Arc<dyn PersonRepository>,
        teams: Arc<dyn TeamRepository>,
    ) -> Self {
        Self {
            memberships,
            persons,
            teams,
        }
    }

    /// Add a person to a team's member set
    pub async fn add_member(&self, team_id: &str, person_id: &str) -> Result<(), DomainError> {
        info!(team_id = %team_id, person_id = %person_id, "Adding team member");

        let (team_id, person_id) = self.resolve_pair(team_id, person_id).await?;

        if self.memberships.exists(&team_id, &person_id).await? {
            return Err(MembershipError::AlreadyMember {
                team_id: team_id.as_str().to_string(),
                person_id: person_id.as_str().to_string(),
            }
            .into());
        }

        let row = Membership::new(team_id.clone(), person_id.clone());

        // The insert is keyed by the pair. When a concurrent add wins the
        // race after our existence check, the conflict still reports the
        // person as already a member rather than inserting twice.
        match self.memberships.add(row).await {
            Ok(_) => Ok(()),
            Err(DomainError::Conflict { .. }) => Err(MembershipError::AlreadyMember {
                team_id: team_id.as_str().to_string(),
                person_id: person_id.as_str().to_string(),
            }
            .into()),
            Err(e) => Err(e),
        }
    }

    /// Remove a person from a team's member set
    pub async fn remove_member(&self, team_id: &str, person_id: &str) -> Result<(), DomainError> {
        info!(team_id = %team_id, person_id = %person_id, "Removing team member");

        let (team_id, person_id) = self.resolve_pair(team_id, person_id).await?;

        // The delete doubles as the membership test: concurrent removes
        // cannot both observe an affected row.
        let removed = self.memberships.remove(&team_id, &person_id).await?;

        if !removed {
            return Err(MembershipError::NotAMember {
                team_id: team_id.as_str().to_string(),
                person_id: person_id.as_str().to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Id-based membership test
    pub async fn is_member(&self, team_id: &str, person_id: &str) -> Result<bool, DomainError> {
        let (team_id, person_id) = self.parse_pair(team_id, person_id)?;
        self.memberships.exists(&team_id, &person_id).await
    }

    /// Resolve a team's member set to person records
    pub async fn members(&self, team_id: &str) -> Result<Vec<Person>, DomainError> {
        let team_id =
            TeamId::new(team_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if !self.teams.exists(&team_id).await? {
            return Err(MembershipError::TeamNotFound(team_id.as_str().to_string()).into());
        }

        let member_ids = self.memberships.members_of(&team_id).await?;
        let mut members = Vec::with_capacity(member_ids.len());

        for person_id in &member_ids {
            if let Some(person) = self.persons.get(person_id).await? {
                members.push(person);
            }
        }

        Ok(members)
    }

    /// Parse both ids without hitting the repositories
    fn parse_pair(
        &self,
        team_id: &str,
        person_id: &str,
    ) -> Result<(TeamId, PersonId), DomainError> {
        let team_id = TeamId::new(team_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        let person_id =
            PersonId::new(person_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        Ok((team_id, person_id))
    }

    /// Parse both ids and require that both entities exist
    async fn resolve_pair(
        &self,
        team_id: &str,
        person_id: &str,
    ) -> Result<(TeamId, PersonId), DomainError> {
        let (team_id, person_id) = self.parse_pair(team_id, person_id)?;

        if !self.teams.exists(&team_id).await? {
            return Err(MembershipError::TeamNotFound(team_id.as_str().to_string()).into());
        }

        if !self.persons.exists(&person_id).await? {
            return Err(MembershipError::PersonNotFound(person_id.as_str().to_string()).into());
        }

        Ok((team_id, person_id))
    }
}
