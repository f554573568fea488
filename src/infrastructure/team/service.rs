//! Team service for team management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::membership::MembershipRepository;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Request for creating a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request for updating a team
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Team service for managing teams
///
/// Deleting a team discards its membership links without touching the
/// person records behind them.
#[derive(Debug)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl TeamService {
    /// Create a new team service
    pub fn new(
        repository: Arc<dyn TeamRepository>,
        memberships: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            repository,
            memberships,
        }
    }

    /// Create a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        info!(name = %request.name, "Creating team");

        self.ensure_name_free(&request.name, None).await?;

        let mut team = Team::new(TeamId::generate(), &request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(desc) = request.description {
            team.set_description(Some(desc));
        }

        self.repository.create(team).await
    }

    /// Get a team by ID
    pub async fn get(&self, id: &str) -> Result<Option<Team>, DomainError> {
        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get(&team_id).await
    }

    /// List all teams
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        self.repository.list().await
    }

    /// Update a team
    pub async fn update(&self, id: &str, request: UpdateTeamRequest) -> Result<Team, DomainError> {
        info!(id = %id, "Updating team");

        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut team = self
            .repository
            .get(&team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;

        if let Some(name) = request.name {
            self.ensure_name_free(&name, Some(&team_id)).await?;
            team.set_name(&name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(desc) = request.description {
            team.set_description(Some(desc));
        }

        self.repository.update(team).await
    }

    /// Delete a team, discarding its membership links
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        info!(id = %id, "Deleting team");

        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if !self.repository.exists(&team_id).await? {
            return Ok(false);
        }

        let removed = self.memberships.remove_all_for_team(&team_id).await?;

        if removed > 0 {
            debug!(id = %id, links = removed, "Discarded membership links");
        }

        self.repository.delete(&team_id).await
    }

    /// Check if a team exists
    pub async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let team_id = TeamId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.exists(&team_id).await
    }

    /// Fail with a conflict when another team already holds the name
    async fn ensure_name_free(
        &self,
        name: &str,
        exclude: Option<&TeamId>,
    ) -> Result<(), DomainError> {
        if let Some(existing) = self.repository.find_by_name(name).await? {
            if exclude != Some(existing.id()) {
                return Err(DomainError::conflict(format!(
                    "Team name '{}' is already in use",
                    name
                )));
            }
        }

        Ok(())
    }
}
