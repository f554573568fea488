//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Create a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Update an existing team
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// Delete a team by ID
    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError>;

    /// List all teams
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError>;

    /// Find the team holding the given name, if any
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::mock::MockTeamRepository;
    use super::*;

    fn team(id: &str, name: &str) -> Team {
        Team::new(TeamId::new(id).unwrap(), name).unwrap()
    }

    #[tokio::test]
    async fn test_mock_create_and_get() {
        let repo = MockTeamRepository::new();
        let id = TeamId::new("test-team").unwrap();

        repo.create(team("test-team", "Test Team")).await.unwrap();

        let fetched = repo.get(&id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().name(), "Test Team");
    }

    #[tokio::test]
    async fn test_mock_create_duplicate() {
        let repo = MockTeamRepository::new();

        repo.create(team("test-team", "Test Team 1")).await.unwrap();
        let result = repo.create(team("test-team", "Test Team 2")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_update() {
        let repo = MockTeamRepository::new();
        let id = TeamId::new("test-team").unwrap();

        repo.create(team("test-team", "Test Team")).await.unwrap();

        let mut updated_team = repo.get(&id).await.unwrap().unwrap();
        updated_team.set_name("Updated Team").unwrap();
        repo.update(updated_team).await.unwrap();

        let fetched = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(fetched.name(), "Updated Team");
    }

    #[tokio::test]
    async fn test_mock_delete() {
        let repo = MockTeamRepository::new();
        let id = TeamId::new("test-team").unwrap();

        repo.create(team("test-team", "Test Team")).await.unwrap();
        assert!(repo.exists(&id).await.unwrap());

        let deleted = repo.delete(&id).await.unwrap();
        assert!(deleted);
        assert!(!repo.exists(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_list_sorted_by_name() {
        let repo = MockTeamRepository::new();

        repo.create(team("team-b", "Bravo")).await.unwrap();
        repo.create(team("team-a", "Alpha")).await.unwrap();

        let teams = repo.list().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name(), "Alpha");
    }

    #[tokio::test]
    async fn test_mock_find_by_name() {
        let repo = MockTeamRepository::new();

        repo.create(team("team-a", "Alpha")).await.unwrap();

        let found = repo.find_by_name("Alpha").await.unwrap();
        assert_eq!(found.unwrap().id().as_str(), "team-a");

        assert!(repo.find_by_name("Bravo").await.unwrap().is_none());
    }
}
