//! Storage-backed membership repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::membership::{Membership, MembershipId, MembershipRepository};
use crate::domain::person::PersonId;
use crate::domain::storage::Storage;
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Storage-backed implementation of MembershipRepository
///
/// The relation rows are keyed by the composed (team, person) pair, so the
/// pair-existence test is a key lookup and the insert is atomic under the
/// storage backend's key constraint.
#[derive(Debug)]
pub struct StorageMembershipRepository {
    storage: Arc<dyn Storage<Membership>>,
}

impl StorageMembershipRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Membership>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl MembershipRepository for StorageMembershipRepository {
    async fn add(&self, membership: Membership) -> Result<Membership, DomainError> {
        self.storage.create(membership).await
    }

    async fn remove(&self, team_id: &TeamId, person_id: &PersonId) -> Result<bool, DomainError> {
        let key = MembershipId::for_pair(team_id, person_id);
        self.storage.delete(&key).await
    }

    async fn exists(&self, team_id: &TeamId, person_id: &PersonId) -> Result<bool, DomainError> {
        let key = MembershipId::for_pair(team_id, person_id);
        self.storage.exists(&key).await
    }

    async fn members_of(&self, team_id: &TeamId) -> Result<Vec<PersonId>, DomainError> {
        let mut rows: Vec<Membership> = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|m| m.team_id() == team_id)
            .collect();

        rows.sort_by_key(|m| m.created_at());
        Ok(rows.into_iter().map(|m| m.person_id().clone()).collect())
    }

    async fn teams_of(&self, person_id: &PersonId) -> Result<Vec<TeamId>, DomainError> {
        let mut rows: Vec<Membership> = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|m| m.person_id() == person_id)
            .collect();

        rows.sort_by_key(|m| m.created_at());
        Ok(rows.into_iter().map(|m| m.team_id().clone()).collect())
    }

    async fn remove_all_for_team(&self, team_id: &TeamId) -> Result<u64, DomainError> {
        let rows = self.storage.list().await?;
        let mut removed = 0;

        for row in rows.iter().filter(|m| m.team_id() == team_id) {
            if self.storage.delete(row.id()).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }

    async fn remove_all_for_person(&self, person_id: &PersonId) -> Result<u64, DomainError> {
        let rows = self.storage.list().await?;
        let mut removed = 0;

        for row in rows.iter().filter(|m| m.person_id() == person_id) {
            if self.storage.delete(row.id()).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repository() -> StorageMembershipRepository {
        StorageMembershipRepository::new(Arc::new(InMemoryStorage::<Membership>::new()))
    }

    fn ids(team: &str, person: &str) -> (TeamId, PersonId) {
        (TeamId::new(team).unwrap(), PersonId::new(person).unwrap())
    }

    #[tokio::test]
    async fn test_add_and_exists() {
        let repo = create_repository();
        let (team_id, person_id) = ids("team-1", "person-1");

        assert!(!repo.exists(&team_id, &person_id).await.unwrap());

        repo.add(Membership::new(team_id.clone(), person_id.clone()))
            .await
            .unwrap();

        assert!(repo.exists(&team_id, &person_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_same_pair_conflicts() {
        let repo = create_repository();
        let (team_id, person_id) = ids("team-1", "person-1");

        repo.add(Membership::new(team_id.clone(), person_id.clone()))
            .await
            .unwrap();

        let result = repo.add(Membership::new(team_id, person_id)).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_remove_reports_absence() {
        let repo = create_repository();
        let (team_id, person_id) = ids("team-1", "person-1");

        assert!(!repo.remove(&team_id, &person_id).await.unwrap());

        repo.add(Membership::new(team_id.clone(), person_id.clone()))
            .await
            .unwrap();

        assert!(repo.remove(&team_id, &person_id).await.unwrap());
        assert!(!repo.exists(&team_id, &person_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_members_of_filters_by_team() {
        let repo = create_repository();
        let (team_a, person_1) = ids("team-a", "person-1");
        let (team_b, person_2) = ids("team-b", "person-2");

        repo.add(Membership::new(team_a.clone(), person_1.clone()))
            .await
            .unwrap();
        repo.add(Membership::new(team_b, person_2)).await.unwrap();

        let members = repo.members_of(&team_a).await.unwrap();
        assert_eq!(members, vec![person_1]);
    }

    #[tokio::test]
    async fn test_teams_of() {
        let repo = create_repository();
        let (team_a, person_id) = ids("team-a", "person-1");
        let (team_b, _) = ids("team-b", "person-1");

        repo.add(Membership::new(team_a.clone(), person_id.clone()))
            .await
            .unwrap();
        repo.add(Membership::new(team_b.clone(), person_id.clone()))
            .await
            .unwrap();

        let teams = repo.teams_of(&person_id).await.unwrap();
        assert_eq!(teams.len(), 2);
        assert!(teams.contains(&team_a));
        assert!(teams.contains(&team_b));
    }

    #[tokio::test]
    async fn test_remove_all_for_team() {
        let repo = create_repository();
        let (team_id, person_1) = ids("team-1", "person-1");
        let person_2 = PersonId::new("person-2").unwrap();

        repo.add(Membership::new(team_id.clone(), person_1)).await.unwrap();
        repo.add(Membership::new(team_id.clone(), person_2)).await.unwrap();

        assert_eq!(repo.remove_all_for_team(&team_id).await.unwrap(), 2);
        assert!(repo.members_of(&team_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_all_for_person() {
        let repo = create_repository();
        let (team_a, person_id) = ids("team-a", "person-1");
        let (team_b, _) = ids("team-b", "person-1");

        repo.add(Membership::new(team_a, person_id.clone())).await.unwrap();
        repo.add(Membership::new(team_b, person_id.clone())).await.unwrap();

        assert_eq!(repo.remove_all_for_person(&person_id).await.unwrap(), 2);
        assert!(repo.teams_of(&person_id).await.unwrap().is_empty());
    }
}
