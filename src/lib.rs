//! WHT Teams API
//!
//! A small CRUD backend managing persons, teams and team membership:
//! - Person and team management with field-level validation
//! - Many-to-many membership mediated by a dedicated relation store
//! - In-memory or PostgreSQL persistence selected at startup
//! - Generated OpenAPI documentation served by the process

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use api::state::AppState;
use domain::membership::{Membership, MembershipRepository};
use domain::person::{NameAlphabet, Person, PersonRepository};
use domain::storage::Storage;
use domain::team::{Team, TeamRepository};
use infrastructure::membership::{MembershipService, StorageMembershipRepository};
use infrastructure::person::{PersonService, StoragePersonRepository};
use infrastructure::storage::{StorageFactory, StorageType};
use infrastructure::team::{StorageTeamRepository, TeamService};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_type = StorageType::from_str(&config.storage.backend).ok_or_else(|| {
        anyhow::anyhow!("Unknown storage backend '{}'", config.storage.backend)
    })?;

    info!("Storage backend: {:?}", storage_type);

    let (person_storage, team_storage, membership_storage) =
        create_storages(config, storage_type).await?;

    let persons: Arc<dyn PersonRepository> =
        Arc::new(StoragePersonRepository::new(person_storage));
    let teams: Arc<dyn TeamRepository> = Arc::new(StorageTeamRepository::new(team_storage));
    let memberships: Arc<dyn MembershipRepository> =
        Arc::new(StorageMembershipRepository::new(membership_storage));

    let alphabet = match &config.validation.name_alphabet {
        Some(letters) => NameAlphabet::from_letters(letters),
        None => NameAlphabet::any_letter(),
    };

    let person_service = Arc::new(PersonService::new(
        persons.clone(),
        memberships.clone(),
        alphabet,
    ));
    let team_service = Arc::new(TeamService::new(teams.clone(), memberships.clone()));
    let membership_service = Arc::new(MembershipService::new(memberships, persons, teams));

    Ok(AppState::new(
        person_service,
        team_service,
        membership_service,
    ))
}

async fn create_storages(
    config: &AppConfig,
    storage_type: StorageType,
) -> anyhow::Result<(
    Arc<dyn Storage<Person>>,
    Arc<dyn Storage<Team>>,
    Arc<dyn Storage<Membership>>,
)> {
    match storage_type {
        StorageType::InMemory => Ok((
            StorageFactory::create_in_memory::<Person>() as Arc<dyn Storage<Person>>,
            StorageFactory::create_in_memory::<Team>() as Arc<dyn Storage<Team>>,
            StorageFactory::create_in_memory::<Membership>() as Arc<dyn Storage<Membership>>,
        )),
        StorageType::Postgres => {
            let url = config
                .storage
                .database_url
                .clone()
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "storage.database_url (or DATABASE_URL) is required for the postgres backend"
                    )
                })?;

            info!("Connecting to PostgreSQL...");
            let pool = PgPoolOptions::new()
                .max_connections(config.storage.max_connections)
                .connect(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            let person_storage =
                StorageFactory::create_postgres_with_pool::<Person>(pool.clone(), "persons")
                    .await?;
            let team_storage =
                StorageFactory::create_postgres_with_pool::<Team>(pool.clone(), "teams").await?;
            let membership_storage = StorageFactory::create_postgres_with_pool::<Membership>(
                pool.clone(),
                "team_members",
            )
            .await?;

            Ok((
                person_storage as Arc<dyn Storage<Person>>,
                team_storage as Arc<dyn Storage<Team>>,
                membership_storage as Arc<dyn Storage<Membership>>,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{CreatePersonRequest, CreateTeamRequest};

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let state = create_app_state(&AppConfig::default()).await.unwrap();

        let persons = state.person_service.list().await.unwrap();
        assert!(persons.is_empty());
    }

    #[tokio::test]
    async fn test_create_app_state_rejects_unknown_backend() {
        let mut config = AppConfig::default();
        config.storage.backend = "cassandra".to_string();

        assert!(create_app_state(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_services_share_the_relation_store() {
        let state = create_app_state(&AppConfig::default()).await.unwrap();

        let person = state
            .person_service
            .create(CreatePersonRequest {
                first_name: "Andrii".to_string(),
                last_name: "Shevchenko".to_string(),
                email: "a.shevchenko@example.com".to_string(),
            })
            .await
            .unwrap();
        let team = state
            .team_service
            .create(CreateTeamRequest {
                name: "Dev".to_string(),
                description: None,
            })
            .await
            .unwrap();

        state
            .membership_service
            .add_member(team.id().as_str(), person.id().as_str())
            .await
            .unwrap();

        // Deleting the person through its service must drop the link the
        // membership service sees.
        state.person_service.delete(person.id().as_str()).await.unwrap();

        let members = state
            .membership_service
            .members(team.id().as_str())
            .await
            .unwrap();
        assert!(members.is_empty());
    }
}
