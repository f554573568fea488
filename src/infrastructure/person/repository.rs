//! Storage-backed person repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::person::{Person, PersonId, PersonRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of PersonRepository
#[derive(Debug)]
pub struct StoragePersonRepository {
    storage: Arc<dyn Storage<Person>>,
}

impl StoragePersonRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Person>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl PersonRepository for StoragePersonRepository {
    async fn get(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, person: Person) -> Result<Person, DomainError> {
        if self.storage.exists(person.id()).await? {
            return Err(DomainError::conflict(format!(
                "Person '{}' already exists",
                person.id().as_str()
            )));
        }

        self.storage.create(person).await
    }

    async fn update(&self, person: Person) -> Result<Person, DomainError> {
        if !self.storage.exists(person.id()).await? {
            return Err(DomainError::not_found(format!(
                "Person '{}' not found",
                person.id().as_str()
            )));
        }

        self.storage.update(person).await
    }

    async fn delete(&self, id: &PersonId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self) -> Result<Vec<Person>, DomainError> {
        let mut persons = self.storage.list().await?;
        persons.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(persons)
    }

    async fn exists(&self, id: &PersonId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError> {
        let persons = self.storage.list().await?;
        Ok(persons.into_iter().find(|p| p.email() == email))
    }
}
