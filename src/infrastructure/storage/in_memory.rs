//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory storage implementation
///
/// Useful for testing and development. Data is lost when the process
/// terminates. Every mutation holds the write lock for the whole
/// check-then-mutate sequence, so create/update/delete are atomic per key.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<HashMap<String, E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Creates storage pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Self {
        let storage = Self::new();
        {
            let mut map = storage.entities.write().unwrap();

            for entity in entities {
                map.insert(entity.key().as_str().to_string(), entity);
            }
        }
        storage
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.get(key.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.values().cloned().collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if entities.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !entities.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Entity with key '{}' not found",
                key
            )));
        }

        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(entities.remove(key.as_str()).is_some())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        entities.clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.len())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.contains_key(key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::{Person, PersonId};

    fn person(id: &str, email: &str) -> Person {
        Person::new(PersonId::new(id).unwrap(), "Test", "Person", email)
    }

    fn key(id: &str) -> PersonId {
        PersonId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        storage.create(person("1", "a@example.com")).await.unwrap();

        let result = storage.get(&key("1")).await.unwrap();
        assert_eq!(result.unwrap().email(), "a@example.com");
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        storage.create(person("1", "a@example.com")).await.unwrap();
        let result = storage.create(person("1", "b@example.com")).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        storage.create(person("1", "a@example.com")).await.unwrap();
        storage.update(person("1", "b@example.com")).await.unwrap();

        let result = storage.get(&key("1")).await.unwrap();
        assert_eq!(result.unwrap().email(), "b@example.com");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        let result = storage.update(person("1", "a@example.com")).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        storage.create(person("1", "a@example.com")).await.unwrap();
        let deleted = storage.delete(&key("1")).await.unwrap();

        assert!(deleted);
        assert!(!storage.exists(&key("1")).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        let deleted = storage.delete(&key("1")).await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        storage.create(person("1", "a@example.com")).await.unwrap();
        storage.create(person("2", "b@example.com")).await.unwrap();
        storage.create(person("3", "c@example.com")).await.unwrap();

        assert_eq!(storage.list().await.unwrap().len(), 3);
        assert_eq!(storage.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_clear() {
        let storage: InMemoryStorage<Person> = InMemoryStorage::new();

        storage.create(person("1", "a@example.com")).await.unwrap();
        storage.create(person("2", "b@example.com")).await.unwrap();

        storage.clear().await.unwrap();

        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_with_entities() {
        let storage = InMemoryStorage::with_entities(vec![
            person("1", "a@example.com"),
            person("2", "b@example.com"),
        ]);

        assert_eq!(storage.count().await.unwrap(), 2);
    }
}
