//! Person repository trait

use async_trait::async_trait;

use super::entity::{Person, PersonId};
use crate::domain::DomainError;

/// Repository for managing persons
#[async_trait]
pub trait PersonRepository: Send + Sync + std::fmt::Debug {
    /// Get a person by ID
    async fn get(&self, id: &PersonId) -> Result<Option<Person>, DomainError>;

    /// Create a new person
    async fn create(&self, person: Person) -> Result<Person, DomainError>;

    /// Update an existing person
    async fn update(&self, person: Person) -> Result<Person, DomainError>;

    /// Delete a person by ID
    async fn delete(&self, id: &PersonId) -> Result<bool, DomainError>;

    /// List all persons
    async fn list(&self) -> Result<Vec<Person>, DomainError>;

    /// Check if a person exists
    async fn exists(&self, id: &PersonId) -> Result<bool, DomainError>;

    /// Find the person holding the given email address, if any
    async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockPersonRepository {
        persons: RwLock<HashMap<String, Person>>,
    }

    impl MockPersonRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl PersonRepository for MockPersonRepository {
        async fn get(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
            let persons = self.persons.read().unwrap();
            Ok(persons.get(id.as_str()).cloned())
        }

        async fn create(&self, person: Person) -> Result<Person, DomainError> {
            let mut persons = self.persons.write().unwrap();

            if persons.contains_key(person.id().as_str()) {
                return Err(DomainError::conflict(format!(
                    "Person '{}' already exists",
                    person.id()
                )));
            }

            persons.insert(person.id().as_str().to_string(), person.clone());
            Ok(person)
        }

        async fn update(&self, person: Person) -> Result<Person, DomainError> {
            let mut persons = self.persons.write().unwrap();

            if !persons.contains_key(person.id().as_str()) {
                return Err(DomainError::not_found(format!(
                    "Person '{}' not found",
                    person.id()
                )));
            }

            persons.insert(person.id().as_str().to_string(), person.clone());
            Ok(person)
        }

        async fn delete(&self, id: &PersonId) -> Result<bool, DomainError> {
            let mut persons = self.persons.write().unwrap();
            Ok(persons.remove(id.as_str()).is_some())
        }

        async fn list(&self) -> Result<Vec<Person>, DomainError> {
            let persons = self.persons.read().unwrap();
            let mut result: Vec<Person> = persons.values().cloned().collect();
            result.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
            Ok(result)
        }

        async fn exists(&self, id: &PersonId) -> Result<bool, DomainError> {
            let persons = self.persons.read().unwrap();
            Ok(persons.contains_key(id.as_str()))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError> {
            let persons = self.persons.read().unwrap();
            Ok(persons.values().find(|p| p.email() == email).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockPersonRepository;
    use super::*;

    fn person(id: &str, email: &str) -> Person {
        Person::new(PersonId::new(id).unwrap(), "Test", "Person", email)
    }

    #[tokio::test]
    async fn test_mock_create_and_get() {
        let repo = MockPersonRepository::new();
        let id = PersonId::new("person-1").unwrap();

        repo.create(person("person-1", "a@example.com")).await.unwrap();

        let fetched = repo.get(&id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().email(), "a@example.com");
    }

    #[tokio::test]
    async fn test_mock_create_duplicate() {
        let repo = MockPersonRepository::new();

        repo.create(person("person-1", "a@example.com")).await.unwrap();
        let result = repo.create(person("person-1", "b@example.com")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_delete() {
        let repo = MockPersonRepository::new();
        let id = PersonId::new("person-1").unwrap();

        repo.create(person("person-1", "a@example.com")).await.unwrap();
        assert!(repo.exists(&id).await.unwrap());

        let deleted = repo.delete(&id).await.unwrap();
        assert!(deleted);
        assert!(!repo.exists(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_find_by_email() {
        let repo = MockPersonRepository::new();

        repo.create(person("person-1", "a@example.com")).await.unwrap();
        repo.create(person("person-2", "b@example.com")).await.unwrap();

        let found = repo.find_by_email("b@example.com").await.unwrap();
        assert_eq!(found.unwrap().id().as_str(), "person-2");

        let missing = repo.find_by_email("c@example.com").await.unwrap();
        assert!(missing.is_none());
    }
}
