//! Person service for person management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::membership::MembershipRepository;
use crate::domain::person::{
    validate_email, validate_person_name, NameAlphabet, Person, PersonId, PersonRepository,
};
use crate::domain::DomainError;

/// Request for creating a new person
#[derive(Debug, Clone)]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request for updating a person
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Person service for managing persons
///
/// Deleting a person also drops its relation rows, so no team keeps a
/// reference to a person that no longer resolves.
#[derive(Debug)]
pub struct PersonService {
    repository: Arc<dyn PersonRepository>,
    memberships: Arc<dyn MembershipRepository>,
    alphabet: NameAlphabet,
}

impl PersonService {
    /// Create a new person service
    pub fn new(
        repository: Arc<dyn PersonRepository>,
        memberships: Arc<dyn MembershipRepository>,
        alphabet: NameAlphabet,
    ) -> Self {
        Self {
            repository,
            memberships,
            alphabet,
        }
    }

    /// Create a new person
    pub async fn create(&self, request: CreatePersonRequest) -> Result<Person, DomainError> {
        info!(email = %request.email, "Creating person");

        validate_person_name(&request.first_name, &self.alphabet)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_person_name(&request.last_name, &self.alphabet)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        self.ensure_email_free(&request.email, None).await?;

        let person = Person::new(
            PersonId::generate(),
            request.first_name,
            request.last_name,
            request.email,
        );

        self.repository.create(person).await
    }

    /// Get a person by ID
    pub async fn get(&self, id: &str) -> Result<Option<Person>, DomainError> {
        let person_id = PersonId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.get(&person_id).await
    }

    /// List all persons
    pub async fn list(&self) -> Result<Vec<Person>, DomainError> {
        self.repository.list().await
    }

    /// Update a person
    pub async fn update(
        &self,
        id: &str,
        request: UpdatePersonRequest,
    ) -> Result<Person, DomainError> {
        info!(id = %id, "Updating person");

        let person_id = PersonId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut person = self
            .repository
            .get(&person_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Person '{}' not found", id)))?;

        if let Some(first_name) = request.first_name {
            validate_person_name(&first_name, &self.alphabet)
                .map_err(|e| DomainError::validation(e.to_string()))?;
            person.set_first_name(first_name);
        }

        if let Some(last_name) = request.last_name {
            validate_person_name(&last_name, &self.alphabet)
                .map_err(|e| DomainError::validation(e.to_string()))?;
            person.set_last_name(last_name);
        }

        if let Some(email) = request.email {
            validate_email(&email).map_err(|e| DomainError::validation(e.to_string()))?;
            self.ensure_email_free(&email, Some(&person_id)).await?;
            person.set_email(email);
        }

        self.repository.update(person).await
    }

    /// Delete a person, cascading its membership links
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        info!(id = %id, "Deleting person");

        let person_id = PersonId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if !self.repository.exists(&person_id).await? {
            return Ok(false);
        }

        let removed = self.memberships.remove_all_for_person(&person_id).await?;

        if removed > 0 {
            debug!(id = %id, links = removed, "Removed membership links");
        }

        self.repository.delete(&person_id).await
    }

    /// Check if a person exists
    pub async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let person_id = PersonId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.exists(&person_id).await
    }

    /// Fail with a conflict when another person already holds the email
    async fn ensure_email_free(
        &self,
        email: &str,
        exclude: Option<&PersonId>,
    ) -> Result<(), DomainError> {
        if let Some(existing) = self.repository.find_by_email(email).await? {
            if exclude != Some(existing.id()) {
                return Err(DomainError::conflict(format!(
                    "Email '{}' is already in use",
                    email
                )));
            }
        }

        Ok(())
    }
}
