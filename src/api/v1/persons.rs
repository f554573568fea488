//! Person endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::person::Person;
use crate::infrastructure::{CreatePersonRequest, UpdatePersonRequest};

/// Request to create a new person
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonApiRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request to update a person
///
/// PUT and PATCH share this shape; omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonApiRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Person response
#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Person> for PersonResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id().as_str().to_string(),
            first_name: person.first_name().to_string(),
            last_name: person.last_name().to_string(),
            email: person.email().to_string(),
            created_at: person.created_at().to_rfc3339(),
            updated_at: person.updated_at().to_rfc3339(),
        }
    }
}

/// List persons response
#[derive(Debug, Clone, Serialize)]
pub struct ListPersonsResponse {
    pub persons: Vec<PersonResponse>,
    pub total: usize,
}

/// GET /api/v1/persons
pub async fn list_persons(
    State(state): State<AppState>,
) -> Result<Json<ListPersonsResponse>, ApiError> {
    debug!("Listing all persons");

    let persons = state.person_service.list().await.map_err(ApiError::from)?;

    let person_responses: Vec<PersonResponse> = persons.iter().map(PersonResponse::from).collect();
    let total = person_responses.len();

    Ok(Json(ListPersonsResponse {
        persons: person_responses,
        total,
    }))
}

/// POST /api/v1/persons
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonApiRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), ApiError> {
    debug!(email = %request.email, "Creating person");

    let service_request = CreatePersonRequest {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
    };

    let person = state
        .person_service
        .create(service_request)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(PersonResponse::from(&person))))
}

/// GET /api/v1/persons/{person_id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<PersonResponse>, ApiError> {
    debug!(person_id = %person_id, "Getting person");

    let person = state
        .person_service
        .get(&person_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Person '{}' not found", person_id)))?;

    Ok(Json(PersonResponse::from(&person)))
}

/// PUT/PATCH /api/v1/persons/{person_id}
pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    Json(request): Json<UpdatePersonApiRequest>,
) -> Result<Json<PersonResponse>, ApiError> {
    debug!(person_id = %person_id, "Updating person");

    let service_request = UpdatePersonRequest {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
    };

    let person = state
        .person_service
        .update(&person_id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PersonResponse::from(&person)))
}

/// DELETE /api/v1/persons/{person_id}
pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(person_id = %person_id, "Deleting person");

    let deleted = state
        .person_service
        .delete(&person_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Person '{}' not found",
            person_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::PersonId;

    #[test]
    fn test_create_person_request_deserialization() {
        let json = r#"{
            "first_name": "Andrii",
            "last_name": "Shevchenko",
            "email": "a.shevchenko@example.com"
        }"#;

        let request: CreatePersonApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, "Andrii");
        assert_eq!(request.last_name, "Shevchenko");
        assert_eq!(request.email, "a.shevchenko@example.com");
    }

    #[test]
    fn test_create_person_request_missing_field() {
        let json = r#"{
            "first_name": "Andrii"
        }"#;

        assert!(serde_json::from_str::<CreatePersonApiRequest>(json).is_err());
    }

    #[test]
    fn test_update_person_request_partial() {
        let json = r#"{
            "email": "new.address@example.com"
        }"#;

        let request: UpdatePersonApiRequest = serde_json::from_str(json).unwrap();
        assert!(request.first_name.is_none());
        assert!(request.last_name.is_none());
        assert_eq!(request.email, Some("new.address@example.com".to_string()));
    }

    #[test]
    fn test_update_person_request_empty() {
        let request: UpdatePersonApiRequest = serde_json::from_str("{}").unwrap();
        assert!(request.first_name.is_none());
        assert!(request.last_name.is_none());
        assert!(request.email.is_none());
    }

    #[test]
    fn test_person_response_from() {
        let person = Person::new(
            PersonId::new("person-1").unwrap(),
            "Viktoria",
            "Kit",
            "viki.kit@example.com",
        );

        let response = PersonResponse::from(&person);

        assert_eq!(response.id, "person-1");
        assert_eq!(response.first_name, "Viktoria");
        assert_eq!(response.last_name, "Kit");
        assert_eq!(response.email, "viki.kit@example.com");
    }

    #[test]
    fn test_person_response_serialization() {
        let person = Person::new(
            PersonId::new("person-1").unwrap(),
            "Viktoria",
            "Kit",
            "viki.kit@example.com",
        );
        let response = PersonResponse::from(&person);

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"id\":\"person-1\""));
        assert!(json.contains("\"first_name\":\"Viktoria\""));
        assert!(json.contains("\"last_name\":\"Kit\""));
        assert!(json.contains("\"email\":\"viki.kit@example.com\""));
        assert!(json.contains("\"created_at\":"));
    }

    #[test]
    fn test_list_persons_response_serialization() {
        let person = Person::new(
            PersonId::new("person-1").unwrap(),
            "Viktoria",
            "Kit",
            "viki.kit@example.com",
        );

        let list_response = ListPersonsResponse {
            persons: vec![PersonResponse::from(&person)],
            total: 1,
        };

        let json = serde_json::to_string(&list_response).unwrap();

        assert!(json.contains("\"persons\":"));
        assert!(json.contains("\"total\":1"));
    }
}
