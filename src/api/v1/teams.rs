//! Team endpoints, including member management

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::api::v1::persons::PersonResponse;
use crate::domain::person::Person;
use crate::domain::team::Team;
use crate::infrastructure::{CreateTeamRequest, UpdateTeamRequest};

/// Request to create a new team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to update a team
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamApiRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request naming the person for add_member/remove_member
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberApiRequest {
    pub person_id: String,
}

/// Team response with its resolved member records
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<PersonResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl TeamResponse {
    fn from_parts(team: &Team, members: &[Person]) -> Self {
        Self {
            id: team.id().as_str().to_string(),
            name: team.name().to_string(),
            description: team.description().map(String::from),
            members: members.iter().map(PersonResponse::from).collect(),
            created_at: team.created_at().to_rfc3339(),
            updated_at: team.updated_at().to_rfc3339(),
        }
    }
}

/// List teams response
#[derive(Debug, Clone, Serialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: usize,
}

async fn team_response(state: &AppState, team: &Team) -> Result<TeamResponse, ApiError> {
    let members = state
        .membership_service
        .members(team.id().as_str())
        .await
        .map_err(ApiError::from)?;

    Ok(TeamResponse::from_parts(team, &members))
}

/// GET /api/v1/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<ListTeamsResponse>, ApiError> {
    debug!("Listing all teams");

    let teams = state.team_service.list().await.map_err(ApiError::from)?;

    let mut team_responses = Vec::with_capacity(teams.len());

    for team in &teams {
        team_responses.push(team_response(&state, team).await?);
    }

    let total = team_responses.len();

    Ok(Json(ListTeamsResponse {
        teams: team_responses,
        total,
    }))
}

/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, "Creating team");

    let service_request = CreateTeamRequest {
        name: request.name,
        description: request.description,
    };

    let team = state
        .team_service
        .create(service_request)
        .await
        .map_err(ApiError::from)?;

    // A fresh team has no members yet.
    Ok((
        StatusCode::CREATED,
        Json(TeamResponse::from_parts(&team, &[])),
    ))
}

/// GET /api/v1/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %team_id, "Getting team");

    let team = state
        .team_service
        .get(&team_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Team '{}' not found", team_id)))?;

    Ok(Json(team_response(&state, &team).await?))
}

/// PUT/PATCH /api/v1/teams/{team_id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(request): Json<UpdateTeamApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %team_id, "Updating team");

    let service_request = UpdateTeamRequest {
        name: request.name,
        description: request.description,
    };

    let team = state
        .team_service
        .update(&team_id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(team_response(&state, &team).await?))
}

/// DELETE /api/v1/teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(team_id = %team_id, "Deleting team");

    let deleted = state
        .team_service
        .delete(&team_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found(format!("Team '{}' not found", team_id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/teams/{team_id}/add_member
pub async fn add_member(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(request): Json<TeamMemberApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %team_id, person_id = %request.person_id, "Adding team member");

    state
        .membership_service
        .add_member(&team_id, &request.person_id)
        .await
        .map_err(ApiError::from)?;

    refreshed_team(&state, &team_id).await
}

/// POST /api/v1/teams/{team_id}/remove_member
pub async fn remove_member(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(request): Json<TeamMemberApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %team_id, person_id = %request.person_id, "Removing team member");

    state
        .membership_service
        .remove_member(&team_id, &request.person_id)
        .await
        .map_err(ApiError::from)?;

    refreshed_team(&state, &team_id).await
}

async fn refreshed_team(state: &AppState, team_id: &str) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .team_service
        .get(team_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Team '{}' not found", team_id)))?;

    Ok(Json(team_response(state, &team).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::PersonId;
    use crate::domain::team::TeamId;

    #[test]
    fn test_create_team_request_deserialization() {
        let json = r#"{
            "name": "Dev"
        }"#;

        let request: CreateTeamApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Dev");
        assert!(request.description.is_none());
    }

    #[test]
    fn test_create_team_request_with_description() {
        let json = r#"{
            "name": "New Team",
            "description": "This is a new test team"
        }"#;

        let request: CreateTeamApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "New Team");
        assert_eq!(
            request.description,
            Some("This is a new test team".to_string())
        );
    }

    #[test]
    fn test_update_team_request_partial() {
        let json = r#"{
            "description": "Updated Description"
        }"#;

        let request: UpdateTeamApiRequest = serde_json::from_str(json).unwrap();
        assert!(request.name.is_none());
        assert_eq!(
            request.description,
            Some("Updated Description".to_string())
        );
    }

    #[test]
    fn test_team_member_request_deserialization() {
        let json = r#"{"person_id": "person-1"}"#;

        let request: TeamMemberApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.person_id, "person-1");
    }

    #[test]
    fn test_team_member_request_missing_person_id() {
        assert!(serde_json::from_str::<TeamMemberApiRequest>("{}").is_err());
    }

    #[test]
    fn test_team_response_without_members() {
        let team = Team::new(TeamId::new("team-1").unwrap(), "Dev").unwrap();

        let response = TeamResponse::from_parts(&team, &[]);

        assert_eq!(response.id, "team-1");
        assert_eq!(response.name, "Dev");
        assert!(response.description.is_none());
        assert!(response.members.is_empty());
    }

    #[test]
    fn test_team_response_with_members() {
        let team = Team::new(TeamId::new("team-1").unwrap(), "Dev")
            .unwrap()
            .with_description("This is a test team");
        let member = Person::new(
            PersonId::new("person-1").unwrap(),
            "Viktoria",
            "Kit",
            "viki.kit@example.com",
        );

        let response = TeamResponse::from_parts(&team, &[member]);

        assert_eq!(response.members.len(), 1);
        assert_eq!(response.members[0].id, "person-1");
        assert_eq!(response.description, Some("This is a test team".to_string()));
    }

    #[test]
    fn test_team_response_serialization() {
        let team = Team::new(TeamId::new("team-1").unwrap(), "Dev").unwrap();
        let response = TeamResponse::from_parts(&team, &[]);

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"id\":\"team-1\""));
        assert!(json.contains("\"name\":\"Dev\""));
        assert!(json.contains("\"members\":[]"));
    }

    #[test]
    fn test_list_teams_response_empty() {
        let list_response = ListTeamsResponse {
            teams: vec![],
            total: 0,
        };

        let json = serde_json::to_string(&list_response).unwrap();

        assert!(json.contains("\"teams\":[]"));
        assert!(json.contains("\"total\":0"));
    }
}
