//! v1 API endpoints

pub mod persons;
pub mod teams;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Person management
        .route("/persons", get(persons::list_persons))
        .route("/persons", post(persons::create_person))
        .route("/persons/{person_id}", get(persons::get_person))
        .route("/persons/{person_id}", put(persons::update_person))
        .route("/persons/{person_id}", patch(persons::update_person))
        .route("/persons/{person_id}", delete(persons::delete_person))
        // Team management
        .route("/teams", get(teams::list_teams))
        .route("/teams", post(teams::create_team))
        .route("/teams/{team_id}", get(teams::get_team))
        .route("/teams/{team_id}", put(teams::update_team))
        .route("/teams/{team_id}", patch(teams::update_team))
        .route("/teams/{team_id}", delete(teams::delete_team))
        // Team membership
        .route("/teams/{team_id}/add_member", post(teams::add_member))
        .route("/teams/{team_id}/remove_member", post(teams::remove_member))
}
