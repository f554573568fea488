//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::{MembershipService, PersonService, TeamService};

/// Application state containing the shared services
#[derive(Clone)]
pub struct AppState {
    pub person_service: Arc<PersonService>,
    pub team_service: Arc<TeamService>,
    pub membership_service: Arc<MembershipService>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        person_service: Arc<PersonService>,
        team_service: Arc<TeamService>,
        membership_service: Arc<MembershipService>,
    ) -> Self {
        Self {
            person_service,
            team_service,
            membership_service,
        }
    }
}
