//! Team infrastructure - repository implementation and service

mod repository;
mod service;

pub use repository::StorageTeamRepository;
pub use service::{CreateTeamRequest, TeamService, UpdateTeamRequest};
