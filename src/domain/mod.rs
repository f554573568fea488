//! Domain layer - Core business logic and entities

pub mod error;
pub mod membership;
pub mod person;
pub mod storage;
pub mod team;

pub use error::DomainError;
pub use membership::{Membership, MembershipError, MembershipId, MembershipRepository};
pub use person::{
    validate_email, validate_person_id, validate_person_name, NameAlphabet, Person, PersonId,
    PersonRepository, PersonValidationError,
};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{
    validate_team_id, validate_team_name, Team, TeamId, TeamRepository, TeamValidationError,
};
