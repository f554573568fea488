//! Person infrastructure - repository implementation and service

mod repository;
mod service;

pub use repository::StoragePersonRepository;
pub use service::{CreatePersonRequest, PersonService, UpdatePersonRequest};
