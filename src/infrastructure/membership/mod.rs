//! Membership infrastructure - repository implementation and service

mod repository;
mod service;

pub use repository::StorageMembershipRepository;
pub use service::MembershipService;
