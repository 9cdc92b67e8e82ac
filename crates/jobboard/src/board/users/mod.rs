//! Account registry: registration, credentials, and profile edits.

pub mod domain;
mod password;
pub mod repository;
pub mod router;
pub mod schema;
pub mod service;

pub use domain::{PublicUser, User, UserId, UserRole};
pub use repository::UserRepository;
pub use schema::{ApprovalUpdate, LoginPayload, NewUser, ProfileUpdate, RegisterPayload};
pub use service::AccountService;
