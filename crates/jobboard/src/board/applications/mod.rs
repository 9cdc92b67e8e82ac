//! Job seeker applications and their review status.

pub mod domain;
pub mod repository;
pub mod router;
pub mod schema;
pub mod service;

pub use domain::{Application, ApplicationId, ApplicationStatus};
pub use repository::ApplicationRepository;
pub use schema::NewApplication;
pub use service::ApplicationService;
