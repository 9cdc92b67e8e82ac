//! Job listing registry: posting, public search, and the status lifecycle.

pub mod domain;
pub mod repository;
pub mod router;
pub mod schema;
mod search;
pub mod service;

pub use domain::{ExperienceLevel, Job, JobId, JobStatus, JobType};
pub use repository::JobRepository;
pub use schema::{JobSearch, NewJob};
pub use search::public_results;
pub use service::JobService;
