use super::domain::{Job, JobId};
use crate::board::error::RepositoryError;

/// Storage abstraction for listings.
pub trait JobRepository: Send + Sync {
    fn next_job_id(&self) -> Result<JobId, RepositoryError>;
    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError>;
    fn update_job(&self, job: Job) -> Result<(), RepositoryError>;
    fn fetch_job(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;
    fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError>;
}
