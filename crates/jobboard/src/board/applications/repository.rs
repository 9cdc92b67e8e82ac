use super::domain::{Application, ApplicationId};
use crate::board::error::RepositoryError;

/// Storage abstraction for applications. A (job, user) pair is stored at most once.
pub trait ApplicationRepository: Send + Sync {
    fn next_application_id(&self) -> Result<ApplicationId, RepositoryError>;
    fn insert_application(&self, application: Application)
        -> Result<Application, RepositoryError>;
    fn update_application(&self, application: Application) -> Result<(), RepositoryError>;
    fn fetch_application(&self, id: ApplicationId)
        -> Result<Option<Application>, RepositoryError>;
    fn list_applications(&self) -> Result<Vec<Application>, RepositoryError>;
}
