//! Job board core: accounts, listings, applications, and admin moderation over one store.

pub mod actor;
pub mod applications;
pub mod error;
pub mod insights;
pub mod jobs;
pub mod memory;
pub mod moderation;
pub mod router;
pub mod users;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use actor::{Actor, USER_ID_HEADER};
pub use applications::{ApplicationRepository, ApplicationService};
pub use error::{BoardError, EntityKind, RepositoryError};
pub use insights::Dashboard;
pub use jobs::{JobRepository, JobService};
pub use memory::MemoryStore;
pub use moderation::ModerationService;
pub use router::board_router;
pub use users::{AccountService, UserId, UserRepository};
pub use validation::{FieldError, ValidationErrors};
pub use views::{BoardView, Mutation, REFRESH_VIEWS_HEADER};

/// A store able to back every board service.
pub trait BoardStore: UserRepository + JobRepository + ApplicationRepository + 'static {}

impl<T> BoardStore for T where T: UserRepository + JobRepository + ApplicationRepository + 'static {}

/// Facade bundling the board services over one shared store.
pub struct JobBoard<S> {
    pub accounts: AccountService<S>,
    pub jobs: JobService<S>,
    pub applications: ApplicationService<S>,
    pub moderation: ModerationService<S>,
    store: Arc<S>,
}

impl<S: BoardStore> JobBoard<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            accounts: AccountService::new(store.clone()),
            jobs: JobService::new(store.clone()),
            applications: ApplicationService::new(store.clone()),
            moderation: ModerationService::new(store.clone()),
            store,
        }
    }

    /// Role-specific figures for the calling account.
    pub fn dashboard(&self, actor: UserId) -> Result<Dashboard, BoardError> {
        let user = self.accounts.resolve_actor(actor)?;
        let users = self.store.list_users()?;
        let jobs = self.store.list_jobs()?;
        let applications = self.store.list_applications()?;
        Ok(insights::dashboard_for(&user, &users, &jobs, &applications))
    }
}
