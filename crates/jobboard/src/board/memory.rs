use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::applications::{Application, ApplicationId, ApplicationRepository};
use super::error::RepositoryError;
use super::jobs::{Job, JobId, JobRepository};
use super::users::{User, UserId, UserRepository};

/// Process-local store backing all three repositories. Each map has its own lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<BTreeMap<UserId, User>>,
    jobs: Mutex<BTreeMap<JobId, Job>>,
    applications: Mutex<BTreeMap<ApplicationId, Application>>,
    user_sequence: AtomicU64,
    job_sequence: AtomicU64,
    application_sequence: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
}

fn next(sequence: &AtomicU64) -> u64 {
    sequence.fetch_add(1, Ordering::SeqCst) + 1
}

impl UserRepository for MemoryStore {
    fn next_user_id(&self) -> Result<UserId, RepositoryError> {
        Ok(UserId(next(&self.user_sequence)))
    }

    fn insert_user(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = lock(&self.users)?;
        if guard.contains_key(&user.id) {
            return Err(RepositoryError::Conflict(format!("user {}", user.id)));
        }
        if guard.values().any(|existing| existing.username == user.username) {
            return Err(RepositoryError::Conflict(format!(
                "username {}",
                user.username
            )));
        }
        if guard.values().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict(format!("email {}", user.email)));
        }
        guard.insert(user.id, user.clone());
        Ok(user)
    }

    fn update_user(&self, user: User) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.users)?;
        if guard
            .values()
            .any(|existing| existing.id != user.id && existing.email == user.email)
        {
            return Err(RepositoryError::Conflict(format!("email {}", user.email)));
        }
        match guard.get_mut(&user.id) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch_user(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.users)?.get(&id).cloned())
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.users)?
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.users)?
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(lock(&self.users)?.values().cloned().collect())
    }
}

impl JobRepository for MemoryStore {
    fn next_job_id(&self) -> Result<JobId, RepositoryError> {
        Ok(JobId(next(&self.job_sequence)))
    }

    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = lock(&self.jobs)?;
        if guard.contains_key(&job.id) {
            return Err(RepositoryError::Conflict(format!("job {}", job.id)));
        }
        guard.insert(job.id, job.clone());
        Ok(job)
    }

    fn update_job(&self, job: Job) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.jobs)?;
        match guard.get_mut(&job.id) {
            Some(slot) => {
                *slot = job;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch_job(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(lock(&self.jobs)?.get(&id).cloned())
    }

    fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(lock(&self.jobs)?.values().cloned().collect())
    }
}

impl ApplicationRepository for MemoryStore {
    fn next_application_id(&self) -> Result<ApplicationId, RepositoryError> {
        Ok(ApplicationId(next(&self.application_sequence)))
    }

    fn insert_application(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut guard = lock(&self.applications)?;
        if guard.contains_key(&application.id) {
            return Err(RepositoryError::Conflict(format!(
                "application {}",
                application.id
            )));
        }
        if guard
            .values()
            .any(|existing| existing.pair() == application.pair())
        {
            return Err(RepositoryError::Conflict(format!(
                "application for job {} by user {}",
                application.job_id, application.user_id
            )));
        }
        guard.insert(application.id, application.clone());
        Ok(application)
    }

    fn update_application(&self, application: Application) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.applications)?;
        match guard.get_mut(&application.id) {
            Some(slot) => {
                *slot = application;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        Ok(lock(&self.applications)?.get(&id).cloned())
    }

    fn list_applications(&self) -> Result<Vec<Application>, RepositoryError> {
        Ok(lock(&self.applications)?.values().cloned().collect())
    }
}
