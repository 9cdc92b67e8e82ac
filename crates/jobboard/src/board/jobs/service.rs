use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{Job, JobId, JobStatus};
use super::repository::JobRepository;
use super::schema::{JobSearch, NewJob};
use super::search::public_results;
use crate::board::error::{BoardError, EntityKind};
use crate::board::users::service::resolve_actor;
use crate::board::users::{UserId, UserRepository};
use crate::board::validation::WireEnum;
use crate::board::views::{BoardView, Mutation};

/// Listing publication, search, and owner-driven status changes.
pub struct JobService<S> {
    store: Arc<S>,
}

impl<S> JobService<S>
where
    S: JobRepository + UserRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Publish a listing on behalf of an approved employer.
    pub fn post(&self, actor: UserId, new_job: NewJob) -> Result<Mutation<Job>, BoardError> {
        let employer = resolve_actor(self.store.as_ref(), actor)?;
        if !employer.is_employer() {
            return Err(BoardError::forbidden("only employers can post jobs"));
        }
        if !employer.can_post_jobs() {
            warn!(user_id = %actor, "job post blocked: employer awaiting approval");
            return Err(BoardError::forbidden(
                "employer account is pending approval",
            ));
        }
        if new_job.posted_by != actor {
            return Err(BoardError::forbidden(
                "postedBy must match the authenticated employer",
            ));
        }

        let NewJob {
            title,
            company,
            description,
            location,
            job_type,
            salary,
            requirements,
            experience_level,
            posted_by,
            deadline,
        } = new_job;

        let now = Utc::now();
        let job = Job {
            id: self.store.next_job_id()?,
            title,
            company,
            description,
            location,
            job_type,
            salary,
            requirements,
            experience_level,
            posted_by,
            status: JobStatus::Active,
            created_at: now,
            updated_at: now,
            deadline,
        };

        let stored = self.store.insert_job(job)?;
        info!(job_id = %stored.id, employer = %actor, "job posted");

        Ok(Mutation::new(
            stored.clone(),
            vec![
                BoardView::JobSearch,
                BoardView::Job(stored.id),
                BoardView::EmployerJobs(actor),
                BoardView::Dashboard(actor),
                BoardView::AdminStats,
            ],
        ))
    }

    pub fn get(&self, id: JobId) -> Result<Job, BoardError> {
        self.store
            .fetch_job(id)?
            .ok_or(BoardError::not_found(EntityKind::Job, id.0))
    }

    /// Detail read. Listings that are not active are only shown to their owner and admins.
    pub fn view(&self, viewer: Option<UserId>, id: JobId) -> Result<Job, BoardError> {
        let job = self.get(id)?;
        if job.status == JobStatus::Active {
            return Ok(job);
        }
        let privileged = match viewer {
            Some(viewer) => self
                .store
                .fetch_user(viewer)?
                .is_some_and(|user| user.is_admin() || job.is_owned_by(user.id)),
            None => false,
        };
        if privileged {
            Ok(job)
        } else {
            Err(BoardError::not_found(EntityKind::Job, id.0))
        }
    }

    /// Public search over active listings.
    pub fn search(&self, search: &JobSearch) -> Result<Vec<Job>, BoardError> {
        let jobs = self.store.list_jobs()?;
        Ok(public_results(jobs, search))
    }

    /// Every listing owned by the calling employer, any status, newest first.
    pub fn posted_by(&self, actor: UserId) -> Result<Vec<Job>, BoardError> {
        let employer = resolve_actor(self.store.as_ref(), actor)?;
        if !employer.is_employer() {
            return Err(BoardError::forbidden("only employers own job listings"));
        }
        let mut jobs: Vec<Job> = self
            .store
            .list_jobs()?
            .into_iter()
            .filter(|job| job.is_owned_by(actor))
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(jobs)
    }

    /// Owner or admin status change. Owners may only open or close unflagged listings.
    pub fn set_status(
        &self,
        actor: UserId,
        id: JobId,
        status: JobStatus,
    ) -> Result<Mutation<Job>, BoardError> {
        let caller = resolve_actor(self.store.as_ref(), actor)?;
        let job = self.get(id)?;

        if !caller.is_admin() {
            if !job.is_owned_by(actor) {
                return Err(BoardError::forbidden("only the job owner can change its status"));
            }
            if job.status == JobStatus::Flagged {
                return Err(BoardError::forbidden(
                    "flagged listings can only be changed by an administrator",
                ));
            }
            if !status.owner_settable() {
                return Err(BoardError::forbidden(format!(
                    "owners cannot set status '{}'",
                    status.as_str()
                )));
            }
        }

        transition_job(self.store.as_ref(), job, status)
    }
}

/// Persist a status flip. Re-applying the current status writes nothing.
pub(crate) fn transition_job<S>(
    store: &S,
    mut job: Job,
    status: JobStatus,
) -> Result<Mutation<Job>, BoardError>
where
    S: JobRepository + ?Sized,
{
    if job.status == status {
        debug!(job_id = %job.id, status = status.as_str(), "job already in requested status");
        return Ok(Mutation::unchanged(job));
    }

    let previous = job.status;
    job.status = status;
    job.updated_at = Utc::now();
    store.update_job(job.clone())?;
    info!(
        job_id = %job.id,
        from = previous.as_str(),
        to = status.as_str(),
        "job status changed"
    );

    let mut refresh = vec![
        BoardView::JobSearch,
        BoardView::Job(job.id),
        BoardView::EmployerJobs(job.posted_by),
        BoardView::Dashboard(job.posted_by),
        BoardView::AdminStats,
    ];
    if previous == JobStatus::Flagged || status == JobStatus::Flagged {
        refresh.push(BoardView::AdminFlaggedJobs);
    }
    Ok(Mutation::new(job, refresh))
}
