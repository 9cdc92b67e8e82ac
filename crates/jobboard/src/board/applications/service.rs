use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{Application, ApplicationId, ApplicationStatus};
use super::repository::ApplicationRepository;
use super::schema::NewApplication;
use crate::board::error::{BoardError, EntityKind};
use crate::board::jobs::{Job, JobId, JobRepository};
use crate::board::users::service::resolve_actor;
use crate::board::users::{User, UserId, UserRepository};
use crate::board::validation::{ValidationErrors, WireEnum};
use crate::board::views::{BoardView, Mutation};

/// Applying to listings and reviewing the resulting applications.
pub struct ApplicationService<S> {
    store: Arc<S>,
}

impl<S> ApplicationService<S>
where
    S: ApplicationRepository + JobRepository + UserRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// File a pending application from a job seeker against an active listing.
    pub fn apply(
        &self,
        actor: UserId,
        new_application: NewApplication,
    ) -> Result<Mutation<Application>, BoardError> {
        let seeker = resolve_actor(self.store.as_ref(), actor)?;
        if !seeker.is_jobseeker() {
            return Err(BoardError::forbidden("only job seekers can apply to jobs"));
        }
        if new_application.user_id != actor {
            return Err(BoardError::forbidden(
                "userId must match the authenticated user",
            ));
        }

        let Some(job) = self.store.fetch_job(new_application.job_id)? else {
            return Err(ValidationErrors::single("jobId", "Job does not exist").into());
        };
        let now = Utc::now();
        if job.deadline_passed(now) {
            return Err(
                ValidationErrors::single("jobId", "Application deadline has passed").into(),
            );
        }
        if !job.accepts_applications(now) {
            return Err(
                ValidationErrors::single("jobId", "Job is not accepting applications").into(),
            );
        }

        let pair = (new_application.job_id, actor);
        if self
            .store
            .list_applications()?
            .iter()
            .any(|existing| existing.pair() == pair)
        {
            debug!(job_id = %job.id, user_id = %actor, "duplicate application rejected");
            return Err(BoardError::Conflict(format!(
                "user {actor} already applied to job {}",
                job.id
            )));
        }

        let application = Application {
            id: self.store.next_application_id()?,
            job_id: job.id,
            user_id: actor,
            status: ApplicationStatus::Pending,
            cover_letter: new_application.cover_letter,
            applied_at: now,
            updated_at: now,
        };

        let stored = self.store.insert_application(application)?;
        info!(
            application_id = %stored.id,
            job_id = %job.id,
            user_id = %actor,
            "application submitted"
        );

        Ok(Mutation::new(
            stored.clone(),
            vec![
                BoardView::Application(stored.id),
                BoardView::UserApplications(actor),
                BoardView::JobApplications(job.id),
                BoardView::Dashboard(actor),
                BoardView::Dashboard(job.posted_by),
                BoardView::AdminStats,
            ],
        ))
    }

    /// The caller's own applications, newest first.
    pub fn list_for_user(&self, actor: UserId) -> Result<Vec<Application>, BoardError> {
        resolve_actor(self.store.as_ref(), actor)?;
        let mut applications: Vec<Application> = self
            .store
            .list_applications()?
            .into_iter()
            .filter(|application| application.user_id == actor)
            .collect();
        sort_newest_first(&mut applications);
        Ok(applications)
    }

    /// Applications received by a listing. Visible to its owner and to admins.
    pub fn list_for_job(
        &self,
        actor: UserId,
        job_id: JobId,
    ) -> Result<Vec<Application>, BoardError> {
        let caller = resolve_actor(self.store.as_ref(), actor)?;
        let job = self.job(job_id)?;
        ensure_reviewer(&caller, &job)?;

        let mut applications: Vec<Application> = self
            .store
            .list_applications()?
            .into_iter()
            .filter(|application| application.job_id == job_id)
            .collect();
        sort_newest_first(&mut applications);
        Ok(applications)
    }

    /// Review decision by the listing owner or an admin. No transition order is enforced.
    pub fn set_status(
        &self,
        actor: UserId,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Mutation<Application>, BoardError> {
        let caller = resolve_actor(self.store.as_ref(), actor)?;
        let mut application = self
            .store
            .fetch_application(id)?
            .ok_or(BoardError::not_found(EntityKind::Application, id.0))?;
        let job = self.job(application.job_id)?;
        ensure_reviewer(&caller, &job)?;

        if application.status == status {
            return Ok(Mutation::unchanged(application));
        }

        let previous = application.status;
        application.status = status;
        application.updated_at = Utc::now();
        self.store.update_application(application.clone())?;
        info!(
            application_id = %id,
            from = previous.as_str(),
            to = status.as_str(),
            reviewer = %actor,
            "application status changed"
        );

        let applicant = application.user_id;
        Ok(Mutation::new(
            application,
            vec![
                BoardView::Application(id),
                BoardView::UserApplications(applicant),
                BoardView::JobApplications(job.id),
                BoardView::Dashboard(applicant),
                BoardView::Dashboard(job.posted_by),
            ],
        ))
    }

    fn job(&self, id: JobId) -> Result<Job, BoardError> {
        self.store
            .fetch_job(id)?
            .ok_or(BoardError::not_found(EntityKind::Job, id.0))
    }
}

fn ensure_reviewer(caller: &User, job: &Job) -> Result<(), BoardError> {
    if caller.is_admin() || job.is_owned_by(caller.id) {
        Ok(())
    } else {
        Err(BoardError::forbidden(
            "only the job owner or an admin can review applications",
        ))
    }
}

fn sort_newest_first(applications: &mut [Application]) {
    applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at).then(b.id.cmp(&a.id)));
}
