use std::sync::Arc;

use tracing::{debug, info};

use crate::board::applications::ApplicationRepository;
use crate::board::error::{BoardError, EntityKind};
use crate::board::insights::{admin_stats, AdminStats};
use crate::board::jobs::service::transition_job;
use crate::board::jobs::{Job, JobId, JobRepository, JobStatus};
use crate::board::users::service::resolve_actor;
use crate::board::users::{PublicUser, User, UserId, UserRepository};
use crate::board::views::{BoardView, Mutation};

/// Admin decisions. Every operation re-checks the caller's role and repeats are no-ops.
pub struct ModerationService<S> {
    store: Arc<S>,
}

impl<S> ModerationService<S>
where
    S: UserRepository + JobRepository + ApplicationRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn ensure_admin(&self, actor: UserId) -> Result<User, BoardError> {
        let caller = resolve_actor(self.store.as_ref(), actor)?;
        if caller.is_admin() {
            Ok(caller)
        } else {
            debug!(user_id = %actor, "admin operation refused");
            Err(BoardError::forbidden("administrator role required"))
        }
    }

    /// Flip an account's approval flag. Posted jobs are left as they are.
    pub fn set_employer_approval(
        &self,
        actor: UserId,
        target: UserId,
        approved: bool,
    ) -> Result<Mutation<User>, BoardError> {
        self.ensure_admin(actor)?;
        let mut user = self
            .store
            .fetch_user(target)?
            .ok_or(BoardError::not_found(EntityKind::User, target.0))?;

        if user.is_approved == approved {
            debug!(user_id = %target, approved, "approval already in requested state");
            return Ok(Mutation::unchanged(user));
        }

        user.is_approved = approved;
        self.store.update_user(user.clone())?;
        info!(user_id = %target, approved, admin = %actor, "account approval changed");

        Ok(Mutation::new(
            user,
            vec![
                BoardView::Profile(target),
                BoardView::Dashboard(target),
                BoardView::AdminUsers,
                BoardView::AdminPendingEmployers,
                BoardView::AdminStats,
            ],
        ))
    }

    pub fn approve_job(&self, actor: UserId, id: JobId) -> Result<Mutation<Job>, BoardError> {
        self.set_job_status(actor, id, JobStatus::Active)
    }

    pub fn remove_job(&self, actor: UserId, id: JobId) -> Result<Mutation<Job>, BoardError> {
        self.set_job_status(actor, id, JobStatus::Closed)
    }

    /// Any status, including flagging. Content is not re-validated.
    pub fn set_job_status(
        &self,
        actor: UserId,
        id: JobId,
        status: JobStatus,
    ) -> Result<Mutation<Job>, BoardError> {
        self.ensure_admin(actor)?;
        let job = self
            .store
            .fetch_job(id)?
            .ok_or(BoardError::not_found(EntityKind::Job, id.0))?;
        transition_job(self.store.as_ref(), job, status)
    }

    pub fn list_users(&self, actor: UserId) -> Result<Vec<PublicUser>, BoardError> {
        self.ensure_admin(actor)?;
        let mut users = self.store.list_users()?;
        users.sort_by_key(|user| user.id);
        Ok(users.iter().map(User::public_view).collect())
    }

    /// Employers still waiting on approval, oldest registration first.
    pub fn pending_employers(&self, actor: UserId) -> Result<Vec<PublicUser>, BoardError> {
        self.ensure_admin(actor)?;
        let mut pending: Vec<User> = self
            .store
            .list_users()?
            .into_iter()
            .filter(User::awaiting_approval)
            .collect();
        pending.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(pending.iter().map(User::public_view).collect())
    }

    pub fn flagged_jobs(&self, actor: UserId) -> Result<Vec<Job>, BoardError> {
        self.ensure_admin(actor)?;
        let mut flagged: Vec<Job> = self
            .store
            .list_jobs()?
            .into_iter()
            .filter(|job| job.status == JobStatus::Flagged)
            .collect();
        flagged.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(flagged)
    }

    pub fn stats(&self, actor: UserId) -> Result<AdminStats, BoardError> {
        self.ensure_admin(actor)?;
        let users = self.store.list_users()?;
        let jobs = self.store.list_jobs()?;
        let applications = self.store.list_applications()?;
        Ok(admin_stats(&users, &jobs, &applications))
    }
}
