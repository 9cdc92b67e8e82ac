//! Explicit read-model refresh hints returned by every write.

use std::fmt;

use axum::http::{HeaderName, HeaderValue};
use serde::Serialize;

use super::applications::domain::ApplicationId;
use super::jobs::domain::JobId;
use super::users::domain::UserId;

pub const REFRESH_VIEWS_HEADER: HeaderName = HeaderName::from_static("x-refresh-views");

/// A read model a client renders that a write can make stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "id", rename_all = "kebab-case")]
pub enum BoardView {
    JobSearch,
    Job(JobId),
    EmployerJobs(UserId),
    JobApplications(JobId),
    Application(ApplicationId),
    UserApplications(UserId),
    Profile(UserId),
    Dashboard(UserId),
    AdminUsers,
    AdminPendingEmployers,
    AdminFlaggedJobs,
    AdminStats,
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardView::JobSearch => write!(f, "job-search"),
            BoardView::Job(id) => write!(f, "job:{id}"),
            BoardView::EmployerJobs(id) => write!(f, "employer-jobs:{id}"),
            BoardView::JobApplications(id) => write!(f, "job-applications:{id}"),
            BoardView::Application(id) => write!(f, "application:{id}"),
            BoardView::UserApplications(id) => write!(f, "user-applications:{id}"),
            BoardView::Profile(id) => write!(f, "profile:{id}"),
            BoardView::Dashboard(id) => write!(f, "dashboard:{id}"),
            BoardView::AdminUsers => write!(f, "admin-users"),
            BoardView::AdminPendingEmployers => write!(f, "admin-pending-employers"),
            BoardView::AdminFlaggedJobs => write!(f, "admin-flagged-jobs"),
            BoardView::AdminStats => write!(f, "admin-stats"),
        }
    }
}

/// Result of a write: the stored record plus the views that now need refreshing.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub record: T,
    pub refresh: Vec<BoardView>,
}

impl<T> Mutation<T> {
    pub fn new(record: T, refresh: Vec<BoardView>) -> Self {
        Self { record, refresh }
    }

    /// A write that found the target already in the requested state.
    pub fn unchanged(record: T) -> Self {
        Self {
            record,
            refresh: Vec::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.refresh.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Mutation<U> {
        Mutation {
            record: f(self.record),
            refresh: self.refresh,
        }
    }

    /// Comma separated view keys for the refresh header.
    pub fn refresh_header(&self) -> Option<HeaderValue> {
        if self.refresh.is_empty() {
            return None;
        }
        let joined = self
            .refresh
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        HeaderValue::from_str(&joined).ok()
    }
}
