use serde::Serialize;

use crate::board::applications::ApplicationStatus;
use crate::board::jobs::JobStatus;
use crate::board::users::UserRole;

/// Application totals bucketed for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationCounts {
    pub total: usize,
    pub pending: usize,
    pub reviewed: usize,
    /// Interviewed, accepted, and rejected applications together.
    pub interviewed: usize,
}

impl ApplicationCounts {
    pub fn from_statuses(statuses: impl IntoIterator<Item = ApplicationStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                counts.total += 1;
                match status {
                    ApplicationStatus::Pending => counts.pending += 1,
                    ApplicationStatus::Reviewed => counts.reviewed += 1,
                    _ if status.reached_interview() => counts.interviewed += 1,
                    _ => {}
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JobCounts {
    pub total: usize,
    pub active: usize,
    pub closed: usize,
    pub pending: usize,
    pub flagged: usize,
}

impl JobCounts {
    pub fn from_statuses(statuses: impl IntoIterator<Item = JobStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            counts.total += 1;
            match status {
                JobStatus::Active => counts.active += 1,
                JobStatus::Closed => counts.closed += 1,
                JobStatus::Pending => counts.pending += 1,
                JobStatus::Flagged => counts.flagged += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub total: usize,
    pub jobseekers: usize,
    pub employers: usize,
    pub admins: usize,
}

impl RoleCounts {
    pub fn from_roles(roles: impl IntoIterator<Item = UserRole>) -> Self {
        let mut counts = Self::default();
        for role in roles {
            counts.total += 1;
            match role {
                UserRole::Jobseeker => counts.jobseekers += 1,
                UserRole::Employer => counts.employers += 1,
                UserRole::Admin => counts.admins += 1,
            }
        }
        counts
    }
}
