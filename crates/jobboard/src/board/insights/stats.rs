use serde::Serialize;

use super::counts::{ApplicationCounts, JobCounts, RoleCounts};
use crate::board::applications::Application;
use crate::board::jobs::Job;
use crate::board::users::{User, UserRole};

/// Site-wide totals for the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub users: RoleCounts,
    pub pending_employers: usize,
    pub jobs: JobCounts,
    pub applications: ApplicationCounts,
}

/// Role-specific dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Jobseeker {
        applications: ApplicationCounts,
    },
    Employer {
        #[serde(rename = "isApproved")]
        is_approved: bool,
        jobs: JobCounts,
        applications: ApplicationCounts,
    },
    Admin {
        stats: AdminStats,
    },
}

pub fn admin_stats(users: &[User], jobs: &[Job], applications: &[Application]) -> AdminStats {
    AdminStats {
        users: RoleCounts::from_roles(users.iter().map(|user| user.role)),
        pending_employers: users.iter().filter(|user| user.awaiting_approval()).count(),
        jobs: JobCounts::from_statuses(jobs.iter().map(|job| job.status)),
        applications: ApplicationCounts::from_statuses(
            applications.iter().map(|application| application.status),
        ),
    }
}

pub fn dashboard_for(
    user: &User,
    users: &[User],
    jobs: &[Job],
    applications: &[Application],
) -> Dashboard {
    match user.role {
        UserRole::Jobseeker => Dashboard::Jobseeker {
            applications: ApplicationCounts::from_statuses(
                applications
                    .iter()
                    .filter(|application| application.user_id == user.id)
                    .map(|application| application.status),
            ),
        },
        UserRole::Employer => {
            let owned: Vec<&Job> = jobs.iter().filter(|job| job.is_owned_by(user.id)).collect();
            let received = applications
                .iter()
                .filter(|application| owned.iter().any(|job| job.id == application.job_id))
                .map(|application| application.status);
            Dashboard::Employer {
                is_approved: user.is_approved,
                jobs: JobCounts::from_statuses(owned.iter().map(|job| job.status)),
                applications: ApplicationCounts::from_statuses(received),
            }
        }
        UserRole::Admin => Dashboard::Admin {
            stats: admin_stats(users, jobs, applications),
        },
    }
}
