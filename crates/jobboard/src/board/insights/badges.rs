use serde::Serialize;

use crate::board::applications::ApplicationStatus;
use crate::board::jobs::JobStatus;
use crate::board::validation::WireEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Neutral,
    Info,
    Primary,
    Success,
    Warning,
    Danger,
}

/// Display label and tone for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl StatusBadge {
    const fn new(label: &'static str, tone: BadgeTone) -> Self {
        Self { label, tone }
    }

    pub const fn for_application(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => Self::new("Pending", BadgeTone::Warning),
            ApplicationStatus::Reviewed => Self::new("Reviewed", BadgeTone::Info),
            ApplicationStatus::Interviewed => Self::new("Interviewed", BadgeTone::Primary),
            ApplicationStatus::Accepted => Self::new("Accepted", BadgeTone::Success),
            ApplicationStatus::Rejected => Self::new("Rejected", BadgeTone::Danger),
        }
    }

    pub const fn for_job(status: JobStatus) -> Self {
        match status {
            JobStatus::Active => Self::new("Active", BadgeTone::Success),
            JobStatus::Closed => Self::new("Closed", BadgeTone::Neutral),
            JobStatus::Pending => Self::new("Pending Review", BadgeTone::Warning),
            JobStatus::Flagged => Self::new("Flagged", BadgeTone::Danger),
        }
    }
}

/// Badge for a raw application status; unknown values render nothing.
pub fn application_badge(raw: &str) -> Option<StatusBadge> {
    ApplicationStatus::from_wire(raw).map(StatusBadge::for_application)
}

/// Badge for a raw job status; unknown values render nothing.
pub fn job_badge(raw: &str) -> Option<StatusBadge> {
    JobStatus::from_wire(raw).map(StatusBadge::for_job)
}
