//! Pure derivations over stored records: counts, badges, ratings, and dashboards.

mod badges;
mod completion;
mod counts;
mod rating;
mod stats;

pub use badges::{application_badge, job_badge, BadgeTone, StatusBadge};
pub use completion::{profile_completion, ProfileCompletion};
pub use counts::{ApplicationCounts, JobCounts, RoleCounts};
pub use rating::{rating_stars, STAR_COUNT};
pub use stats::{admin_stats, dashboard_for, AdminStats, Dashboard};
