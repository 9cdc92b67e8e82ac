use chrono::{Duration, Utc};
use jobboard::board::applications::{Application, NewApplication};
use jobboard::board::jobs::{ExperienceLevel, Job, JobStatus, JobType, NewJob};
use jobboard::board::users::{NewUser, User, UserRole};
use jobboard::board::BoardError;
use jobboard::{BoardStore, JobBoard};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) const DEMO_PASSWORD: &str = "board-demo-pass";

/// Records created by [`seed_demo_board`].
pub(crate) struct DemoSeed {
    pub(crate) admin: User,
    pub(crate) employer: User,
    pub(crate) jobseeker: User,
    pub(crate) jobs: Vec<Job>,
    pub(crate) application: Application,
}

fn demo_user(username: &str, name: &str, role: UserRole) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: DEMO_PASSWORD.to_string(),
        email: format!("{username}@board.example"),
        name: name.to_string(),
        role,
        company_name: (role == UserRole::Employer).then(|| "Northwind Robotics".to_string()),
        location: Some("Rotterdam".to_string()),
        skills: match role {
            UserRole::Jobseeker => vec!["rust".to_string(), "postgres".to_string()],
            _ => Vec::new(),
        },
        resume: None,
        bio: None,
    }
}

fn demo_job(
    employer: &User,
    title: &str,
    job_type: JobType,
    level: ExperienceLevel,
    deadline_days: i64,
) -> NewJob {
    NewJob {
        title: title.to_string(),
        company: employer
            .company_name
            .clone()
            .unwrap_or_else(|| employer.name.clone()),
        description: format!("{title} for the warehouse automation platform"),
        location: "Rotterdam, NL".to_string(),
        job_type,
        salary: Some("EUR 60k-85k".to_string()),
        requirements: Some("Rust, Tokio, PostgreSQL".to_string()),
        experience_level: Some(level),
        posted_by: employer.id,
        deadline: Some(Utc::now() + Duration::days(deadline_days)),
    }
}

/// Populate a board with one account per role, three listings, and one application.
pub(crate) fn seed_demo_board<S: BoardStore>(board: &JobBoard<S>) -> Result<DemoSeed, BoardError> {
    let admin = board
        .accounts
        .create(demo_user("admin", "Ada Admin", UserRole::Admin))?
        .record;
    let employer = board
        .accounts
        .create(demo_user("northwind", "Nora Hiring", UserRole::Employer))?
        .record;
    let jobseeker = board
        .accounts
        .create(demo_user("casey", "Casey Seeker", UserRole::Jobseeker))?
        .record;

    let employer = board
        .moderation
        .set_employer_approval(admin.id, employer.id, true)?
        .record;

    let mut jobs = Vec::new();
    for (title, job_type, level, deadline) in [
        ("Backend Engineer", JobType::FullTime, ExperienceLevel::Mid, 30),
        ("Robotics Intern", JobType::Internship, ExperienceLevel::Entry, 45),
        ("Crypto Trading Guru", JobType::Contract, ExperienceLevel::Executive, 7),
    ] {
        let job = board
            .jobs
            .post(employer.id, demo_job(&employer, title, job_type, level, deadline))?
            .record;
        jobs.push(job);
    }

    if let Some(suspicious) = jobs.last_mut() {
        *suspicious = board
            .moderation
            .set_job_status(admin.id, suspicious.id, JobStatus::Flagged)?
            .record;
    }

    let application = board
        .applications
        .apply(
            jobseeker.id,
            NewApplication {
                job_id: jobs[0].id,
                user_id: jobseeker.id,
                cover_letter: Some("I have shipped Tokio services to production.".to_string()),
            },
        )?
        .record;

    debug!(jobs = jobs.len(), "demo board populated");
    Ok(DemoSeed {
        admin,
        employer,
        jobseeker,
        jobs,
        application,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard::board::jobs::JobSearch;
    use jobboard::MemoryStore;

    #[test]
    fn seeded_board_hides_the_flagged_listing() {
        let board = JobBoard::new(Arc::new(MemoryStore::new()));
        let seed = seed_demo_board(&board).expect("seed succeeds");

        assert!(seed.employer.is_approved);
        assert_eq!(seed.jobs.len(), 3);
        assert_eq!(seed.jobs[2].status, JobStatus::Flagged);

        let visible = board
            .jobs
            .search(&JobSearch::default())
            .expect("search runs");
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|job| job.status == JobStatus::Active));
        assert_eq!(seed.application.job_id, seed.jobs[0].id);
    }
}
