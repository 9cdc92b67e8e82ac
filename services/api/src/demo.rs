use crate::infra::{seed_demo_board, DemoSeed};
use clap::{Args, ValueEnum};
use jobboard::board::applications::{ApplicationStatus, NewApplication};
use jobboard::board::insights::{application_badge, job_badge, rating_stars};
use jobboard::board::jobs::{JobSearch, NewJob};
use jobboard::board::users::{LoginPayload, NewUser, RegisterPayload};
use jobboard::board::validation::{FieldError, ValidationErrors, WireEnum};
use jobboard::board::{BoardError, Mutation};
use jobboard::error::AppError;
use jobboard::{JobBoard, MemoryStore};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Employer rating shown as stars in the summary (0.0 to 5.0)
    #[arg(long, default_value_t = 4.2)]
    pub(crate) rating: f32,
    /// Skip the admin moderation portion of the demo
    #[arg(long)]
    pub(crate) skip_moderation: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Write schema to validate against
    #[arg(long, value_enum)]
    pub(crate) schema: SchemaKind,
    /// Path to a JSON payload
    #[arg(long)]
    pub(crate) file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SchemaKind {
    User,
    Register,
    Login,
    Job,
    Application,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    schema: SchemaKind,
    valid: bool,
    fields: &'a [FieldError],
}

pub(crate) fn validate_payload(schema: SchemaKind, payload: &Value) -> Result<(), ValidationErrors> {
    match schema {
        SchemaKind::User => NewUser::from_json(payload).map(drop),
        SchemaKind::Register => RegisterPayload::from_json(payload).map(drop),
        SchemaKind::Login => LoginPayload::from_json(payload).map(drop),
        SchemaKind::Job => NewJob::from_json(payload).map(drop),
        SchemaKind::Application => NewApplication::from_json(payload).map(drop),
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs { schema, file } = args;
    let raw = std::fs::read_to_string(&file)?;
    let payload: Value = serde_json::from_str(&raw)?;

    let outcome = validate_payload(schema, &payload);
    let fields = match &outcome {
        Ok(()) => &[][..],
        Err(errors) => errors.fields.as_slice(),
    };
    let report = CheckReport {
        schema,
        valid: outcome.is_ok(),
        fields,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    outcome.map_err(|errors| AppError::from(BoardError::from(errors)))
}

fn stars(rating: f32) -> String {
    rating_stars(rating)
        .iter()
        .map(|filled| if *filled { '*' } else { '.' })
        .collect()
}

fn print_refresh<T>(label: &str, mutation: &Mutation<T>) {
    if mutation.is_noop() {
        println!("  {label}: no change");
    } else {
        let views: Vec<String> = mutation.refresh.iter().map(ToString::to_string).collect();
        println!("  {label}: refresh {}", views.join(", "));
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        rating,
        skip_moderation,
    } = args;

    println!("Job board demo");
    let board = JobBoard::new(Arc::new(MemoryStore::new()));
    let DemoSeed {
        admin,
        employer,
        jobseeker,
        jobs,
        application,
    } = seed_demo_board(&board)?;

    for user in [&admin, &employer, &jobseeker] {
        println!(
            "- {} ({}) approved={}",
            user.username,
            user.role.label(),
            user.is_approved
        );
    }
    println!(
        "- {} rating {:.1} [{}]",
        employer.company_name.as_deref().unwrap_or(&employer.name),
        rating,
        stars(rating)
    );

    println!("\nPublic search (active listings, newest first)");
    let visible = board.jobs.search(&JobSearch::default())?;
    for job in &visible {
        let badge = job_badge(job.status.as_str());
        println!(
            "  #{} {} | {} | {} | [{}] requirements: {}",
            job.id,
            job.title,
            job.job_type.label(),
            job.experience_level
                .map(|level| level.label())
                .unwrap_or("Any level"),
            badge.map(|badge| badge.label).unwrap_or_default(),
            job.requirement_list().join(" / ")
        );
    }
    println!(
        "  ({} listing(s) hidden from search)",
        jobs.len().saturating_sub(visible.len())
    );

    println!("\nApplication review");
    let duplicate = board.applications.apply(
        jobseeker.id,
        NewApplication {
            job_id: application.job_id,
            user_id: jobseeker.id,
            cover_letter: None,
        },
    );
    if let Err(err) = duplicate {
        println!("  Second application rejected: {err}");
    }
    for status in [ApplicationStatus::Reviewed, ApplicationStatus::Interviewed] {
        let mutation = board
            .applications
            .set_status(employer.id, application.id, status)?;
        let badge = application_badge(mutation.record.status.as_str());
        print_refresh(
            badge.map(|badge| badge.label).unwrap_or("Unknown"),
            &mutation,
        );
    }

    if !skip_moderation {
        println!("\nModeration");
        for job in board.moderation.flagged_jobs(admin.id)? {
            let first = board.moderation.remove_job(admin.id, job.id)?;
            print_refresh(&format!("remove #{} {}", job.id, job.title), &first);
            let second = board.moderation.remove_job(admin.id, job.id)?;
            print_refresh(&format!("remove #{} again", job.id), &second);
        }
    }

    println!("\nDashboards");
    for user in [&jobseeker, &employer, &admin] {
        let dashboard = board.dashboard(user.id)?;
        println!("- {}: {}", user.username, serde_json::to_string(&dashboard)?);
        let completion = board.accounts.profile_completion(user.id)?;
        println!(
            "  profile {}% complete (missing: {})",
            completion.percent,
            completion.missing_fields.join(", ")
        );
    }

    Ok(())
}
