use std::sync::Arc;

use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::board::applications::{
    Application, ApplicationId, ApplicationRepository, ApplicationStatus,
};
use crate::board::error::RepositoryError;
use crate::board::jobs::{Job, JobId, JobRepository, JobStatus, JobType};
use crate::board::users::{User, UserId, UserRepository, UserRole};
use crate::board::{board_router, JobBoard, MemoryStore, USER_ID_HEADER};

pub(super) fn build_board() -> (Arc<JobBoard<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let board = Arc::new(JobBoard::new(store.clone()));
    (board, store)
}

/// Store an account directly, skipping password hashing.
pub(super) fn seed_user(store: &MemoryStore, username: &str, role: UserRole, approved: bool) -> User {
    let user = User {
        id: store.next_user_id().expect("user id"),
        username: username.to_string(),
        password: "not-a-real-hash".to_string(),
        email: format!("{username}@example.com"),
        name: format!("{username} tester"),
        role,
        company_name: (role == UserRole::Employer).then(|| format!("{username} Inc")),
        location: None,
        skills: Vec::new(),
        resume: None,
        bio: None,
        is_approved: approved,
        created_at: Utc::now(),
    };
    store.insert_user(user).expect("user stored")
}

pub(super) fn seed_admin(store: &MemoryStore) -> User {
    seed_user(store, "root", UserRole::Admin, true)
}

pub(super) fn seed_employer(store: &MemoryStore, username: &str, approved: bool) -> User {
    seed_user(store, username, UserRole::Employer, approved)
}

pub(super) fn seed_seeker(store: &MemoryStore, username: &str) -> User {
    seed_user(store, username, UserRole::Jobseeker, true)
}

/// Store a listing directly. `age_minutes` pushes `createdAt` into the past.
pub(super) fn seed_job(
    store: &MemoryStore,
    owner: UserId,
    title: &str,
    status: JobStatus,
    age_minutes: i64,
) -> Job {
    let created_at = Utc::now() - Duration::minutes(age_minutes);
    let job = Job {
        id: store.next_job_id().expect("job id"),
        title: title.to_string(),
        company: "Ferrous Labs".to_string(),
        description: format!("{title} working on distributed systems"),
        location: "Berlin, Germany".to_string(),
        job_type: JobType::FullTime,
        salary: Some("80k-100k".to_string()),
        requirements: Some("Rust, Tokio".to_string()),
        experience_level: None,
        posted_by: owner,
        status,
        created_at,
        updated_at: created_at,
        deadline: None,
    };
    store.insert_job(job).expect("job stored")
}

pub(super) fn seed_application(
    store: &MemoryStore,
    job: JobId,
    user: UserId,
    status: ApplicationStatus,
) -> Application {
    let now = Utc::now();
    let application = Application {
        id: store.next_application_id().expect("application id"),
        job_id: job,
        user_id: user,
        status,
        cover_letter: None,
        applied_at: now,
        updated_at: now,
    };
    store
        .insert_application(application)
        .expect("application stored")
}

pub(super) fn user_payload(username: &str, role: &str) -> Value {
    json!({
        "username": username,
        "password": "s3cret-pass",
        "email": format!("{username}@example.com"),
        "name": "Casey Example",
        "role": role,
    })
}

pub(super) fn job_payload(posted_by: UserId) -> Value {
    json!({
        "title": "Backend Engineer",
        "company": "Ferrous Labs",
        "description": "Own the listing pipeline",
        "location": "Remote",
        "type": "full-time",
        "salary": "90k",
        "requirements": "Rust, SQL",
        "experienceLevel": "mid",
        "postedBy": posted_by.0,
    })
}

pub(super) struct UnavailableStore;

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

impl UserRepository for UnavailableStore {
    fn next_user_id(&self) -> Result<UserId, RepositoryError> {
        Err(offline())
    }

    fn insert_user(&self, _user: User) -> Result<User, RepositoryError> {
        Err(offline())
    }

    fn update_user(&self, _user: User) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn fetch_user(&self, _id: UserId) -> Result<Option<User>, RepositoryError> {
        Err(offline())
    }

    fn find_user_by_username(&self, _username: &str) -> Result<Option<User>, RepositoryError> {
        Err(offline())
    }

    fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
        Err(offline())
    }

    fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        Err(offline())
    }
}

impl JobRepository for UnavailableStore {
    fn next_job_id(&self) -> Result<JobId, RepositoryError> {
        Err(offline())
    }

    fn insert_job(&self, _job: Job) -> Result<Job, RepositoryError> {
        Err(offline())
    }

    fn update_job(&self, _job: Job) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn fetch_job(&self, _id: JobId) -> Result<Option<Job>, RepositoryError> {
        Err(offline())
    }

    fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Err(offline())
    }
}

impl ApplicationRepository for UnavailableStore {
    fn next_application_id(&self) -> Result<ApplicationId, RepositoryError> {
        Err(offline())
    }

    fn insert_application(
        &self,
        _application: Application,
    ) -> Result<Application, RepositoryError> {
        Err(offline())
    }

    fn update_application(&self, _application: Application) -> Result<(), RepositoryError> {
        Err(offline())
    }

    fn fetch_application(
        &self,
        _id: ApplicationId,
    ) -> Result<Option<Application>, RepositoryError> {
        Err(offline())
    }

    fn list_applications(&self) -> Result<Vec<Application>, RepositoryError> {
        Err(offline())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Drive one request through the full board router.
pub(super) async fn send(
    board: Arc<JobBoard<MemoryStore>>,
    method: &str,
    uri: &str,
    actor: Option<UserId>,
    body: Option<Value>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        request = request.header(USER_ID_HEADER, actor.0.to_string());
    }
    let request = match body {
        Some(body) => request
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(
                serde_json::to_vec(&body).expect("serialize body"),
            ))
            .expect("request"),
        None => request.body(axum::body::Body::empty()).expect("request"),
    };
    board_router(board)
        .oneshot(request)
        .await
        .expect("route executes")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status code");
}
