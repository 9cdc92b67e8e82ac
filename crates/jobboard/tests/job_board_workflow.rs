//! End-to-end board scenarios driven through the public router: registration, employer
//! approval, posting, applying, review, and moderation, checking the refresh hints on the way.

mod common {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use jobboard::board::users::{NewUser, UserRole};
    use jobboard::board::{REFRESH_VIEWS_HEADER, USER_ID_HEADER};
    use jobboard::{board_router, JobBoard, MemoryStore};

    pub(super) struct Harness {
        board: Arc<JobBoard<MemoryStore>>,
    }

    pub(super) struct Reply {
        pub(super) status: StatusCode,
        pub(super) refresh: Vec<String>,
        pub(super) body: Value,
    }

    impl Harness {
        pub(super) fn new() -> Self {
            Self {
                board: Arc::new(JobBoard::new(Arc::new(MemoryStore::new()))),
            }
        }

        pub(super) async fn call(
            &self,
            method: &str,
            uri: &str,
            actor: Option<u64>,
            body: Option<Value>,
        ) -> Reply {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(actor) = actor {
                builder = builder.header(USER_ID_HEADER, actor.to_string());
            }
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).expect("serialize")))
                    .expect("request"),
                None => builder.body(Body::empty()).expect("request"),
            };
            let response = board_router(self.board.clone())
                .oneshot(request)
                .await
                .expect("route executes");
            Reply::read(response).await
        }

        pub(super) async fn register(&self, username: &str, role: &str) -> u64 {
            let mut payload = json!({
                "username": username,
                "password": "s3cret-pass",
                "confirmPassword": "s3cret-pass",
                "email": format!("{username}@example.com"),
                "name": format!("{username} example"),
                "role": role,
            });
            if role == "employer" {
                payload["companyName"] = json!(format!("{username} GmbH"));
            }
            let reply = self
                .call("POST", "/api/v1/auth/register", None, Some(payload))
                .await;
            assert_eq!(reply.status, StatusCode::CREATED, "{:?}", reply.body);
            reply.body["id"].as_u64().expect("numeric id")
        }
    }

    impl Harness {
        /// Administrators never come through registration; they are created in the store.
        pub(super) fn provision_admin(&self, username: &str) -> u64 {
            let admin = NewUser {
                username: username.to_string(),
                password: "s3cret-pass".to_string(),
                email: format!("{username}@example.com"),
                name: format!("{username} example"),
                role: UserRole::Admin,
                company_name: None,
                location: None,
                skills: Vec::new(),
                resume: None,
                bio: None,
            };
            self.board
                .accounts
                .create(admin)
                .expect("admin provisioned")
                .record
                .id
                .0
        }
    }

    impl Reply {
        async fn read(response: Response) -> Self {
            let status = response.status();
            let refresh = response
                .headers()
                .get(REFRESH_VIEWS_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(|raw| raw.split(',').map(str::to_string).collect())
                .unwrap_or_default();
            let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
                .await
                .expect("read body");
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("json body")
            };
            Self {
                status,
                refresh,
                body,
            }
        }

        pub(super) fn refreshes(&self, view: &str) -> bool {
            self.refresh.iter().any(|entry| entry == view)
        }
    }
}

use axum::http::StatusCode;
use common::Harness;
use serde_json::json;

fn job_body(posted_by: u64, title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "company": "Acme GmbH",
        "description": "Build the hiring pipeline in Rust",
        "location": "Hamburg",
        "type": "contract",
        "experienceLevel": "senior",
        "requirements": "Rust, Postgres, Kubernetes",
        "postedBy": posted_by,
    })
}

#[tokio::test]
async fn employer_waits_for_approval_before_posting() {
    let harness = Harness::new();
    let admin = harness.provision_admin("root");
    let employer = harness.register("acme", "employer").await;

    let pending = harness
        .call("GET", "/api/v1/admin/employers/pending", Some(admin), None)
        .await;
    assert_eq!(pending.body[0]["id"], employer);

    let blocked = harness
        .call(
            "POST",
            "/api/v1/jobs",
            Some(employer),
            Some(job_body(employer, "Rust Contractor")),
        )
        .await;
    assert_eq!(blocked.status, StatusCode::FORBIDDEN);

    let approval = harness
        .call(
            "PATCH",
            &format!("/api/v1/admin/users/{employer}/approval"),
            Some(admin),
            Some(json!({ "approved": true })),
        )
        .await;
    assert_eq!(approval.status, StatusCode::OK);
    assert!(approval.refreshes("admin-pending-employers"));
    assert!(approval.refreshes(&format!("profile:{employer}")));

    let posted = harness
        .call(
            "POST",
            "/api/v1/jobs",
            Some(employer),
            Some(job_body(employer, "Rust Contractor")),
        )
        .await;
    assert_eq!(posted.status, StatusCode::CREATED);
    assert!(posted.refreshes("job-search"));
    assert!(posted.refreshes(&format!("employer-jobs:{employer}")));

    let pending = harness
        .call("GET", "/api/v1/admin/employers/pending", Some(admin), None)
        .await;
    assert_eq!(pending.body, json!([]));
}

#[tokio::test]
async fn seeker_applies_and_employer_reviews() {
    let harness = Harness::new();
    let admin = harness.provision_admin("root");
    let employer = harness.register("acme", "employer").await;
    let seeker = harness.register("casey", "jobseeker").await;
    harness
        .call(
            "PATCH",
            &format!("/api/v1/admin/users/{employer}/approval"),
            Some(admin),
            Some(json!({ "approved": true })),
        )
        .await;

    let job = harness
        .call(
            "POST",
            "/api/v1/jobs",
            Some(employer),
            Some(job_body(employer, "Rust Contractor")),
        )
        .await;
    let job_id = job.body["id"].as_u64().expect("job id");

    let applied = harness
        .call(
            "POST",
            "/api/v1/applications",
            Some(seeker),
            Some(json!({ "jobId": job_id, "userId": seeker, "coverLetter": "Ready to start." })),
        )
        .await;
    assert_eq!(applied.status, StatusCode::CREATED);
    assert_eq!(applied.body["status"], "pending");
    assert!(applied.refreshes(&format!("dashboard:{employer}")));
    let application_id = applied.body["id"].as_u64().expect("application id");

    let again = harness
        .call(
            "POST",
            "/api/v1/applications",
            Some(seeker),
            Some(json!({ "jobId": job_id, "userId": seeker })),
        )
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let reviewed = harness
        .call(
            "PATCH",
            &format!("/api/v1/applications/{application_id}/status"),
            Some(employer),
            Some(json!({ "status": "accepted" })),
        )
        .await;
    assert_eq!(reviewed.status, StatusCode::OK);
    assert!(reviewed.refreshes(&format!("user-applications:{seeker}")));

    let dashboard = harness
        .call("GET", "/api/v1/me/dashboard", Some(seeker), None)
        .await;
    assert_eq!(dashboard.body["role"], "jobseeker");
    assert_eq!(dashboard.body["applications"]["interviewed"], 1);

    let employer_dashboard = harness
        .call("GET", "/api/v1/me/dashboard", Some(employer), None)
        .await;
    assert_eq!(employer_dashboard.body["jobs"]["active"], 1);
    assert_eq!(employer_dashboard.body["applications"]["total"], 1);
}

#[tokio::test]
async fn flagged_listing_leaves_search_until_restored() {
    let harness = Harness::new();
    let admin = harness.provision_admin("root");
    let employer = harness.register("acme", "employer").await;
    harness
        .call(
            "PATCH",
            &format!("/api/v1/admin/users/{employer}/approval"),
            Some(admin),
            Some(json!({ "approved": true })),
        )
        .await;
    let job = harness
        .call(
            "POST",
            "/api/v1/jobs",
            Some(employer),
            Some(job_body(employer, "Rust Contractor")),
        )
        .await;
    let job_id = job.body["id"].as_u64().expect("job id");

    let flagged = harness
        .call(
            "PATCH",
            &format!("/api/v1/admin/jobs/{job_id}/status"),
            Some(admin),
            Some(json!({ "status": "flagged" })),
        )
        .await;
    assert!(flagged.refreshes("admin-flagged-jobs"));

    let search = harness.call("GET", "/api/v1/jobs", None, None).await;
    assert_eq!(search.body, json!([]));

    let queue = harness
        .call("GET", "/api/v1/admin/jobs/flagged", Some(admin), None)
        .await;
    assert_eq!(queue.body[0]["id"], job_id);

    let restored = harness
        .call(
            "PATCH",
            &format!("/api/v1/admin/jobs/{job_id}/status"),
            Some(admin),
            Some(json!({ "status": "active" })),
        )
        .await;
    assert_eq!(restored.body["status"], "active");

    let repeat = harness
        .call(
            "PATCH",
            &format!("/api/v1/admin/jobs/{job_id}/status"),
            Some(admin),
            Some(json!({ "status": "active" })),
        )
        .await;
    assert_eq!(repeat.status, StatusCode::OK);
    assert!(repeat.refresh.is_empty());
    assert_eq!(repeat.body["updatedAt"], restored.body["updatedAt"]);

    let search = harness
        .call("GET", "/api/v1/jobs?type=contract&location=hamburg", None, None)
        .await;
    assert_eq!(search.body.as_array().map(Vec::len), Some(1));

    let stats = harness
        .call("GET", "/api/v1/admin/stats", Some(admin), None)
        .await;
    assert_eq!(stats.body["jobs"]["active"], 1);
    assert_eq!(stats.body["pendingEmployers"], 0);
}

#[tokio::test]
async fn profile_edits_raise_completion() {
    let harness = Harness::new();
    let seeker = harness.register("casey", "jobseeker").await;

    let before = harness
        .call("GET", "/api/v1/me/profile-completion", Some(seeker), None)
        .await;
    assert_eq!(before.body["percent"], 33);

    let updated = harness
        .call(
            "PATCH",
            "/api/v1/me",
            Some(seeker),
            Some(json!({
                "location": "Porto",
                "bio": "Backend developer",
                "skills": ["rust", "sql"],
                "resume": "https://cv.example.com/casey",
            })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert!(updated.refreshes(&format!("profile:{seeker}")));
    assert_eq!(updated.body["skills"], json!(["rust", "sql"]));

    let after = harness
        .call("GET", "/api/v1/me/profile-completion", Some(seeker), None)
        .await;
    assert_eq!(after.body["percent"], 100);
    assert_eq!(after.body["missingFields"], json!([]));
}
