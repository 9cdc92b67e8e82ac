use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde_json::Value;

use crate::board::actor::Actor;
use crate::board::error::BoardError;
use crate::board::jobs::{JobId, JobStatus};
use crate::board::router::{mutation_response, BoardState};
use crate::board::users::{ApprovalUpdate, UserId};
use crate::board::validation::StatusUpdate;
use crate::board::BoardStore;

pub(crate) fn moderation_routes<S: BoardStore>() -> Router<BoardState<S>> {
    Router::new()
        .route("/admin/users", get(users_handler::<S>))
        .route("/admin/users/:user_id/approval", patch(approval_handler::<S>))
        .route("/admin/employers/pending", get(pending_employers_handler::<S>))
        .route("/admin/jobs/flagged", get(flagged_jobs_handler::<S>))
        .route("/admin/jobs/:job_id/status", patch(job_status_handler::<S>))
        .route("/admin/stats", get(stats_handler::<S>))
}

pub(crate) async fn users_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.moderation.list_users(actor) {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn approval_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Path(user_id): Path<u64>,
    Json(payload): Json<Value>,
) -> Response {
    let update = match ApprovalUpdate::from_json(&payload) {
        Ok(update) => update,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board
        .moderation
        .set_employer_approval(actor, UserId(user_id), update.approved)
    {
        Ok(mutation) => mutation_response(StatusCode::OK, mutation.map(|user| user.public_view())),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn pending_employers_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.moderation.pending_employers(actor) {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn flagged_jobs_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.moderation.flagged_jobs(actor) {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn job_status_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Path(job_id): Path<u64>,
    Json(payload): Json<Value>,
) -> Response {
    let update = match StatusUpdate::<JobStatus>::from_json(&payload) {
        Ok(update) => update,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board
        .moderation
        .set_job_status(actor, JobId(job_id), update.status)
    {
        Ok(mutation) => mutation_response(StatusCode::OK, mutation),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn stats_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.moderation.stats(actor) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error.into_response(),
    }
}
