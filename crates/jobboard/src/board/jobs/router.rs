use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde_json::Value;

use super::domain::{JobId, JobStatus};
use super::schema::{JobSearch, NewJob};
use crate::board::actor::Actor;
use crate::board::error::BoardError;
use crate::board::router::{mutation_response, BoardState};
use crate::board::validation::StatusUpdate;
use crate::board::BoardStore;

pub(crate) fn job_routes<S: BoardStore>() -> Router<BoardState<S>> {
    Router::new()
        .route("/jobs", get(search_handler::<S>).post(post_handler::<S>))
        .route("/jobs/:job_id", get(job_handler::<S>))
        .route("/jobs/:job_id/status", patch(status_handler::<S>))
        .route("/me/jobs", get(my_jobs_handler::<S>))
}

pub(crate) async fn search_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let search = match JobSearch::from_pairs(
        pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    ) {
        Ok(search) => search,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board.jobs.search(&search) {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn post_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Json(payload): Json<Value>,
) -> Response {
    let new_job = match NewJob::from_json(&payload) {
        Ok(new_job) => new_job,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board.jobs.post(actor, new_job) {
        Ok(mutation) => mutation_response(StatusCode::CREATED, mutation),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn job_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    viewer: Option<Actor>,
    Path(job_id): Path<u64>,
) -> Response {
    let viewer = viewer.map(|Actor(id)| id);
    match board.jobs.view(viewer, JobId(job_id)) {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn status_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Path(job_id): Path<u64>,
    Json(payload): Json<Value>,
) -> Response {
    let update = match StatusUpdate::<JobStatus>::from_json(&payload) {
        Ok(update) => update,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board.jobs.set_status(actor, JobId(job_id), update.status) {
        Ok(mutation) => mutation_response(StatusCode::OK, mutation),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn my_jobs_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.jobs.posted_by(actor) {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(error) => error.into_response(),
    }
}
