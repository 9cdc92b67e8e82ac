use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::Value;

use super::domain::{ApplicationId, ApplicationStatus};
use super::schema::NewApplication;
use crate::board::actor::Actor;
use crate::board::error::BoardError;
use crate::board::jobs::JobId;
use crate::board::router::{mutation_response, BoardState};
use crate::board::validation::StatusUpdate;
use crate::board::BoardStore;

pub(crate) fn application_routes<S: BoardStore>() -> Router<BoardState<S>> {
    Router::new()
        .route("/applications", post(apply_handler::<S>))
        .route(
            "/applications/:application_id/status",
            patch(status_handler::<S>),
        )
        .route("/jobs/:job_id/applications", get(job_applications_handler::<S>))
        .route("/me/applications", get(my_applications_handler::<S>))
}

pub(crate) async fn apply_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Json(payload): Json<Value>,
) -> Response {
    let application = match NewApplication::from_json(&payload) {
        Ok(application) => application,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board.applications.apply(actor, application) {
        Ok(mutation) => mutation_response(StatusCode::CREATED, mutation),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn status_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Path(application_id): Path<u64>,
    Json(payload): Json<Value>,
) -> Response {
    let update = match StatusUpdate::<ApplicationStatus>::from_json(&payload) {
        Ok(update) => update,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board
        .applications
        .set_status(actor, ApplicationId(application_id), update.status)
    {
        Ok(mutation) => mutation_response(StatusCode::OK, mutation),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn job_applications_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Path(job_id): Path<u64>,
) -> Response {
    match board.applications.list_for_job(actor, JobId(job_id)) {
        Ok(applications) => (StatusCode::OK, Json(applications)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn my_applications_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.applications.list_for_user(actor) {
        Ok(applications) => (StatusCode::OK, Json(applications)).into_response(),
        Err(error) => error.into_response(),
    }
}
