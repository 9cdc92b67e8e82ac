use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::domain::UserId;
use super::schema::{LoginPayload, ProfileUpdate, RegisterPayload};
use crate::board::actor::Actor;
use crate::board::error::BoardError;
use crate::board::router::{mutation_response, BoardState};
use crate::board::BoardStore;

pub(crate) fn account_routes<S: BoardStore>() -> Router<BoardState<S>> {
    Router::new()
        .route("/auth/register", post(register_handler::<S>))
        .route("/auth/login", post(login_handler::<S>))
        .route("/users/:user_id", get(profile_handler::<S>))
        .route("/me", get(me_handler::<S>).patch(update_me_handler::<S>))
        .route("/me/profile-completion", get(completion_handler::<S>))
        .route("/me/dashboard", get(dashboard_handler::<S>))
}

pub(crate) async fn register_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Json(payload): Json<Value>,
) -> Response {
    let registration = match RegisterPayload::from_json(&payload) {
        Ok(registration) => registration,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board.accounts.register(registration) {
        Ok(mutation) => mutation_response(StatusCode::CREATED, mutation),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn login_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Json(payload): Json<Value>,
) -> Response {
    let credentials = match LoginPayload::from_json(&payload) {
        Ok(credentials) => credentials,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board.accounts.login(credentials) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn profile_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Path(user_id): Path<u64>,
) -> Response {
    match board.accounts.get(UserId(user_id)) {
        Ok(user) => (StatusCode::OK, Json(user.public_view())).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn me_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.accounts.resolve_actor(actor) {
        Ok(user) => (StatusCode::OK, Json(user.public_view())).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn update_me_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
    Json(payload): Json<Value>,
) -> Response {
    let update = match ProfileUpdate::from_json(&payload) {
        Ok(update) => update,
        Err(errors) => return BoardError::from(errors).into_response(),
    };
    match board.accounts.update_profile(actor, update) {
        Ok(mutation) => mutation_response(StatusCode::OK, mutation.map(|user| user.public_view())),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn completion_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.accounts.profile_completion(actor) {
        Ok(completion) => (StatusCode::OK, Json(completion)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn dashboard_handler<S: BoardStore>(
    State(board): State<BoardState<S>>,
    Actor(actor): Actor,
) -> Response {
    match board.dashboard(actor) {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(error) => error.into_response(),
    }
}
