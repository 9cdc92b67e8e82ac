use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;

use super::views::{Mutation, REFRESH_VIEWS_HEADER};
use super::{applications, jobs, moderation, users, BoardStore, JobBoard};

pub const API_PREFIX: &str = "/api/v1";

pub(crate) type BoardState<S> = Arc<JobBoard<S>>;

/// Router builder exposing every board endpoint under `/api/v1`.
pub fn board_router<S: BoardStore>(board: Arc<JobBoard<S>>) -> Router {
    let api = Router::new()
        .merge(users::router::account_routes::<S>())
        .merge(jobs::router::job_routes::<S>())
        .merge(applications::router::application_routes::<S>())
        .merge(moderation::router::moderation_routes::<S>());

    Router::new().nest(API_PREFIX, api).with_state(board)
}

/// JSON body of the written record, with the stale views in the refresh header.
pub(crate) fn mutation_response<T: Serialize>(status: StatusCode, mutation: Mutation<T>) -> Response {
    let header = mutation.refresh_header();
    let mut response = (status, Json(mutation.record)).into_response();
    if let Some(value) = header {
        response.headers_mut().insert(REFRESH_VIEWS_HEADER, value);
    }
    response
}
