mod category;
mod question;
mod quiz;

use crate::{error, state::StateTrait, Error};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .merge(category::routes::<S>())
        .merge(question::routes::<S>())
        .route("/quizzes", post(quiz::next_question::<S>))
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(err) = state.db().execute_unprepared("select 1").await {
        error!("liveness check failed: {err}");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}

async fn not_found() -> Error<'static> {
    error::RESOURCE_NOT_FOUND
}

async fn method_not_allowed() -> Error<'static> {
    error::METHOD_NOT_ALLOWED
}
