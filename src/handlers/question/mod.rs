mod create;
mod delete;
mod list;
mod search;

use crate::StateTrait;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Routes for question management
///
/// GET    /questions?page=N
/// POST   /questions        (search)
/// DELETE /questions/{id}
/// POST   /submit
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/questions",
            get(list::list_questions::<S>).post(search::search_questions::<S>),
        )
        .route("/questions/{id}", delete(delete::delete_question::<S>))
        .route("/submit", post(create::create_question::<S>))
}
