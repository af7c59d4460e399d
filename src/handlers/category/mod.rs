mod list;
mod questions;

use crate::StateTrait;
use axum::{routing::get, Router};

/// Routes for categories
///
/// GET /categories
/// GET /categories/{id}/questions
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/categories", get(list::list_categories::<S>))
        .route(
            "/categories/{id}/questions",
            get(questions::list_category_questions::<S>),
        )
}
