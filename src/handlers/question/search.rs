use crate::{
    error::Result,
    extractors::Json,
    utils::{question_contains, Question},
    StateTrait,
};
use axum::extract::State;
use entity::questions;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

pub async fn search_questions<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let questions = questions::Entity::find()
        .filter(question_contains(&request.search_term))
        .order_by_asc(questions::Column::Id)
        .into_model::<Question>()
        .all(state.db())
        .await?;

    debug!(
        "search for {:?} matched {} questions",
        request.search_term,
        questions.len()
    );

    Ok(Json(Response {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}
