use crate::{
    error::{self, Result},
    extractors::{Json, Path},
    utils::Question,
    StateTrait,
};
use axum::extract::State;
use entity::{categories, questions};
use sea_orm::{EntityTrait, QueryOrder};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    category: i32,
    current_category: String,
}

pub async fn list_category_questions<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i64>,
) -> Result<Json<Response>> {
    let Ok(id) = i32::try_from(id) else {
        return Err(error::CATEGORY_NOT_FOUND);
    };

    let Some(category) = categories::Entity::find_by_id(id).one(state.db()).await? else {
        return Err(error::CATEGORY_NOT_FOUND);
    };

    let questions = questions::Entity::find_in_category(category.id)
        .order_by_asc(questions::Column::Id)
        .into_model::<Question>()
        .all(state.db())
        .await?;

    Ok(Json(Response {
        success: true,
        total_questions: questions.len(),
        questions,
        category: category.id,
        current_category: category.kind,
    }))
}
