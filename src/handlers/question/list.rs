use crate::{
    error::{self, Result},
    extractors::{Json, Query},
    utils::{category_map, CategoryMap, Pagination, Question},
    StateTrait,
};
use axum::extract::State;
use entity::questions;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<Question>,
    total_questions: u64,
    categories: CategoryMap,
    current_category: Option<String>,
}

pub async fn list_questions<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Response>> {
    let per_page = state.config().questions_per_page;

    let paginator = questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .into_model::<Question>()
        .paginate(state.db(), per_page);

    let total_questions = paginator.num_items().await?;

    let Some(page) = pagination.index_within(total_questions, per_page) else {
        return Err(error::PAGE_NOT_FOUND);
    };

    let questions = paginator.fetch_page(page).await?;

    if questions.is_empty() {
        return Err(error::PAGE_NOT_FOUND);
    }

    let categories = category_map(state.db()).await?;

    Ok(Json(Response {
        success: true,
        questions,
        total_questions,
        categories,
        current_category: None,
    }))
}
