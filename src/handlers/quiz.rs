use crate::{
    error::{self, Result},
    extractors::Json,
    utils::Question,
    StateTrait,
};
use axum::extract::State;
use entity::{categories, questions};
use rand::Rng;
use sea_orm::{
    AccessMode, ColumnTrait, EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use serde::{Deserialize, Serialize};

/// Category id standing for every category.
const ALL_CATEGORIES: i32 = 0;

#[derive(Deserialize)]
pub struct QuizCategory {
    id: i32,
}

#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    previous_questions: Vec<i32>,
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    question: Option<Question>,
}

/// Picks a random question the client has not seen yet. `question` is
/// `null` once the category is exhausted.
pub async fn next_question<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let category = request
        .quiz_category
        .map_or(ALL_CATEGORIES, |category| category.id);

    // The count and the fetch at a random offset must see the same rows.
    let txn = state
        .db()
        .begin_with_config(
            Some(IsolationLevel::RepeatableRead),
            Some(AccessMode::ReadOnly),
        )
        .await?;

    let mut select = questions::Entity::find();

    if category != ALL_CATEGORIES {
        let exists = categories::Entity::find_by_id(category)
            .one(&txn)
            .await?
            .is_some();

        if !exists {
            return Err(error::CATEGORY_NOT_FOUND);
        }

        select = select.filter(questions::Column::Category.eq(category));
    }

    if !request.previous_questions.is_empty() {
        select = select.filter(questions::Column::Id.is_not_in(request.previous_questions));
    }

    let remaining = select.clone().count(&txn).await?;

    if remaining == 0 {
        debug!("quiz exhausted for category {category}");
        return Ok(Json(Response {
            success: true,
            question: None,
        }));
    }

    let offset = state.rng().gen_range(0..remaining);

    let question = select
        .order_by_asc(questions::Column::Id)
        .offset(offset)
        .limit(1)
        .into_model::<Question>()
        .one(&txn)
        .await?;

    txn.commit().await?;

    Ok(Json(Response {
        success: true,
        question,
    }))
}
