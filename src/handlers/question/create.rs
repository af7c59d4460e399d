use crate::{
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::extract::State;
use entity::questions::{self, constraints::FK_QUESTIONS_CATEGORY};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    question: String,
    #[validate(length(min = 1))]
    answer: String,
    #[validate(range(min = 1, max = 5))]
    difficulty: i32,
    #[validate(range(min = 1))]
    category: i32,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    created: i32,
    total_questions: u64,
}

pub async fn create_question<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let res = questions::ActiveModel {
        question: Set(request.question),
        answer: Set(request.answer),
        category: Set(request.category),
        difficulty: Set(request.difficulty),
        ..Default::default()
    }
    .insert(&txn)
    .await;

    let question = match res {
        Err(err) if err.foreign_key_violation(FK_QUESTIONS_CATEGORY) => {
            warn!("tried to create question in missing category {}", request.category);
            return Err(error::UNKNOWN_CATEGORY);
        }
        res => res?,
    };

    let total_questions = questions::Entity::find().count(&txn).await?;

    txn.commit().await?;

    debug!("created question {}", question.id);

    Ok(Json(Response {
        success: true,
        created: question.id,
        total_questions,
    }))
}
