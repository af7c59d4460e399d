use crate::{
    error::{self, Result},
    extractors::{Json, Path},
    StateTrait,
};
use axum::extract::State;
use entity::questions;
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    deleted: i32,
    total_questions: u64,
}

pub async fn delete_question<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i64>,
) -> Result<Json<Response>> {
    let Ok(id) = i32::try_from(id) else {
        return Err(error::QUESTION_NOT_FOUND);
    };

    let txn = state.db().begin().await?;

    let res = questions::Entity::delete_by_id(id).exec(&txn).await?;

    if res.rows_affected == 0 {
        return Err(error::QUESTION_NOT_FOUND);
    }

    let total_questions = questions::Entity::find().count(&txn).await?;

    txn.commit().await?;

    debug!("deleted question {id}");

    Ok(Json(Response {
        success: true,
        deleted: id,
        total_questions,
    }))
}
