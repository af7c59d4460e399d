use crate::{
    error::Result,
    extractors::Json,
    utils::{category_map, CategoryMap},
    StateTrait,
};
use axum::extract::State;
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    total_categories: usize,
    categories: CategoryMap,
}

pub async fn list_categories<S: StateTrait>(State(state): State<S>) -> Result<Json<Response>> {
    let categories = category_map(state.db()).await?;

    Ok(Json(Response {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}
