use entity::categories;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use std::collections::BTreeMap;

/// Category id to category type, serialized as a JSON object.
pub type CategoryMap = BTreeMap<i32, String>;

pub async fn category_map<C: ConnectionTrait>(conn: &C) -> Result<CategoryMap, DbErr> {
    let categories = categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await?;

    Ok(categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect())
}
