use super::categories;
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_QUESTIONS: &str = "PK_questions";
    pub const FK_QUESTIONS_CATEGORY: &str = "FK_questions_category";
    pub const IDX_QUESTIONS_CATEGORY: &str = "IDX_questions_category";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Category => Entity::belongs_to(categories::Entity)
                .from(Column::Category)
                .to(categories::Column::Id)
                .into(),
        }
    }
}

impl Related<categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_category(category_id: i32) -> Select<Entity> {
        Self::find().filter(Column::Category.eq(category_id))
    }
}
