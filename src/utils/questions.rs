use entity::questions;
use sea_orm::{
    sea_query::{BinOper, Expr, Func, SimpleExpr},
    FromQueryResult,
};
use serde::Serialize;

#[derive(Debug, Serialize, FromQueryResult)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Case-insensitive substring match on the question text. Both sides are
/// folded by the database so they always agree under its collation.
pub fn question_contains(term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((
        questions::Entity,
        questions::Column::Question,
    ))))
    .binary(BinOper::Like, Func::lower(Expr::val(like_pattern(term))))
}

fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');

    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn pattern_is_substring() {
        assert_eq!(like_pattern("Title"), "%Title%");
        assert_eq!(like_pattern("Éclair"), "%Éclair%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn both_sides_are_lowered() {
        let sql = questions::Entity::find()
            .filter(question_contains("Éclair"))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"LOWER("questions"."question") LIKE LOWER("#), "{sql}");
        assert!(sql.contains("Éclair"), "{sql}");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(like_pattern("100%"), r"%100\%%");
        assert_eq!(like_pattern("a_b"), r"%a\_b%");
        assert_eq!(like_pattern(r"c:\"), r"%c:\\%");
    }
}
