use sea_orm::{DbErr, RuntimeErr};
use sqlx::{postgres::PgDatabaseError, Error as SqlxError};

const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Constraint checks on errors coming back from Postgres.
pub trait DatabaseError {
    fn foreign_key_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn foreign_key_violation(&self, constraint: &str) -> bool {
        postgres_error(self).is_some_and(|err| {
            err.code() == FOREIGN_KEY_VIOLATION && err.constraint() == Some(constraint)
        })
    }
}

fn postgres_error(err: &DbErr) -> Option<&PgDatabaseError> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err)))
        | DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => {
            db_err.try_downcast_ref::<PgDatabaseError>()
        }
        _ => None,
    }
}
