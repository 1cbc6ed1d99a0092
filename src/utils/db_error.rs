//! Classification of database driver errors.

/// Name of the unique constraint on `links.code`.
pub const CODE_UNIQUE_CONSTRAINT: &str = "links_code_key";

/// Returns true if `e` is a unique violation of the short code constraint.
///
/// This is the store's final word on code collisions: it fires when another
/// request inserted the same code between our existence check and our insert.
pub fn is_code_collision(e: &sqlx::Error) -> bool {
    e.as_database_error().is_some_and(|db_err| {
        db_err.is_unique_violation() && db_err.constraint() == Some(CODE_UNIQUE_CONSTRAINT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_collisions() {
        assert!(!is_code_collision(&sqlx::Error::RowNotFound));
        assert!(!is_code_collision(&sqlx::Error::PoolTimedOut));
    }
}
