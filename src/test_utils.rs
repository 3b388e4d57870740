pub mod test_helpers {
    use crate::models::Tutorial;
    use crate::repositories::{RepositoryResult, SqliteTutorialRepository, TutorialRepository};
    use crate::AppState;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        crate::db::run_migrations(&pool).await?;

        Ok(pool)
    }

    /// Create a temporary file-based SQLite database for testing
    /// Useful when several connections must observe the same data
    pub async fn create_test_db_file() -> Result<(SqlitePool, NamedTempFile), sqlx::Error> {
        let temp_file = NamedTempFile::new().map_err(sqlx::Error::Io)?;
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| sqlx::Error::Configuration("Invalid database path".into()))?;
        let database_url = format!("sqlite://{}", db_path);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect(&database_url)
            .await?;

        crate::db::run_migrations(&pool).await?;

        Ok((pool, temp_file))
    }

    /// Build application state backed by the given pool
    pub fn create_test_state(pool: SqlitePool) -> AppState {
        AppState::new(Arc::new(SqliteTutorialRepository::new(pool)))
    }

    /// Insert a tutorial directly through the repository
    pub async fn insert_test_tutorial(
        pool: &SqlitePool,
        title: &str,
        description: &str,
        published: bool,
    ) -> RepositoryResult<Tutorial> {
        let repository = SqliteTutorialRepository::new(pool.clone());
        repository
            .save(Tutorial::new(title, description, published))
            .await
    }
}

// Re-export commonly used test functions at module level for convenience
// Note: This is test-only code. Panic on error is acceptable in tests.
#[cfg(test)]
pub async fn create_test_pool() -> sqlx::SqlitePool {
    match test_helpers::create_test_db().await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to create test pool: {}", e),
    }
}
