use crate::config::ServerConfig;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

pub async fn create_pool(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    // Ensure the data directory exists
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(database_url: String) -> ServerConfig {
        ServerConfig {
            database_url,
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_create_pool_creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();

        for (scheme, name) in [("sqlite:", "short"), ("sqlite://", "long")] {
            let db_path = dir.path().join(name).join("data").join("tutorials.db");
            let config = config_for(format!("{}{}", scheme, db_path.display()));

            let pool = create_pool(&config).await.unwrap();
            run_migrations(&pool).await.unwrap();
            pool.close().await;

            assert!(db_path.exists(), "{} was not created", db_path.display());
        }
    }

    #[tokio::test]
    async fn test_create_pool_reports_unusable_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let db_path = blocker.join("tutorials.db");
        let config = config_for(format!("sqlite:{}", db_path.display()));

        let result = create_pool(&config).await;
        assert!(matches!(result, Err(sqlx::Error::Io(_))));
    }

    #[tokio::test]
    async fn test_create_pool_in_memory() {
        let config = config_for("sqlite::memory:".to_string());
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }
}
