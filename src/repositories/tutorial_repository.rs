use crate::models::Tutorial;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Tutorial not found")]
    NotFound,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait TutorialRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Tutorial>>;
    async fn find_by_title_containing(&self, title: &str) -> RepositoryResult<Vec<Tutorial>>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Tutorial>>;
    async fn find_by_published(&self, published: bool) -> RepositoryResult<Vec<Tutorial>>;
    /// Inserts a new tutorial (id == 0) or overwrites an existing one.
    async fn save(&self, tutorial: Tutorial) -> RepositoryResult<Tutorial>;
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
    async fn delete_all(&self) -> RepositoryResult<()>;
}

pub struct SqliteTutorialRepository {
    pool: SqlitePool,
}

impl SqliteTutorialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorialRepository for SqliteTutorialRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Tutorial>> {
        let tutorials = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    async fn find_by_title_containing(&self, title: &str) -> RepositoryResult<Vec<Tutorial>> {
        // instr() is case-sensitive, unlike LIKE
        let tutorials = sqlx::query_as::<_, Tutorial>(
            r#"
            SELECT id, title, description, published
            FROM tutorials
            WHERE instr(title, ?) > 0
            ORDER BY id
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Tutorial>> {
        let tutorial = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tutorial)
    }

    async fn find_by_published(&self, published: bool) -> RepositoryResult<Vec<Tutorial>> {
        let tutorials = sqlx::query_as::<_, Tutorial>(
            r#"
            SELECT id, title, description, published
            FROM tutorials
            WHERE published = ?
            ORDER BY id
            "#,
        )
        .bind(published)
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    async fn save(&self, tutorial: Tutorial) -> RepositoryResult<Tutorial> {
        if tutorial.is_new() {
            let saved = sqlx::query_as::<_, Tutorial>(
                r#"
                INSERT INTO tutorials (title, description, published)
                VALUES (?, ?, ?)
                RETURNING id, title, description, published
                "#,
            )
            .bind(&tutorial.title)
            .bind(&tutorial.description)
            .bind(tutorial.published)
            .fetch_one(&self.pool)
            .await?;

            return Ok(saved);
        }

        sqlx::query_as::<_, Tutorial>(
            r#"
            UPDATE tutorials
            SET title = ?, description = ?, published = ?
            WHERE id = ?
            RETURNING id, title, description, published
            "#,
        )
        .bind(&tutorial.title)
        .bind(&tutorial.description)
        .bind(tutorial.published)
        .bind(tutorial.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM tutorials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM tutorials")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_pool;

    #[tokio::test]
    async fn test_tutorial_crud() {
        let pool = create_test_pool().await;
        let repo = SqliteTutorialRepository::new(pool);

        // Create
        let created = repo
            .save(Tutorial::new("Rust Basics", "Ownership and borrowing", false))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.title, "Rust Basics");

        // Read
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);

        // Update
        let mut changed = found.clone();
        changed.title = "Rust Advanced".to_string();
        changed.published = true;
        let updated = repo.save(changed).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Rust Advanced");
        assert!(updated.published);

        // List
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);

        // Delete
        repo.delete_by_id(created.id).await.unwrap();
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_title_containing_is_case_sensitive() {
        let pool = create_test_pool().await;
        let repo = SqliteTutorialRepository::new(pool);

        for title in ["Spring Boot", "Spring Data", "spring lowercase", "Rust Axum"] {
            repo.save(Tutorial::new(title, "desc", false)).await.unwrap();
        }

        let found = repo.find_by_title_containing("Spring").await.unwrap();
        let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Spring Boot", "Spring Data"]);

        let partial = repo.find_by_title_containing("Dat").await.unwrap();
        assert_eq!(partial.len(), 1);
        assert_eq!(partial[0].title, "Spring Data");
    }

    #[tokio::test]
    async fn test_find_by_published() {
        let pool = create_test_pool().await;
        let repo = SqliteTutorialRepository::new(pool);

        repo.save(Tutorial::new("Draft", "desc", false)).await.unwrap();
        repo.save(Tutorial::new("Live", "desc", true)).await.unwrap();

        let published = repo.find_by_published(true).await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Live");

        let drafts = repo.find_by_published(false).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Draft");
    }

    #[tokio::test]
    async fn test_save_missing_row_is_not_found() {
        let pool = create_test_pool().await;
        let repo = SqliteTutorialRepository::new(pool);

        let mut ghost = Tutorial::new("Ghost", "never stored", false);
        ghost.id = 999;

        let result = repo.save(ghost).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_and_delete_all() {
        let pool = create_test_pool().await;
        let repo = SqliteTutorialRepository::new(pool);

        // Deleting an unknown id is not an error
        repo.delete_by_id(12345).await.unwrap();

        repo.save(Tutorial::new("One", "desc", false)).await.unwrap();
        repo.save(Tutorial::new("Two", "desc", true)).await.unwrap();

        repo.delete_all().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
