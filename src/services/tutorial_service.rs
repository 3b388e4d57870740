use crate::error::{AppError, Result};
use crate::models::{Tutorial, TutorialRequest};
use crate::repositories::TutorialRepository;
use std::sync::Arc;

/// Thin layer over the tutorial repository.
///
/// Holds no state beyond the shared repository handle, so a single instance
/// serves every request concurrently.
pub struct TutorialService {
    repository: Arc<dyn TutorialRepository>,
}

impl TutorialService {
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self { repository }
    }

    /// Lists every tutorial, or only those whose title contains `title`.
    pub async fn list_tutorials(&self, title: Option<&str>) -> Result<Vec<Tutorial>> {
        let tutorials = match title {
            Some(title) => {
                tracing::debug!("Listing tutorials with title containing {:?}", title);
                self.repository.find_by_title_containing(title).await?
            }
            None => self.repository.find_all().await?,
        };

        Ok(tutorials)
    }

    pub async fn list_published(&self) -> Result<Vec<Tutorial>> {
        Ok(self.repository.find_by_published(true).await?)
    }

    pub async fn get_tutorial(&self, id: i64) -> Result<Tutorial> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Creates a tutorial. The published flag from the request is ignored.
    pub async fn create_tutorial(&self, request: TutorialRequest) -> Result<Tutorial> {
        let tutorial = Tutorial::new(request.title, request.description, false);
        let saved = self.repository.save(tutorial).await?;

        tracing::debug!("Created tutorial {}", saved.id);
        Ok(saved)
    }

    pub async fn update_tutorial(&self, id: i64, request: TutorialRequest) -> Result<Tutorial> {
        let mut tutorial = self.get_tutorial(id).await?;
        tutorial.apply(request);

        let saved = self.repository.save(tutorial).await?;

        tracing::debug!("Updated tutorial {}", saved.id);
        Ok(saved)
    }

    /// Deletes a tutorial. Unknown ids are not an error.
    pub async fn delete_tutorial(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        tracing::debug!("Deleted tutorial {}", id);
        Ok(())
    }

    pub async fn delete_all_tutorials(&self) -> Result<()> {
        self.repository.delete_all().await?;
        tracing::debug!("Deleted all tutorials");
        Ok(())
    }
}
