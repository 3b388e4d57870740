use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tutorial {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub published: bool,
}

impl Tutorial {
    /// Builds a tutorial that has not been saved yet.
    ///
    /// The id stays at zero until the repository assigns one on first save.
    pub fn new(title: impl Into<String>, description: impl Into<String>, published: bool) -> Self {
        Tutorial {
            id: 0,
            title: title.into(),
            description: description.into(),
            published,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Overwrites every mutable field, leaving the id untouched.
    pub fn apply(&mut self, request: TutorialRequest) {
        self.title = request.title;
        self.description = request.description;
        self.published = request.published;
    }
}

// Request body for create and update; absent fields fall back to defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TutorialRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TutorialQuery {
    pub title: Option<String>,
}
