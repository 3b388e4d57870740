pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tutorial_service: Arc<services::TutorialService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn repositories::TutorialRepository>) -> Self {
        AppState {
            tutorial_service: Arc::new(services::TutorialService::new(repository)),
        }
    }
}
