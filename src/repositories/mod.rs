pub mod tutorial_repository;

pub use tutorial_repository::{
    RepositoryError, RepositoryResult, SqliteTutorialRepository, TutorialRepository,
};
