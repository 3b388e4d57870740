use crate::error::AppError;
use crate::models::{TutorialQuery, TutorialRequest};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

// Empty result sets answer 204 rather than 200 with an empty array
fn list_response<T: serde::Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(items)).into_response()
    }
}

/// GET /api/tutorials?title= - List tutorials, optionally filtered by title
pub async fn list_tutorials_handler(
    State(state): State<AppState>,
    Query(query): Query<TutorialQuery>,
) -> Result<Response, AppError> {
    let tutorials = state
        .tutorial_service
        .list_tutorials(query.title.as_deref())
        .await?;

    Ok(list_response(tutorials))
}

/// GET /api/tutorials/published - List published tutorials
pub async fn list_published_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let tutorials = state.tutorial_service.list_published().await?;
    Ok(list_response(tutorials))
}

/// GET /api/tutorials/{id} - Fetch a single tutorial
pub async fn get_tutorial_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let tutorial = state.tutorial_service.get_tutorial(id).await?;
    Ok(Json(tutorial))
}

/// POST /api/tutorials - Create a tutorial
pub async fn create_tutorial_handler(
    State(state): State<AppState>,
    Json(request): Json<TutorialRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tutorial = state.tutorial_service.create_tutorial(request).await?;
    Ok((StatusCode::CREATED, Json(tutorial)))
}

/// PUT /api/tutorials/{id} - Overwrite title, description and published flag
pub async fn update_tutorial_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<TutorialRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tutorial = state.tutorial_service.update_tutorial(id, request).await?;
    Ok(Json(tutorial))
}

/// DELETE /api/tutorials/{id} - Delete a tutorial
pub async fn delete_tutorial_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.tutorial_service.delete_tutorial(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/tutorials - Delete every tutorial
pub async fn delete_all_tutorials_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.tutorial_service.delete_all_tutorials().await?;
    Ok(StatusCode::NO_CONTENT)
}
