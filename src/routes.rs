use crate::{handlers, AppState};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// CORS policy admitting a single browser origin.
///
/// Requests from any other origin get no `access-control-allow-origin` header.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(1800))
}

/// Builds the `/api` router with CORS and request tracing applied.
pub fn create_router(state: AppState, cors_origin: HeaderValue) -> Router {
    let api_routes = Router::new()
        .route(
            "/tutorials",
            get(handlers::list_tutorials_handler)
                .post(handlers::create_tutorial_handler)
                .delete(handlers::delete_all_tutorials_handler),
        )
        .route(
            "/tutorials/published",
            get(handlers::list_published_handler),
        )
        .route(
            "/tutorials/{id}",
            get(handlers::get_tutorial_handler)
                .put(handlers::update_tutorial_handler)
                .delete(handlers::delete_tutorial_handler),
        )
        .route("/ping", get(handlers::ping_handler))
        .route("/version", get(handlers::version_handler));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
