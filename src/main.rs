use tutorial_api::{
    config::ServerConfig, db, repositories::SqliteTutorialRepository, routes, AppState,
};

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tutorial_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = db::create_pool(&config).await?;

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let tutorial_repository = Arc::new(SqliteTutorialRepository::new(pool));
    let app_state = AppState::new(tutorial_repository);

    let app = routes::create_router(app_state, config.cors_origin.clone());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Accepting cross-origin requests from {:?}", config.cors_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
