pub const PING_MESSAGE: &str = "Pong! API is running.";
pub const RELEASE_VERSION: &str = "Release 2025-R1";

/// GET /api/ping - Liveness check, independent of the database
pub async fn ping_handler() -> &'static str {
    PING_MESSAGE
}

/// GET /api/version
pub async fn version_handler() -> &'static str {
    RELEASE_VERSION
}
