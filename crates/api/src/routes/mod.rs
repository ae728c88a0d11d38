use axum::Router;

pub mod login;

/// Combine all API routes into a single router.
pub fn create_router() -> Router {
    Router::new().nest("/api/v1/login", login::router())
}
