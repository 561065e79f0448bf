pub mod config;
pub mod db;
pub mod errors;
pub mod routes;
pub mod services;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
}
