//! Application error types.

/// Application error type.
///
/// Configuration errors are fatal at startup; database errors are recovered
/// inside the dashboard service and surfaced as display markers, so neither
/// variant ever reaches an HTTP response directly.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
