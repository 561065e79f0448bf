//! Per-request database connection utilities.
//!
//! Connections are opened per request and never pooled or shared; each one
//! is a scoped resource released when it goes out of scope.

use sqlx::{Connection, PgConnection};

/// Open a fresh PostgreSQL connection.
pub async fn connect(database_url: &str) -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect(database_url).await
}
