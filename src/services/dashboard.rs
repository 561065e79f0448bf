//! Dashboard statistics aggregation queries.

use serde::Serialize;
use sqlx::Connection;

use crate::db;
use crate::errors::AppError;

/// Sentinel display value substituted for a statistic that could not be
/// computed.
pub const ERROR_MARKER: &str = "Error";

/// Aggregated statistics for the dashboard page, ready for display.
///
/// Constructed fresh per request and consumed exactly once by the renderer.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_movies: String,
    pub avg_rating: String,
}

/// Fetch movie count and average rating.
///
/// Opens a dedicated connection, runs the two aggregate queries, and maps
/// the results to display strings. Any connection or query failure is caught
/// here, logged, and converted into error markers for both fields — the
/// caller always gets a renderable value.
pub async fn fetch_dashboard_stats(database_url: &str) -> DashboardStats {
    match query_stats(database_url).await {
        Ok((total_movies, avg_rating)) => DashboardStats {
            total_movies: total_movies.to_string(),
            avg_rating: format_avg_rating(avg_rating),
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch dashboard statistics");
            DashboardStats {
                total_movies: ERROR_MARKER.to_string(),
                avg_rating: ERROR_MARKER.to_string(),
            }
        }
    }
}

/// Run the two aggregate queries over a single short-lived connection.
///
/// The connection is dropped on every exit path; the explicit `close` on the
/// success path terminates the protocol gracefully. No transaction is opened,
/// so there is nothing to roll back for this read-only pair of queries.
async fn query_stats(database_url: &str) -> Result<(i64, Option<f64>), AppError> {
    let mut conn = db::connect(database_url).await?;

    let total_movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&mut conn)
        .await?;

    // Cast so AVG over either NUMERIC or DOUBLE PRECISION decodes as f64;
    // NULL (empty table) decodes as None.
    let avg_rating: Option<f64> = sqlx::query_scalar("SELECT AVG(rating)::float8 FROM movies")
        .fetch_one(&mut conn)
        .await?;

    conn.close().await?;
    Ok((total_movies, avg_rating))
}

/// Format the average rating for display: two decimal places, or "N/A" when
/// the table is empty.
fn format_avg_rating(avg: Option<f64>) -> String {
    match avg {
        Some(value) => format!("{value:.2}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avg_rating_formats_two_decimals() {
        assert_eq!(format_avg_rating(Some(7.456)), "7.46");
        assert_eq!(format_avg_rating(Some(8.0)), "8.00");
        assert_eq!(format_avg_rating(Some(0.005)), "0.01");
    }

    #[test]
    fn avg_rating_empty_table_is_na() {
        assert_eq!(format_avg_rating(None), "N/A");
    }

    #[tokio::test]
    async fn unreachable_database_yields_error_markers() {
        // Malformed URL fails before any network I/O.
        let stats = fetch_dashboard_stats("not-a-connection-string").await;
        assert_eq!(stats.total_movies, ERROR_MARKER);
        assert_eq!(stats.avg_rating, ERROR_MARKER);
    }
}
