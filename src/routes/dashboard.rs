//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::services::dashboard;
use crate::AppState;

/// Static page title.
pub const PAGE_TITLE: &str = "Fast Cinema";

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with the movie count and average
/// rating.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: &'static str,
    pub total_movies: String,
    pub avg_rating: String,
}

/// GET / — the dashboard page.
///
/// Always answers 200: a data fetch failure surfaces as error markers in the
/// rendered page, not as an HTTP error status.
pub async fn index(State(state): State<AppState>) -> DashboardTemplate {
    let stats = dashboard::fetch_dashboard_stats(&state.config.database_url).await;

    DashboardTemplate {
        title: PAGE_TITLE,
        total_movies: stats.total_movies,
        avg_rating: stats.avg_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_renders_stats() {
        let page = DashboardTemplate {
            title: PAGE_TITLE,
            total_movies: "120".to_string(),
            avg_rating: "7.46".to_string(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("Fast Cinema"));
        assert!(html.contains("120"));
        assert!(html.contains("7.46"));
    }

    #[test]
    fn template_renders_error_markers() {
        let page = DashboardTemplate {
            title: PAGE_TITLE,
            total_movies: "Error".to_string(),
            avg_rating: "Error".to_string(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("Error"));
    }
}
