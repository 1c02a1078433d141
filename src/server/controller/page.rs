use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::server::{
    error::AppError,
    model::view::{BasicPage, HomePage},
    render::Page,
    state::AppState,
};

/// Home page.
///
/// # Returns
/// - `200 OK` - Full page
/// - `500 Internal Server Error` - Template error
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state
        .templates
        .render_page(Page::Home, &HomePage::new(), StatusCode::OK)
}

/// Animals page.
pub async fn animals(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state
        .templates
        .render_page(Page::Animals, &BasicPage::animals(), StatusCode::OK)
}

/// Fallback for every unmatched path: the full page shell with a 404 status.
pub async fn not_found(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state
        .templates
        .render_page(Page::NotFound, &BasicPage::not_found(), StatusCode::NOT_FOUND)
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
