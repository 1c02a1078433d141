use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::server::{
    error::AppError,
    model::{game::GameForm, view::GamesView},
    render::{Page, GAMES_LIST_BLOCK, GAMES_LIST_PARTIAL},
    service::game::GameService,
    state::AppState,
    util::parse::parse_repeated_ids,
};

/// Form field repeated once per game, in on-screen order, by the reorder form.
const REORDER_FIELD: &str = "game";

/// Games page with the ranked list.
///
/// # Returns
/// - `200 OK` - Full page (layout, page shell, and list fragment)
/// - `500 Internal Server Error` - Database or template error
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).get_all().await?;

    state
        .templates
        .render_page(Page::Games, &GamesView::new(games), StatusCode::OK)
}

/// Validates and inserts a game, then returns the list fragment.
///
/// Validation errors and a failed insert are shown inside the fragment with a 200 status so
/// the client swaps it in like any other response. The submitted values are carried back for
/// re-display. The body is read leniently whatever its content type: missing fields are empty
/// and repeated fields keep their first value, so every submission ends in the list fragment.
///
/// # Returns
/// - `200 OK` - Named list partial with the error map and last submitted values
/// - `500 Internal Server Error` - Re-reading the list or rendering failed
pub async fn create_game(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let form = GameForm::from_urlencoded(&body);
    let service = GameService::new(&state.db);

    let errors = service.create(&form).await;
    let games = service.get_all().await?;

    let view = GamesView::new(games).with_submission(form, errors);
    state
        .templates
        .render_named(GAMES_LIST_PARTIAL, GAMES_LIST_BLOCK, &view)
}

/// Re-ranks games to the submitted order and returns the list fragment.
///
/// Every id is parsed before the transaction opens; the ranks are then rewritten `1..=N` in
/// one transaction, so a failure leaves every rank as it was.
///
/// # Returns
/// - `200 OK` - Named list partial reflecting the new ranks
/// - `400 Bad Request` - An id is empty or not an integer (nothing written)
/// - `500 Internal Server Error` - An update or the commit failed (rolled back)
pub async fn reorder_games(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let ids = parse_repeated_ids(&body, REORDER_FIELD)?;

    let service = GameService::new(&state.db);
    service.reorder(&ids).await?;
    let games = service.get_all().await?;

    state
        .templates
        .render_named(GAMES_LIST_PARTIAL, GAMES_LIST_BLOCK, &GamesView::new(games))
}
