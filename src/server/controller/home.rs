use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Local;
use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::view::{ClickedView, UsersView},
    render::{CLICKED_PARTIAL, USERS_PARTIAL},
    service::user::UserService,
    state::AppState,
    util::parse::parse_id,
};

#[derive(Deserialize)]
pub struct DeleteUserQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// Click acknowledgment fragment stamped with the server's local time.
///
/// Answers any method.
pub async fn clicked(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let view = ClickedView {
        message: "You just clicked!",
        server_time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    state.templates.render_partial(CLICKED_PARTIAL, &view)
}

/// Users list fragment, newest first.
///
/// # Returns
/// - `200 OK` - Users partial
/// - `500 Internal Server Error` - Database or template error
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    render_users(&state).await
}

/// Inserts a sample user and returns the updated users list fragment.
///
/// # Returns
/// - `200 OK` - Users partial including the new user
/// - `500 Internal Server Error` - Insert failed (nothing rendered) or database/template error
pub async fn create_user(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .create_sample(state.user_sampler.as_ref())
        .await?;

    render_users(&state).await
}

/// Deletes the user named by `?id=` and returns the updated users list fragment.
///
/// # Returns
/// - `200 OK` - Users partial; also when no user had that id
/// - `400 Bad Request` - `id` missing or not an integer (no database call made)
/// - `500 Internal Server Error` - Database or template error
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<DeleteUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(query.id.as_deref().unwrap_or_default())?;

    UserService::new(&state.db).delete(id).await?;

    render_users(&state).await
}

async fn render_users(state: &AppState) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    state
        .templates
        .render_partial(USERS_PARTIAL, &UsersView::new(users))
}
