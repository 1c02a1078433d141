//! Static route table.
//!
//! Paths match exactly; there are no wildcard or parameterised routes apart from the static
//! file passthrough under `/public`. A known path requested with a method it does not serve
//! gets 405 with an empty body, and any unknown path falls through to the 404 page.

use axum::{
    http::StatusCode,
    routing::{any, get, post},
    Router,
};
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    controller::{game, home, page},
    state::AppState,
};

/// Every path the server answers, besides static files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Animals,
    HtmxClicked,
    HtmxUsers,
    Games,
    GamesReorder,
    Health,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Animals => "/animals",
            Route::HtmxClicked => "/home/htmx/clicked",
            Route::HtmxUsers => "/home/htmx/users",
            Route::Games => "/games",
            Route::GamesReorder => "/games/reorder",
            Route::Health => "/healthz",
        }
    }
}

/// Prefix static files are served under.
pub const PUBLIC_PREFIX: &str = "/public";

pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .route(Route::Home.path(), get(page::home))
        .route(Route::Animals.path(), get(page::animals))
        .route(Route::HtmxClicked.path(), any(home::clicked))
        .route(
            Route::HtmxUsers.path(),
            get(home::get_users)
                .post(home::create_user)
                .delete(home::delete_user),
        )
        .route(
            Route::Games.path(),
            get(game::get_games).post(game::create_game),
        )
        .route(Route::GamesReorder.path(), post(game::reorder_games))
        .route(Route::Health.path(), get(page::health))
        .nest_service(PUBLIC_PREFIX, ServeDir::new(&config.public_dir))
        .fallback(page::not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
