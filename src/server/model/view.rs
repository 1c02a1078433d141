//! View-models handed to the template renderer.
//!
//! Every field a template references is always present (optional values serialize as
//! `none`), because templates render with strict undefined handling.

use serde::Serialize;

use crate::server::{
    model::{
        game::{FieldErrors, Game, GameForm},
        user::User,
    },
    router::Route,
};

/// Metadata every full page carries into the layout.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    /// Logical page name, used by the layout to mark the active page.
    pub page: &'static str,
    pub description: &'static str,
}

/// A page with nothing but its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct BasicPage {
    pub meta: PageMeta,
}

impl BasicPage {
    pub fn animals() -> Self {
        Self {
            meta: PageMeta {
                title: "Animals Page Title",
                page: "animals",
                description: "A page about animals.",
            },
        }
    }

    pub fn not_found() -> Self {
        Self {
            meta: PageMeta {
                title: "404 Not Found",
                page: "404",
                description: "Sorry, we couldn't find that page.",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeRoutes {
    pub clicked: &'static str,
    pub users: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub meta: PageMeta,
    pub message: &'static str,
    pub routes: HomeRoutes,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            meta: PageMeta {
                title: "Home Page Title",
                page: "home",
                description: "Hello, from Game Rank!",
            },
            message: "Click the button or add a few users.",
            routes: HomeRoutes {
                clicked: Route::HtmxClicked.path(),
                users: Route::HtmxUsers.path(),
            },
        }
    }
}

/// Acknowledgment fragment returned by the click endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ClickedView {
    pub message: &'static str,
    pub server_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersRoutes {
    pub users: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersView {
    pub users: Vec<User>,
    pub routes: UsersRoutes,
}

impl UsersView {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            routes: UsersRoutes {
                users: Route::HtmxUsers.path(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GamesRoutes {
    pub games: &'static str,
    pub games_reorder: &'static str,
}

/// View-model for the games page and its list fragment.
#[derive(Debug, Clone, Serialize)]
pub struct GamesView {
    pub meta: PageMeta,
    pub routes: GamesRoutes,
    /// Last submitted form values, present only in response to a submission.
    pub old: Option<GameForm>,
    pub errors: FieldErrors,
    pub games: Vec<Game>,
}

impl GamesView {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            meta: PageMeta {
                title: "Games",
                page: "games",
                description: "Rank your games.",
            },
            routes: GamesRoutes {
                games: Route::Games.path(),
                games_reorder: Route::GamesReorder.path(),
            },
            old: None,
            errors: FieldErrors::new(),
            games,
        }
    }

    /// Carries a submission and its error map forward for re-display.
    pub fn with_submission(mut self, old: GameForm, errors: FieldErrors) -> Self {
        self.old = Some(old);
        self.errors = errors;
        self
    }
}
