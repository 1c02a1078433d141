//! Template renderer.
//!
//! Templates are compiled once, at startup, into a single minijinja environment that is shared
//! read-only by every request. Three render modes are offered:
//!
//! - [`Templates::render_page`] - the layout composed with one page's content, with a
//!   caller-chosen status
//! - [`Templates::render_partial`] - a self-contained fragment file rendered as a whole
//! - [`Templates::render_named`] - one named block out of a fragment file that may define
//!   several
//!
//! Every mode renders into a buffer first, so a failing template never produces a partial
//! body or a success status. Undefined view-model fields are errors, not blanks.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::server::error::AppError;

/// Outer HTML shell; page templates extend it and fill its `content` block.
pub const LAYOUT: &str = "layout.html";
/// Raw fragment acknowledging a click.
pub const CLICKED_PARTIAL: &str = "clicked.html";
/// Raw fragment listing users.
pub const USERS_PARTIAL: &str = "home__users.html";
/// Fragment file holding the games list block; included by the games page.
pub const GAMES_LIST_PARTIAL: &str = "games__list.html";
/// Block inside [`GAMES_LIST_PARTIAL`] swapped in by form posts and reorders.
pub const GAMES_LIST_BLOCK: &str = "games__list";

const EMBEDDED: &[(&str, &str)] = &[
    (LAYOUT, include_str!("../../templates/layout.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("animals.html", include_str!("../../templates/animals.html")),
    ("games.html", include_str!("../../templates/games.html")),
    ("404.html", include_str!("../../templates/404.html")),
    (CLICKED_PARTIAL, include_str!("../../templates/clicked.html")),
    (USERS_PARTIAL, include_str!("../../templates/home__users.html")),
    (GAMES_LIST_PARTIAL, include_str!("../../templates/games__list.html")),
];

/// Full pages the server can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Animals,
    Games,
    NotFound,
}

impl Page {
    /// Content template for the page. It extends [`LAYOUT`].
    pub const fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::Animals => "animals.html",
            Page::Games => "games.html",
            Page::NotFound => "404.html",
        }
    }
}

/// Precompiled template environment.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compiles the templates shipped in the binary.
    pub fn embedded() -> Result<Self, minijinja::Error> {
        Self::from_sources(EMBEDDED.iter().copied())
    }

    /// Compiles the given `(name, source)` pairs.
    ///
    /// # Returns
    /// - `Ok(Templates)` - Every source parsed
    /// - `Err(minijinja::Error)` - A source has a syntax error
    pub fn from_sources(
        sources: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for (name, source) in sources {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    /// Renders a full page: the layout composed with the page's content.
    ///
    /// Always responds with `Content-Type: text/html; charset=utf-8`. The status is only
    /// applied once the body has rendered successfully.
    ///
    /// # Arguments
    /// - `page` - Which page to render
    /// - `ctx` - View-model; must provide every field the layout and page reference
    /// - `status` - Status of the successful response
    ///
    /// # Returns
    /// - `Ok(Response)` - Rendered page with the given status
    /// - `Err(AppError::TemplateErr)` - Lookup or execution failed
    pub fn render_page<S: Serialize>(
        &self,
        page: Page,
        ctx: &S,
        status: StatusCode,
    ) -> Result<Response, AppError> {
        let body = self.env.get_template(page.template())?.render(ctx)?;

        Ok((status, Html(body)).into_response())
    }

    /// Renders a fragment file whose root is the whole document.
    pub fn render_partial<S: Serialize>(
        &self,
        template: &str,
        ctx: &S,
    ) -> Result<Html<String>, AppError> {
        let body = self.env.get_template(template)?.render(ctx)?;

        Ok(Html(body))
    }

    /// Renders one named block from a fragment file, ignoring any other blocks it defines.
    ///
    /// # Returns
    /// - `Ok(Html<String>)` - The block's output
    /// - `Err(AppError::TemplateErr)` - Unknown file or block, or execution failed
    pub fn render_named<S: Serialize>(
        &self,
        template: &str,
        name: &str,
        ctx: &S,
    ) -> Result<Html<String>, AppError> {
        let tmpl = self.env.get_template(template)?;
        let (_, mut state) = tmpl.render_and_return_state(ctx)?;
        let body = state.render_block(name)?;

        Ok(Html(body))
    }
}
