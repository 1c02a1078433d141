//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. It holds the only shared resources of the server:
//! - Database connection pool (the sole source of truth for users and games)
//! - Precompiled templates (immutable after startup)
//! - Randomness source for sample users

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{render::Templates, service::user::UserSampler};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Templates>` and `Arc<dyn UserSampler>` are reference-counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Templates compiled once at startup and read concurrently by every request.
    pub templates: Arc<Templates>,

    /// Source of name and age for inserted sample users.
    ///
    /// Tests replace it with a fixed sampler to get deterministic rows.
    pub user_sampler: Arc<dyn UserSampler>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `templates` - Precompiled template environment
    /// - `user_sampler` - Randomness source for sample users
    pub fn new(
        db: DatabaseConnection,
        templates: Arc<Templates>,
        user_sampler: Arc<dyn UserSampler>,
    ) -> Self {
        Self {
            db,
            templates,
            user_sampler,
        }
    }
}
