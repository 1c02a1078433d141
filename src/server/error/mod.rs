//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by handlers. Bad input maps to 400 with a
//! short plain-text reason; database, template, and I/O failures map to 500 with the raw error
//! text as the body. Field-level validation problems never become an `AppError`: they are
//! rendered back to the user inside a normal 200 response.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database read, write, or commit failure.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Template lookup, parse, or execution failure, including references to undefined
    /// view-model fields.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    TemplateErr(#[from] minijinja::Error),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed identifier in the request (missing or non-numeric).
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns its text as a plain-text body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
