//! Server-side domain models, parameter types, and view-models.
//!
//! Domain models are converted from entity models at the repository boundary. View-models are
//! request-scoped structures handed to the renderer and discarded afterwards.

pub mod game;
pub mod user;
pub mod view;
