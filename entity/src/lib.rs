//! SeaORM entity models for the `users` and `games` tables.

pub mod prelude;

pub mod game;
pub mod user;
