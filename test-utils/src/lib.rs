//! Game Rank Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the game
//! rank server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases built from the entity definitions.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Helpers for inserting users and games with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Game;
//!
//! #[tokio::test]
//! async fn test_game_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Game)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
