//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let game = factory::create_game_with_rank(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .title("Outer Wilds")
//!     .rank(1)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `game` - Create game entities
//! - `helpers` - Unique value generation shared by factories

pub mod game;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use game::{create_game, create_game_with_rank, create_games_with_ranks};
pub use user::create_user;
