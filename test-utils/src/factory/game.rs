//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .title("Hades")
///     .rank(2)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    rank: i32,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"`
    /// - rank: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Game {}", id),
            rank: 1,
        }
    }

    /// Sets the title for the game.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the rank for the game.
    pub fn rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            title: ActiveValue::Set(self.title),
            rank: ActiveValue::Set(self.rank),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Creates a game with a specific rank.
pub async fn create_game_with_rank(
    db: &DatabaseConnection,
    rank: i32,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).rank(rank).build().await
}

/// Creates one game per rank, in the order given.
///
/// # Returns
/// - `Ok(Vec<entity::game::Model>)` - Created games in insertion (id) order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_games_with_ranks(
    db: &DatabaseConnection,
    ranks: &[i32],
) -> Result<Vec<entity::game::Model>, DbErr> {
    let mut games = Vec::with_capacity(ranks.len());
    for &rank in ranks {
        games.push(create_game_with_rank(db, rank).await?);
    }
    Ok(games)
}
