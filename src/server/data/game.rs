//! Game data repository for database operations.

use crate::server::model::game::{next_rank_after, CreateGameParams, Game};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

/// Repository providing database operations for ranked games.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all games ordered by rank ascending, ties broken by id ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Every game in display order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Rank)
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Computes the rank a new game gets when none is submitted.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - `max(rank) + 1`, or `1` when the table is empty
    /// - `Ok(None)` - The highest rank is `i32::MAX`
    /// - `Err(DbErr)` - Database error during query
    pub async fn next_rank(&self) -> Result<Option<i32>, DbErr> {
        let max_rank: Option<Option<i32>> = entity::prelude::Game::find()
            .select_only()
            .column_as(entity::game::Column::Rank.max(), "max_rank")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(next_rank_after(max_rank.flatten()))
    }

    /// Inserts a game.
    ///
    /// # Returns
    /// - `Ok(Game)` - The inserted game with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            title: ActiveValue::Set(params.title),
            rank: ActiveValue::Set(params.rank),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Sets a single game's rank on the given connection or transaction.
    ///
    /// An id with no matching row updates nothing and is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_rank<C: ConnectionTrait>(
        conn: &C,
        id: i32,
        rank: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Game::update_many()
            .col_expr(entity::game::Column::Rank, Expr::value(rank))
            .filter(entity::game::Column::Id.eq(id))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Assigns ranks `1..=N` to the given ids in order, as one transaction.
    ///
    /// If any update fails the transaction is rolled back before returning, so either every
    /// rank changes or none do.
    ///
    /// # Arguments
    /// - `ids` - Game ids in their new display order
    ///
    /// # Returns
    /// - `Ok(())` - All ranks written and committed
    /// - `Err(DbErr)` - An update or the commit failed; no rank changed
    pub async fn reorder(&self, ids: &[i32]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for (rank, &id) in (1..).zip(ids) {
            if let Err(err) = Self::update_rank(&txn, id, rank).await {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back reorder: {}", rollback_err);
                }
                return Err(err);
            }
        }

        txn.commit().await
    }
}
