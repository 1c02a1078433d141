use crate::server::{data::game::GameRepository, model::game::CreateGameParams};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use std::collections::HashMap;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod next_rank;
mod reorder;

/// Reads every game's rank straight from the table, keyed by id.
async fn ranks_by_id(db: &sea_orm::DatabaseConnection) -> Result<HashMap<i32, i32>, DbErr> {
    Ok(entity::prelude::Game::find()
        .all(db)
        .await?
        .into_iter()
        .map(|g| (g.id, g.rank))
        .collect())
}
