//! User data repository for database operations.

use crate::server::model::user::{CreateUserParam, User};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing database operations for sample users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users, newest (highest id) first.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user ordered by id descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Inserts a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The inserted user with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            age: ActiveValue::Set(Some(param.age)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user by id.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
