use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Names sample users are drawn from.
pub const SAMPLE_NAMES: [&str; 12] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
    "Mallory", "Niaj",
];

/// Youngest age a sample user can get.
pub const MIN_SAMPLE_AGE: i32 = 18;
/// Oldest age a sample user can get.
pub const MAX_SAMPLE_AGE: i32 = 77;

/// Source of values for newly inserted sample users.
pub trait UserSampler: Send + Sync {
    fn sample(&self) -> CreateUserParam;
}

/// Draws a name from [`SAMPLE_NAMES`] and an age in `18..=77` from the thread-local RNG.
pub struct RandomUserSampler;

impl UserSampler for RandomUserSampler {
    fn sample(&self) -> CreateUserParam {
        let mut rng = rand::rng();
        let name = SAMPLE_NAMES[rng.random_range(0..SAMPLE_NAMES.len())];

        CreateUserParam {
            name: name.to_string(),
            age: rng.random_range(MIN_SAMPLE_AGE..=MAX_SAMPLE_AGE),
        }
    }
}

/// Always returns the same user.
#[cfg(test)]
pub struct FixedUserSampler(pub CreateUserParam);

#[cfg(test)]
impl UserSampler for FixedUserSampler {
    fn sample(&self) -> CreateUserParam {
        self.0.clone()
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users, newest first
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Inserts a user with values from the sampler
    pub async fn create_sample(&self, sampler: &dyn UserSampler) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).create(sampler.sample()).await?;

        tracing::info!("Inserted user {} ({})", user.id, user.name);

        Ok(user)
    }

    /// Deletes a user; an absent id is not an error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let removed = UserRepository::new(self.db).delete(id).await?;

        tracing::debug!("Deleted {} user row(s) for id {}", removed, id);

        Ok(())
    }
}
