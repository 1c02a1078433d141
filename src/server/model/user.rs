//! User domain models and parameters.

use serde::Serialize;

/// A sample user row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Age in years; a NULL age in storage reads as `0`.
    pub age: i32,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age.unwrap_or_default(),
        }
    }
}

/// Parameters for inserting a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParam {
    pub name: String,
    pub age: i32,
}
