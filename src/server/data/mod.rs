//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, so nothing
//! above this layer touches entity types. They own no state beyond the connection: the
//! database is the sole source of truth.

pub mod game;
pub mod user;

#[cfg(test)]
mod test;
