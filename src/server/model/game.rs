//! Game domain models, form input, and validation result types.

use serde::Serialize;
use std::collections::BTreeMap;

/// Form field name for the game title.
pub const TITLE_FIELD: &str = "title";
/// Form field name for the game rank.
pub const RANK_FIELD: &str = "rank";
/// Error-map key for problems that are not tied to a single field.
pub const FORM_FIELD: &str = "_form";

/// Field name to message. Empty when the submission is valid.
pub type FieldErrors = BTreeMap<String, String>;

/// A ranked game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub rank: i32,
}

impl Game {
    /// Converts an entity model to a game domain model at the repository boundary.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            rank: entity.rank,
        }
    }
}

/// Parameters for inserting a game.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameParams {
    pub title: String,
    pub rank: i32,
}

/// Raw `POST /games` form as submitted, kept verbatim for re-display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameForm {
    pub title: String,
    pub rank: String,
}

impl GameForm {
    /// Reads the form from a urlencoded body.
    ///
    /// Never fails: a missing field is empty, a repeated field keeps its first value, and
    /// unknown fields are ignored, so every submission reaches validation.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut title = None;
        let mut rank = None;

        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            let slot = match key.as_ref() {
                TITLE_FIELD => &mut title,
                RANK_FIELD => &mut rank,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }

        Self {
            title: title.unwrap_or_default(),
            rank: rank.unwrap_or_default(),
        }
    }
}

/// Rank as understood from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankInput {
    /// No rank submitted; the next free rank is used.
    Absent,
    /// A rank of at least 1 was submitted.
    Explicit(i32),
}

/// Rank assigned to a new game when none is submitted: one past the current maximum, or `1`
/// when there are no games.
///
/// `None` when the maximum is already `i32::MAX` and no later rank exists.
pub fn next_rank_after(max_rank: Option<i32>) -> Option<i32> {
    match max_rank {
        Some(rank) => rank.checked_add(1),
        None => Some(1),
    }
}
