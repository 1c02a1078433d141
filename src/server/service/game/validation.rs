//! Pure validation and default derivation for submitted games.

use crate::server::model::game::{FieldErrors, GameForm, RankInput, RANK_FIELD, TITLE_FIELD};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const RANK_TOO_LOW: &str = "Rank must be ≥ 1";
pub const RANK_NOT_A_NUMBER: &str = "Rank must be a number";
pub const RANK_EXHAUSTED: &str = "Rank is required: the highest rank is already the maximum";
pub const SAVE_FAILED: &str = "Could not save game";

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedGame {
    /// Trimmed, non-empty title.
    pub title: String,
    pub rank: RankInput,
}

/// Interprets the raw rank field.
///
/// An empty field means no rank was submitted. Anything else must be an integer of at
/// least 1; a submitted zero or negative rank is an error, not a request for the default.
pub fn parse_rank(raw: &str) -> Result<RankInput, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(RankInput::Absent);
    }

    match raw.parse::<i32>() {
        Ok(rank) if rank >= 1 => Ok(RankInput::Explicit(rank)),
        Ok(_) => Err(RANK_TOO_LOW),
        Err(_) => Err(RANK_NOT_A_NUMBER),
    }
}

/// Validates a submitted game form, collecting every field error.
pub fn validate_game_form(form: &GameForm) -> Result<ValidatedGame, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = form.title.trim();
    if title.is_empty() {
        errors.insert(TITLE_FIELD.to_string(), TITLE_REQUIRED.to_string());
    }

    let rank = parse_rank(&form.rank).unwrap_or_else(|msg| {
        errors.insert(RANK_FIELD.to_string(), msg.to_string());
        RankInput::Absent
    });

    if errors.is_empty() {
        Ok(ValidatedGame {
            title: title.to_string(),
            rank,
        })
    } else {
        Err(errors)
    }
}
