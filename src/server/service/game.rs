pub mod validation;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{
        CreateGameParams, FieldErrors, Game, GameForm, RankInput, FORM_FIELD, RANK_FIELD,
    },
    service::game::validation::{validate_game_form, RANK_EXHAUSTED, SAVE_FAILED},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all games in display order (rank, then id)
    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all().await?)
    }

    /// Validates a submitted form and inserts the game when it is valid.
    ///
    /// A missing rank defaults to the next free rank; when the highest rank is already
    /// `i32::MAX` there is none, and the rank field is reported as required. Storage failures
    /// do not fail the
    /// request: they are logged and reported under the form-level error key so the caller can
    /// still render the list.
    ///
    /// # Returns
    /// - Empty map - The game was inserted
    /// - Field errors - Validation failed (nothing inserted) or the write failed
    pub async fn create(&self, form: &GameForm) -> FieldErrors {
        let validated = match validate_game_form(form) {
            Ok(validated) => validated,
            Err(errors) => return errors,
        };

        let repo = GameRepository::new(self.db);

        let result = async move {
            let rank = match validated.rank {
                RankInput::Explicit(rank) => rank,
                RankInput::Absent => match repo.next_rank().await? {
                    Some(rank) => rank,
                    None => return Ok(None),
                },
            };

            repo.create(CreateGameParams {
                title: validated.title,
                rank,
            })
            .await
            .map(Some)
        }
        .await;

        let mut errors = FieldErrors::new();
        match result {
            Ok(Some(game)) => {
                tracing::info!("Inserted game {} '{}' at rank {}", game.id, game.title, game.rank)
            }
            Ok(None) => {
                errors.insert(RANK_FIELD.to_string(), RANK_EXHAUSTED.to_string());
            }
            Err(e) => {
                tracing::error!("Failed to insert game: {}", e);
                errors.insert(FORM_FIELD.to_string(), SAVE_FAILED.to_string());
            }
        }
        errors
    }

    /// Re-ranks games to match the given order, all or nothing
    pub async fn reorder(&self, ids: &[i32]) -> Result<(), AppError> {
        GameRepository::new(self.db).reorder(ids).await?;

        tracing::info!("Reordered {} game(s)", ids.len());

        Ok(())
    }
}
