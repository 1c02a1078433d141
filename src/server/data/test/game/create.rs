use super::*;

/// Tests inserting a game.
///
/// Expected: Ok with the game stored and an id assigned
#[tokio::test]
async fn creates_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = GameRepository::new(db)
        .create(CreateGameParams {
            title: "Celeste".to_string(),
            rank: 4,
        })
        .await?;

    assert!(game.id > 0);
    assert_eq!(game.title, "Celeste");
    assert_eq!(game.rank, 4);

    let stored = entity::prelude::Game::find_by_id(game.id).one(db).await?;
    assert_eq!(stored.unwrap().title, "Celeste");

    Ok(())
}
