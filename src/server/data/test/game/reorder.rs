use super::*;

/// Tests updating a single rank outside a transaction.
///
/// Expected: Ok with one row updated
#[tokio::test]
async fn update_rank_changes_one_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_games_with_ranks(db, &[1, 2]).await?;

    let updated = GameRepository::update_rank(db, games[0].id, 5).await?;

    assert_eq!(updated, 1);
    let ranks = ranks_by_id(db).await?;
    assert_eq!(ranks[&games[0].id], 5);
    assert_eq!(ranks[&games[1].id], 2);

    Ok(())
}

/// Tests that submitted order becomes ranks 1..N.
///
/// Submitting ids [3, 1, 2] gives game 3 rank 1, game 1 rank 2, game 2 rank 3.
///
/// Expected: Ok with ranks matching the submitted order
#[tokio::test]
async fn assigns_ranks_in_submitted_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_games_with_ranks(db, &[1, 2, 3]).await?;
    let (g1, g2, g3) = (games[0].id, games[1].id, games[2].id);

    GameRepository::new(db).reorder(&[g3, g1, g2]).await?;

    let ranks = ranks_by_id(db).await?;
    assert_eq!(ranks[&g3], 1);
    assert_eq!(ranks[&g1], 2);
    assert_eq!(ranks[&g2], 3);

    let listed: Vec<i32> = GameRepository::new(db)
        .get_all()
        .await?
        .iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(listed, vec![g3, g1, g2]);

    Ok(())
}

/// Tests that ids without a row are skipped while keeping their position.
///
/// Expected: Ok with existing games ranked by their position in the submission
#[tokio::test]
async fn unknown_ids_consume_a_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_games_with_ranks(db, &[1, 2]).await?;

    GameRepository::new(db)
        .reorder(&[games[1].id, 9999, games[0].id])
        .await?;

    let ranks = ranks_by_id(db).await?;
    assert_eq!(ranks[&games[1].id], 1);
    assert_eq!(ranks[&games[0].id], 3);

    Ok(())
}

/// Tests an empty reorder.
///
/// Expected: Ok with ranks untouched
#[tokio::test]
async fn empty_submission_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_games_with_ranks(db, &[4, 7]).await?;

    GameRepository::new(db).reorder(&[]).await?;

    let ranks = ranks_by_id(db).await?;
    assert_eq!(ranks[&games[0].id], 4);
    assert_eq!(ranks[&games[1].id], 7);

    Ok(())
}

/// Tests that a failing update leaves no partial reorder behind.
///
/// A trigger rejects rank updates for one game; the updates before it in the same
/// transaction must be rolled back.
///
/// Expected: Err, with every rank unchanged
#[tokio::test]
async fn failed_update_rolls_back_every_rank() -> Result<(), DbErr> {
    use sea_orm::ConnectionTrait;

    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_games_with_ranks(db, &[1, 2, 3]).await?;
    let (g1, g2, g3) = (games[0].id, games[1].id, games[2].id);

    db.execute_unprepared(&format!(
        "CREATE TRIGGER reject_rank BEFORE UPDATE OF rank ON games \
         WHEN NEW.id = {} BEGIN SELECT RAISE(ABORT, 'rank locked'); END",
        g2
    ))
    .await?;

    let result = GameRepository::new(db).reorder(&[g3, g1, g2]).await;

    assert!(result.is_err());
    let ranks = ranks_by_id(db).await?;
    assert_eq!(ranks[&g1], 1);
    assert_eq!(ranks[&g2], 2);
    assert_eq!(ranks[&g3], 3);

    Ok(())
}
