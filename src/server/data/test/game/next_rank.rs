use super::*;

/// Tests the default rank on an empty table.
///
/// Expected: Ok(1)
#[tokio::test]
async fn is_one_without_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(GameRepository::new(db).next_rank().await?, Some(1));

    Ok(())
}

/// Tests that the default rank follows the highest existing rank, not the row count.
///
/// Expected: Ok(max + 1)
#[tokio::test]
async fn follows_highest_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_games_with_ranks(db, &[2, 10, 4]).await?;

    assert_eq!(GameRepository::new(db).next_rank().await?, Some(11));

    Ok(())
}

/// Tests that no default rank exists once the highest rank is `i32::MAX`.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_after_maximum_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_games_with_ranks(db, &[3, i32::MAX]).await?;

    assert_eq!(GameRepository::new(db).next_rank().await?, None);

    Ok(())
}
