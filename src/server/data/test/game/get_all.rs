use super::*;

/// Tests that games are ordered by rank, then id.
///
/// Expected: Ok with ascending rank and equal ranks in ascending id order
#[tokio::test]
async fn orders_by_rank_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_games_with_ranks(db, &[3, 1, 2, 1]).await?;

    let listed = GameRepository::new(db).get_all().await?;

    let ids: Vec<i32> = listed.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![games[1].id, games[3].id, games[2].id, games[0].id]);
    let ranks: Vec<i32> = listed.iter().map(|g| g.rank).collect();
    assert_eq!(ranks, vec![1, 1, 2, 3]);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Game).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(GameRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
