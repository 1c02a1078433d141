use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok with one row removed
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let keep = factory::create_user(db).await?;
    let remove = factory::create_user(db).await?;

    let removed = UserRepository::new(db).delete(remove.id).await?;

    assert_eq!(removed, 1);
    let remaining = UserRepository::new(db).get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok with zero rows removed and the table unchanged
#[tokio::test]
async fn deleting_absent_id_is_not_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let removed = UserRepository::new(db).delete(9999).await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
