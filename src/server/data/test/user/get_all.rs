use super::*;

/// Tests listing users on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests that users come back newest first.
///
/// Expected: Ok with ids in descending order
#[tokio::test]
async fn orders_users_by_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    Ok(())
}

/// Tests that a NULL age is resolved to a default at the repository boundary.
///
/// Expected: Ok with age 0
#[tokio::test]
async fn resolves_null_age_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Ivan")
        .age(None)
        .build()
        .await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ivan");
    assert_eq!(users[0].age, 0);

    Ok(())
}
