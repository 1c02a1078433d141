use super::*;

/// Tests inserting a user.
///
/// Expected: Ok with the user stored and an id assigned
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Grace".to_string(),
            age: 42,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Grace");
    assert_eq!(user.age, 42);

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert_eq!(stored.unwrap().age, Some(42));

    Ok(())
}

/// Tests that insert fails when the table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Eve".to_string(),
            age: 20,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
