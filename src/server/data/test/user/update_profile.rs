use super::*;

/// Tests updating the full name of a user.
///
/// Expected: Ok(Some(User)) with the new name
#[tokio::test]
async fn updates_full_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(user.id, Some("New Name".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.full_name.as_deref(), Some("New Name"));
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating the profile of a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(repo.update_profile(7, None).await?.is_none());

    Ok(())
}
