use super::*;

/// Tests changing a user's role.
///
/// Verifies that the stored role is replaced and other users are untouched.
///
/// Expected: Ok(true) and the new role persisted
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.update_role(user.id, Role::Leader).await?);

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.role, Role::Leader);

    let untouched = repo.find_by_id(other.id).await?.unwrap();
    assert_eq!(untouched.role, Role::Student);

    Ok(())
}

/// Tests changing the role of a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.update_role(42, Role::Admin).await?);

    Ok(())
}

/// Tests demoting a leader back to student.
///
/// Expected: Ok(true) with role Student
#[tokio::test]
async fn reverts_leader_to_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::user::create_user_with_role(db, UserRole::Leader).await?;

    let repo = UserRepository::new(db);
    repo.update_role(leader.id, Role::Student).await?;

    let updated = repo.find_by_id(leader.id).await?.unwrap();
    assert_eq!(updated.role, Role::Student);

    Ok(())
}
