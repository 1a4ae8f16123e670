use super::*;

/// Tests creating a membership.
///
/// Expected: Ok with the user linked to the group
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = MemberRepository::new(db);
    let membership = repo.create(user.id, group.id).await?;

    assert_eq!(membership.user_id, user.id);
    assert_eq!(membership.group_id, group.id);
    assert_eq!(repo.count_by_group(group.id).await?, 1);

    Ok(())
}

/// Tests that a user cannot hold two memberships.
///
/// Verifies that the second insert fails with a unique constraint violation, even
/// when it targets a different group.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_second_membership_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, program, first) = factory::helpers::create_group_with_dependencies(db).await?;
    let second = factory::create_group(db, faculty.id, program.id).await?;
    let user = factory::create_user(db).await?;

    let repo = MemberRepository::new(db);
    repo.create(user.id, first.id).await?;

    let err = repo.create(user.id, second.id).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.count_by_group(second.id).await?, 0);

    Ok(())
}
