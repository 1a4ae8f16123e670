use super::*;

/// Tests moving the leader role to another member.
///
/// Expected: Ok with the new leader promoted and the previous one demoted
#[tokio::test]
async fn transfers_leadership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let (old_leader, group) = factory::helpers::create_group_with_leader(db).await?;
    let student = factory::create_user(db).await?;

    let service = GroupService::new(db);
    service
        .join(principal(&student), group.id, &group.code)
        .await?;
    service
        .assign_leader(principal(&admin), group.id, student.id)
        .await?;

    let stored = load_group(db, group.id).await?.unwrap();
    assert_eq!(stored.leader_id, Some(student.id));
    assert_eq!(stored.people_count, 2);
    assert_eq!(role_of(db, student.id).await?, UserRole::Leader);
    assert_eq!(role_of(db, old_leader.id).await?, UserRole::Student);

    Ok(())
}

/// Tests assigning a user who is not a member of the group.
///
/// Expected: Err(GroupError::MemberNotFound) and the leader unchanged
#[tokio::test]
async fn rejects_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = GroupService::new(db)
        .assign_leader(principal(&admin), group.id, outsider.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::MemberNotFound(id))) if id == outsider.id
    ));
    assert_eq!(load_group(db, group.id).await?.unwrap().leader_id, Some(leader.id));
    assert_eq!(role_of(db, leader.id).await?, UserRole::Leader);

    Ok(())
}

/// Tests that only administrators may assign leaders.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;

    let result = GroupService::new(db)
        .assign_leader(principal(&leader), group.id, leader.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests assigning a leader in a missing group.
///
/// Expected: Err(GroupError::GroupNotFound)
#[tokio::test]
async fn rejects_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;

    let result = GroupService::new(db)
        .assign_leader(principal(&admin), 404, admin.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::GroupNotFound(404)))
    ));

    Ok(())
}
