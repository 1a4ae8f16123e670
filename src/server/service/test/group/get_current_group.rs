use super::*;

/// Tests reading the caller's group as leader and as plain member.
///
/// Verifies that the join code is visible to the leader but not to other members.
///
/// Expected: Ok(GroupDetails) for both callers
#[tokio::test]
async fn returns_group_of_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;
    let student = factory::create_user(db).await?;

    let service = GroupService::new(db);
    service
        .join(principal(&student), group.id, &group.code)
        .await?;

    let as_leader = service.get_current_group(principal(&leader)).await?;
    assert_eq!(as_leader.group.id, group.id);
    assert!(as_leader.code_visible_to(&principal(&leader)));

    let as_student = service.get_current_group(principal(&student)).await?;
    assert_eq!(as_student.group.id, group.id);
    assert!(!as_student.code_visible_to(&principal(&student)));
    assert!(as_student.into_dto(false).code.is_none());

    Ok(())
}

/// Tests reading the current group without a membership.
///
/// Expected: Err(GroupError::MemberNotFound)
#[tokio::test]
async fn rejects_user_without_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_user(db).await?;

    let result = GroupService::new(db)
        .get_current_group(principal(&student))
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::MemberNotFound(id))) if id == student.id
    ));

    Ok(())
}
