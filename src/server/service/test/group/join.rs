use super::*;

/// Tests joining a group with the right code.
///
/// Expected: Ok and people_count equal to the membership count
#[tokio::test]
async fn joins_with_correct_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_leader(db).await?;
    let student = factory::create_user(db).await?;

    GroupService::new(db)
        .join(principal(&student), group.id, &group.code)
        .await?;

    let stored = load_group(db, group.id).await?.unwrap();
    assert_eq!(stored.people_count, 2);
    assert_eq!(member_count(db, group.id).await?, 2);

    Ok(())
}

/// Tests joining with a wrong code.
///
/// Verifies that the comparison is case-sensitive and nothing is written.
///
/// Expected: Err(GroupError::WrongCode)
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faculty = factory::create_faculty(db).await?;
    let program = factory::create_program(db, faculty.id).await?;
    let group = factory::group::GroupFactory::new(db, faculty.id, program.id)
        .code("AbCd")
        .build()
        .await?;
    let student = factory::create_user(db).await?;

    let result = GroupService::new(db)
        .join(principal(&student), group.id, "abcd")
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::WrongCode(id))) if id == group.id
    ));
    assert_eq!(load_group(db, group.id).await?.unwrap().people_count, 0);
    assert_eq!(member_count(db, group.id).await?, 0);

    Ok(())
}

/// Tests joining a group that does not exist.
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

    let student = factory::create_user(db).await?;

    let result = GroupService::new(db)
        .join(principal(&student), 404, "AAAA")
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::GroupNotFound(404)))
    ));

    Ok(())
}

/// Tests joining while already being a member.
///
/// Expected: Err(GroupError::AlreadyInGroup) and counters unchanged
#[tokio::test]
async fn rejects_user_already_in_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, program, first) = factory::helpers::create_group_with_dependencies(db).await?;
    let second = factory::create_group(db, faculty.id, program.id).await?;
    let student = factory::create_user(db).await?;

    let service = GroupService::new(db);
    service
        .join(principal(&student), first.id, &first.code)
        .await?;
    let result = service
        .join(principal(&student), second.id, &second.code)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::AlreadyInGroup(_)))
    ));
    assert_eq!(load_group(db, first.id).await?.unwrap().people_count, 1);
    assert_eq!(load_group(db, second.id).await?.unwrap().people_count, 0);

    Ok(())
}
