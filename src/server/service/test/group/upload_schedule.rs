use super::*;

/// Tests the leader uploading a two-week schedule.
///
/// Expected: Ok(entry count) and the group flagged as having a schedule
#[tokio::test]
async fn leader_uploads_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;
    let building = factory::create_building(db).await?;
    let subject_type = factory::create_subject_type(db).await?;

    let entries = vec![
        schedule_entry(building.id, subject_type.id, 1, false),
        schedule_entry(building.id, subject_type.id, 3, false),
        schedule_entry(building.id, subject_type.id, 2, true),
    ];

    let stored = GroupService::new(db)
        .upload_schedule(principal(&leader), group.id, entries)
        .await?;

    assert_eq!(stored, 3);
    assert!(load_group(db, group.id).await?.unwrap().exists_schedule);

    Ok(())
}

/// Tests that an administrator may upload for any group.
///
/// Expected: Ok
#[tokio::test]
async fn admin_uploads_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let building = factory::create_building(db).await?;
    let subject_type = factory::create_subject_type(db).await?;

    let stored = GroupService::new(db)
        .upload_schedule(
            principal(&admin),
            group.id,
            vec![schedule_entry(building.id, subject_type.id, 5, false)],
        )
        .await?;

    assert_eq!(stored, 1);

    Ok(())
}

/// Tests an upload by a member who does not lead the group.
///
/// Expected: Err(GroupError::NotOwner) and nothing stored
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group) = factory::helpers::create_group_with_leader(db).await?;
    let student = factory::create_user(db).await?;
    let building = factory::create_building(db).await?;
    let subject_type = factory::create_subject_type(db).await?;

    let service = GroupService::new(db);
    service
        .join(principal(&student), group.id, &group.code)
        .await?;
    let result = service
        .upload_schedule(
            principal(&student),
            group.id,
            vec![schedule_entry(building.id, subject_type.id, 1, false)],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::NotOwner { .. }))
    ));
    assert_eq!(entity::prelude::Schedule::find().count(db).await?, 0);
    assert!(!load_group(db, group.id).await?.unwrap().exists_schedule);

    Ok(())
}

/// Tests uploading a second schedule.
///
/// Verifies that only the first batch is kept.
///
/// Expected: Err(GroupError::AlreadyHasSchedule)
#[tokio::test]
async fn rejects_second_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;
    let building = factory::create_building(db).await?;
    let subject_type = factory::create_subject_type(db).await?;

    let service = GroupService::new(db);
    service
        .upload_schedule(
            principal(&leader),
            group.id,
            vec![
                schedule_entry(building.id, subject_type.id, 1, false),
                schedule_entry(building.id, subject_type.id, 2, false),
            ],
        )
        .await?;
    let result = service
        .upload_schedule(
            principal(&leader),
            group.id,
            vec![schedule_entry(building.id, subject_type.id, 4, true)],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::AlreadyHasSchedule(id))) if id == group.id
    ));
    assert_eq!(entity::prelude::Schedule::find().count(db).await?, 2);

    Ok(())
}

/// Tests an upload referencing a building that does not exist.
///
/// Verifies that valid entries before the bad one are not stored either.
///
/// Expected: Err(GroupError::BuildingNotFound)
#[tokio::test]
async fn rejects_unknown_building() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;
    let building = factory::create_building(db).await?;
    let subject_type = factory::create_subject_type(db).await?;

    let result = GroupService::new(db)
        .upload_schedule(
            principal(&leader),
            group.id,
            vec![
                schedule_entry(building.id, subject_type.id, 1, false),
                schedule_entry(999, subject_type.id, 2, false),
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::BuildingNotFound(999)))
    ));
    assert_eq!(entity::prelude::Schedule::find().count(db).await?, 0);
    assert!(!load_group(db, group.id).await?.unwrap().exists_schedule);

    Ok(())
}

/// Tests an upload referencing an unknown subject type.
///
/// Expected: Err(GroupError::SubjectTypeNotFound)
#[tokio::test]
async fn rejects_unknown_subject_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;
    let building = factory::create_building(db).await?;

    let result = GroupService::new(db)
        .upload_schedule(
            principal(&leader),
            group.id,
            vec![schedule_entry(building.id, 999, 1, false)],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::SubjectTypeNotFound(999)))
    ));
    assert_eq!(entity::prelude::Schedule::find().count(db).await?, 0);

    Ok(())
}

/// Tests an upload for a group that does not exist.
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
        .upload_schedule(principal(&admin), 404, Vec::new())
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::GroupNotFound(404)))
    ));

    Ok(())
}
