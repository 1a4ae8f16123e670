use super::*;

/// Tests an administrator creating an unowned group.
///
/// Verifies that the group starts empty with a 4-character code and no schedule.
///
/// Expected: Ok(Group) with people_count 0
#[tokio::test]
async fn admin_creates_unowned_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let faculty = factory::create_faculty(db).await?;
    let program = factory::create_program(db, faculty.id).await?;

    let group = GroupService::new(db)
        .create(
            principal(&admin),
            CreateGroupParams {
                faculty_id: faculty.id,
                program_id: program.id,
                short_name: "CS101".to_string(),
                leader_id: None,
            },
        )
        .await?;

    assert_eq!(group.short_name, "CS101");
    assert_eq!(group.code.len(), 4);
    assert!(group.code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(group.people_count, 0);
    assert_eq!(group.leader_id, None);
    assert!(!group.exists_schedule);
    assert_eq!(member_count(db, group.id).await?, 0);

    Ok(())
}

/// Tests a student creating a group.
///
/// Verifies that the student becomes leader, first member and gets the leader role.
///
/// Expected: Ok(Group) with people_count 1 and role Leader
#[tokio::test]
async fn student_creates_group_and_leads_it() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_user(db).await?;
    let faculty = factory::create_faculty(db).await?;
    let program = factory::create_program(db, faculty.id).await?;

    let group = GroupService::new(db)
        .create(
            principal(&student),
            CreateGroupParams {
                faculty_id: faculty.id,
                program_id: program.id,
                short_name: "CS102".to_string(),
                leader_id: None,
            },
        )
        .await?;

    assert_eq!(group.leader_id, Some(student.id));
    assert_eq!(group.people_count, 1);
    assert_eq!(member_count(db, group.id).await?, 1);
    assert_eq!(role_of(db, student.id).await?, UserRole::Leader);

    Ok(())
}

/// Tests an administrator naming a leader.
///
/// Expected: Ok(Group) led by the named user
#[tokio::test]
async fn admin_names_leader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let student = factory::create_user(db).await?;
    let faculty = factory::create_faculty(db).await?;
    let program = factory::create_program(db, faculty.id).await?;

    let group = GroupService::new(db)
        .create(
            principal(&admin),
            CreateGroupParams {
                faculty_id: faculty.id,
                program_id: program.id,
                short_name: "CS103".to_string(),
                leader_id: Some(student.id),
            },
        )
        .await?;

    assert_eq!(group.leader_id, Some(student.id));
    assert_eq!(group.people_count, 1);
    assert_eq!(role_of(db, student.id).await?, UserRole::Leader);
    assert_eq!(role_of(db, admin.id).await?, UserRole::Admin);

    Ok(())
}

/// Tests creating two groups with the same short name.
///
/// Expected: first Ok, second Err(GroupError::AlreadyExists)
#[tokio::test]
async fn rejects_duplicate_short_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let faculty = factory::create_faculty(db).await?;
    let program = factory::create_program(db, faculty.id).await?;

    let service = GroupService::new(db);
    let params = CreateGroupParams {
        faculty_id: faculty.id,
        program_id: program.id,
        short_name: "CS101".to_string(),
        leader_id: None,
    };

    service.create(principal(&admin), params.clone()).await?;
    let result = service.create(principal(&admin), params).await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::AlreadyExists(ref name))) if name == "CS101"
    ));

    Ok(())
}

/// Tests creating a group whose program belongs to another faculty.
///
/// Expected: Err(GroupError::FacultyProgramMismatch) and nothing persisted
#[tokio::test]
async fn rejects_program_of_other_faculty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let faculty_one = factory::create_faculty(db).await?;
    let faculty_two = factory::create_faculty(db).await?;
    let program = factory::create_program(db, faculty_two.id).await?;

    let result = GroupService::new(db)
        .create(
            principal(&admin),
            CreateGroupParams {
                faculty_id: faculty_one.id,
                program_id: program.id,
                short_name: "MIX1".to_string(),
                leader_id: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::FacultyProgramMismatch { .. }))
    ));
    assert_eq!(entity::prelude::Group::find().count(db).await?, 0);

    Ok(())
}

/// Tests unknown faculty, program and leader references.
///
/// Expected: the matching not-found variant for each
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let faculty = factory::create_faculty(db).await?;
    let program = factory::create_program(db, faculty.id).await?;
    let service = GroupService::new(db);

    let result = service
        .create(
            principal(&admin),
            CreateGroupParams {
                faculty_id: 999,
                program_id: program.id,
                short_name: "X1".to_string(),
                leader_id: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::FacultyNotFound(999)))
    ));

    let result = service
        .create(
            principal(&admin),
            CreateGroupParams {
                faculty_id: faculty.id,
                program_id: 999,
                short_name: "X2".to_string(),
                leader_id: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::ProgramNotFound(999)))
    ));

    let result = service
        .create(
            principal(&admin),
            CreateGroupParams {
                faculty_id: faculty.id,
                program_id: program.id,
                short_name: "X3".to_string(),
                leader_id: Some(999),
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::UserNotFound(999)))
    ));

    Ok(())
}

/// Tests that a leader cannot create a second group.
///
/// Expected: Err(GroupError::AlreadyInGroup)
#[tokio::test]
async fn rejects_leader_as_creator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, group) = factory::helpers::create_group_with_leader(db).await?;

    let result = GroupService::new(db)
        .create(
            principal(&leader),
            CreateGroupParams {
                faculty_id: group.faculty_id,
                program_id: group.program_id,
                short_name: "SECOND".to_string(),
                leader_id: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::AlreadyInGroup(id))) if id == leader.id
    ));

    Ok(())
}

/// Tests naming a leader who already belongs to another group.
///
/// Verifies that the failed creation leaves no group row behind.
///
/// Expected: Err(GroupError::AlreadyInGroup) and one group in the store
#[tokio::test]
async fn rejects_leader_already_in_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let (faculty, program, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, member.id, group.id).await?;

    let result = GroupService::new(db)
        .create(
            principal(&admin),
            CreateGroupParams {
                faculty_id: faculty.id,
                program_id: program.id,
                short_name: "NEW1".to_string(),
                leader_id: Some(member.id),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GroupErr(GroupError::AlreadyInGroup(_)))
    ));
    assert_eq!(entity::prelude::Group::find().count(db).await?, 1);
    assert_eq!(role_of(db, member.id).await?, UserRole::Student);

    Ok(())
}
