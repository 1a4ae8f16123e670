use super::*;

/// Tests deleting the membership of a user.
///
/// Expected: Ok(true) the first time, Ok(false) once nothing is left
#[tokio::test]
async fn deletes_membership_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_member(db, user.id, group.id).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.delete_by_user(user.id).await?);
    assert!(!repo.delete_by_user(user.id).await?);
    assert_eq!(repo.count_by_group(group.id).await?, 0);

    Ok(())
}

/// Tests deleting every membership of a group.
///
/// Verifies that memberships of other groups survive.
///
/// Expected: Ok(2) and the other group's member untouched
#[tokio::test]
async fn deletes_all_memberships_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, program, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let other = factory::create_group(db, faculty.id, program.id).await?;
    for _ in 0..2 {
        let user = factory::create_user(db).await?;
        factory::create_member(db, user.id, group.id).await?;
    }
    let survivor = factory::create_user(db).await?;
    factory::create_member(db, survivor.id, other.id).await?;

    let repo = MemberRepository::new(db);

    assert_eq!(repo.delete_by_group(group.id).await?, 2);
    assert_eq!(repo.count_by_group(group.id).await?, 0);
    assert_eq!(repo.find_group_id_by_user(survivor.id).await?, Some(other.id));

    Ok(())
}
