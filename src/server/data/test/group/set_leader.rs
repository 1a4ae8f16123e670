use super::*;

/// Tests assigning and clearing the leader of a group.
///
/// Expected: leader_id follows the updates
#[tokio::test]
async fn sets_and_clears_leader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);

    assert!(repo.set_leader(group.id, Some(user.id)).await?);
    assert_eq!(
        repo.find_by_id(group.id).await?.unwrap().leader_id,
        Some(user.id)
    );

    assert!(repo.set_leader(group.id, None).await?);
    assert_eq!(repo.find_by_id(group.id).await?.unwrap().leader_id, None);

    Ok(())
}
