use super::*;

/// Tests deleting a group.
///
/// Verifies that the row is gone and that a second delete reports nothing removed.
///
/// Expected: Ok(true), then Ok(false)
#[tokio::test]
async fn deletes_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;

    let repo = GroupRepository::new(db);

    assert!(repo.delete(group.id).await?);
    assert!(repo.find_by_id(group.id).await?.is_none());
    assert!(!repo.delete(group.id).await?);

    Ok(())
}
