use super::*;

/// Tests inserting a batch of entries.
///
/// Expected: Ok(3) and three rows stored for the group
#[tokio::test]
async fn inserts_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let building = factory::create_building(db).await?;
    let subject_type = factory::create_subject_type(db).await?;

    let repo = ScheduleRepository::new(db);
    let inserted = repo
        .create_many(
            group.id,
            vec![
                entry(building.id, subject_type.id, 1, "09:00", false),
                entry(building.id, subject_type.id, 2, "09:00", false),
                entry(building.id, subject_type.id, 1, "09:00", true),
            ],
        )
        .await?;

    assert_eq!(inserted, 3);
    assert_eq!(repo.count_by_group(group.id).await?, 3);

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok(0) without touching the table
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;

    let repo = ScheduleRepository::new(db);

    assert_eq!(repo.create_many(group.id, Vec::new()).await?, 0);
    assert_eq!(repo.count_by_group(group.id).await?, 0);

    Ok(())
}
