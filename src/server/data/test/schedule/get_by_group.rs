use super::*;

/// Tests the ordering of schedule entries.
///
/// Verifies ordering by day of week, then start time, and that building and subject
/// type names are joined in.
///
/// Expected: Ok with entries in (day, start) order
#[tokio::test]
async fn orders_by_day_then_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let building = factory::building::BuildingFactory::new(db)
        .name("Main")
        .address("1 University Square")
        .build()
        .await?;
    let lecture = factory::subject_type::SubjectTypeFactory::new(db)
        .name("Lecture")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    repo.create_many(
        group.id,
        vec![
            entry(building.id, lecture.id, 3, "09:00", false),
            entry(building.id, lecture.id, 1, "13:00", false),
            entry(building.id, lecture.id, 1, "09:00", false),
        ],
    )
    .await?;

    let entries = repo.get_by_group(group.id, ParityFilter::All).await?;

    let order: Vec<_> = entries
        .iter()
        .map(|e| (e.day_of_week, e.start_time.as_str()))
        .collect();
    assert_eq!(order, vec![(1, "09:00"), (1, "13:00"), (3, "09:00")]);
    assert_eq!(entries[0].building_name, "Main");
    assert_eq!(entries[0].building_address, "1 University Square");
    assert_eq!(entries[0].subject_type_name, "Lecture");

    Ok(())
}

/// Tests filtering entries by week parity.
///
/// Expected: Even returns only even entries, Odd only odd ones, All both
#[tokio::test]
async fn filters_by_parity() -> Result<(), DbErr> {
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
    repo.create_many(
        group.id,
        vec![
            entry(building.id, subject_type.id, 1, "09:00", true),
            entry(building.id, subject_type.id, 1, "11:00", false),
            entry(building.id, subject_type.id, 2, "09:00", false),
        ],
    )
    .await?;

    let even = repo.get_by_group(group.id, ParityFilter::Even).await?;
    assert_eq!(even.len(), 1);
    assert!(even.iter().all(|e| e.is_even));

    let odd = repo.get_by_group(group.id, ParityFilter::Odd).await?;
    assert_eq!(odd.len(), 2);
    assert!(odd.iter().all(|e| !e.is_even));

    assert_eq!(repo.get_by_group(group.id, ParityFilter::All).await?.len(), 3);

    Ok(())
}

/// Tests that entries of other groups are not returned.
///
/// Expected: Ok with an empty list for a group without entries
#[tokio::test]
async fn scopes_entries_to_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (faculty, program, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let other = factory::create_group(db, faculty.id, program.id).await?;
    let building = factory::create_building(db).await?;
    let subject_type = factory::create_subject_type(db).await?;
    factory::create_schedule(db, group.id, building.id, subject_type.id).await?;

    let repo = ScheduleRepository::new(db);

    assert!(repo
        .get_by_group(other.id, ParityFilter::All)
        .await?
        .is_empty());
    assert_eq!(repo.get_by_group(group.id, ParityFilter::All).await?.len(), 1);

    Ok(())
}
