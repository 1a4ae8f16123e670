//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and codes in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a unique 4-character join code from the counter.
///
/// Codes are base-62 encoded so they stay within the join code alphabet.
pub fn next_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut value = next_id();
    let mut code = [b'A'; 4];
    for slot in code.iter_mut().rev() {
        *slot = CHARSET[(value % CHARSET.len() as u64) as usize];
        value /= CHARSET.len() as u64;
    }

    code.iter().map(|&b| b as char).collect()
}

/// Creates a faculty, a program belonging to it and an unowned group.
///
/// # Returns
/// - `Ok((faculty, program, group))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::faculty::Model,
        entity::program::Model,
        entity::group::Model,
    ),
    DbErr,
> {
    let faculty = crate::factory::faculty::create_faculty(db).await?;
    let program = crate::factory::program::create_program(db, faculty.id).await?;
    let group = crate::factory::group::create_group(db, faculty.id, program.id).await?;

    Ok((faculty, program, group))
}

/// Creates a group whose leader is a freshly created leader-role user.
///
/// The leader is inserted as the group's first member and `people_count` is set to 1,
/// matching what group creation with a leader produces.
///
/// # Returns
/// - `Ok((leader, group))` - The leader user and the group
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_leader(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::group::Model), DbErr> {
    let faculty = crate::factory::faculty::create_faculty(db).await?;
    let program = crate::factory::program::create_program(db, faculty.id).await?;
    let leader = crate::factory::user::UserFactory::new(db)
        .role(entity::sea_orm_active_enums::UserRole::Leader)
        .build()
        .await?;
    let group = crate::factory::group::GroupFactory::new(db, faculty.id, program.id)
        .leader(Some(leader.id))
        .people_count(1)
        .build()
        .await?;
    crate::factory::member::create_member(db, leader.id, group.id).await?;

    Ok((leader, group))
}
