//! Join code generation.
//!
//! Codes are 4 characters drawn independently and uniformly from `A-Z a-z 0-9` using the
//! thread-local CSPRNG. Uniqueness is checked against stored groups and again by the
//! unique index on insert; a colliding code is regenerated a bounded number of times.

use rand::Rng;
use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::server::{
    data::group::GroupRepository,
    error::{group::GroupError, AppError, StoreContext},
    model::group::{Group, NewGroup},
};

const OP: &str = "create_group";

/// Alphabet of join codes.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

/// Number of characters in a join code.
pub const CODE_LENGTH: usize = 4;

/// Attempts made before giving up on finding an unused code.
pub const MAX_CODE_ATTEMPTS: usize = 16;

/// Generates a join code with the thread-local CSPRNG.
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a join code from the given random number generator.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Unique column a rejected group insert collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupConflict {
    Code,
    ShortName,
}

/// Classifies a database error raised by a group insert.
///
/// Returns `None` when the error is not a unique constraint violation. SQLite names the
/// column in the message (`UNIQUE constraint failed: groups.code`); any other unique
/// violation on the table is attributed to the short name.
pub fn classify_conflict(err: &DbErr) -> Option<GroupConflict> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("code") => {
            Some(GroupConflict::Code)
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => Some(GroupConflict::ShortName),
        _ => None,
    }
}

/// Inserts a group under a fresh join code drawn from `next`.
///
/// A candidate already used by a stored group is skipped before the insert. A code
/// taken by a concurrent insert after that check is detected from the constraint
/// violation and also regenerated. Both count towards the same attempt limit.
///
/// # Arguments
/// - `groups` - Repository bound to the transaction that creates the group
/// - `new_group` - Group to insert; its `code` is replaced by each candidate
/// - `next` - Source of candidate codes
///
/// # Returns
/// - `Ok(Group)` - The inserted group
/// - `Err(GroupError::AlreadyExists)` - Short name is taken
/// - `Err(AppError::InternalError)` - Every attempt collided
/// - `Err(AppError::Store)` - Database error
pub async fn insert_with_unique_code<C, F>(
    groups: &GroupRepository<'_, C>,
    new_group: NewGroup,
    mut next: F,
) -> Result<Group, AppError>
where
    C: ConnectionTrait,
    F: FnMut() -> String,
{
    for attempt in 1..=MAX_CODE_ATTEMPTS {
        let code = next();
        if groups.code_exists(&code).await.context(OP)? {
            tracing::debug!(attempt, "Join code collision, regenerating");
            continue;
        }

        let candidate = NewGroup {
            code,
            ..new_group.clone()
        };
        match groups.create(candidate).await {
            Ok(group) => return Ok(group),
            Err(err) => match classify_conflict(&err) {
                Some(GroupConflict::Code) => {
                    tracing::debug!(attempt, "Join code taken by a concurrent insert, regenerating");
                }
                Some(GroupConflict::ShortName) => {
                    return Err(GroupError::AlreadyExists(new_group.short_name).into());
                }
                None => {
                    return Err(AppError::Store {
                        operation: OP,
                        source: err,
                    });
                }
            },
        }
    }

    Err(AppError::InternalError(format!(
        "Failed to generate a unique join code after {} attempts",
        MAX_CODE_ATTEMPTS
    )))
}
