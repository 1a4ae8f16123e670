//! Group engine error taxonomy.
//!
//! Every rule the group engine enforces has a dedicated variant. Variants fall into three
//! coarse kinds, exposed through [`GroupError::kind`]. Transport status codes are chosen
//! by `AppError` at the HTTP boundary. Store failures are not represented here; they
//! travel as `AppError::Store`.

use thiserror::Error;

/// Coarse classification of a [`GroupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// The operation would create a duplicate or repeat a one-time transition.
    AlreadyExists,
    /// The request contradicts stored state (wrong code, wrong owner, wrong faculty).
    Mismatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("Group {0} not found")]
    GroupNotFound(i32),

    #[error("Faculty {0} not found")]
    FacultyNotFound(i32),

    #[error("Program {0} not found")]
    ProgramNotFound(i32),

    #[error("Building {0} not found")]
    BuildingNotFound(i32),

    #[error("Subject type {0} not found")]
    SubjectTypeNotFound(i32),

    #[error("User {0} not found")]
    UserNotFound(i32),

    /// The user has no membership (or none in the group the operation targets).
    #[error("User {0} is not a member of the group")]
    MemberNotFound(i32),

    #[error("Group with short name '{0}' already exists")]
    AlreadyExists(String),

    #[error("User {0} is already in a group")]
    AlreadyInGroup(i32),

    #[error("Group {0} already has a schedule")]
    AlreadyHasSchedule(i32),

    #[error("Program {program_id} does not belong to faculty {faculty_id}")]
    FacultyProgramMismatch { faculty_id: i32, program_id: i32 },

    #[error("Wrong join code for group {0}")]
    WrongCode(i32),

    #[error("User {user_id} is not the owner of group {group_id}")]
    NotOwner { user_id: i32, group_id: i32 },
}

impl GroupError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::GroupNotFound(_)
            | Self::FacultyNotFound(_)
            | Self::ProgramNotFound(_)
            | Self::BuildingNotFound(_)
            | Self::SubjectTypeNotFound(_)
            | Self::UserNotFound(_)
            | Self::MemberNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_) | Self::AlreadyInGroup(_) | Self::AlreadyHasSchedule(_) => {
                ErrorKind::AlreadyExists
            }
            Self::FacultyProgramMismatch { .. } | Self::WrongCode(_) | Self::NotOwner { .. } => {
                ErrorKind::Mismatch
            }
        }
    }
}
