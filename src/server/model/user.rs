//! User domain models, roles and the authenticated principal.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{RoleDto, UserDto};

/// Role of a user.
///
/// Matched exhaustively wherever permissions are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Leader,
    Admin,
}

impl Role {
    pub fn from_entity(role: UserRole) -> Self {
        match role {
            UserRole::Student => Self::Student,
            UserRole::Leader => Self::Leader,
            UserRole::Admin => Self::Admin,
        }
    }

    pub fn into_entity(self) -> UserRole {
        match self {
            Self::Student => UserRole::Student,
            Self::Leader => UserRole::Leader,
            Self::Admin => UserRole::Admin,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Self::Student => RoleDto::Student,
            Self::Leader => RoleDto::Leader,
            Self::Admin => RoleDto::Admin,
        }
    }
}

/// Authenticated caller of a group engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: i32, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: Option<String>,
    /// Argon2 PHC string; never leaves the server.
    pub password_hash: Option<String>,
    pub role: Role,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_entity(entity.role),
            full_name: entity.full_name,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: self.role.into_dto(),
            created_at: self.created_at,
        }
    }

    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.role)
    }
}

/// Parameters for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Role,
    pub full_name: Option<String>,
}
