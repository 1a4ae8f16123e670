//! User service for business logic.
//!
//! Profile reads and updates for the authenticated user. Role changes happen only as a
//! side effect of group engine operations.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{group::GroupError, AppError, StoreContext},
    model::user::User,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::Store)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await
            .context("get_user")
    }

    /// Replaces the full name of a user. Blank names are stored as `None`.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(GroupError::UserNotFound)` - No user with that id
    /// - `Err(AppError::Store)` - Database error during update
    pub async fn update_profile(
        &self,
        user_id: i32,
        full_name: Option<String>,
    ) -> Result<User, AppError> {
        let full_name = full_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let user = UserRepository::new(self.db)
            .update_profile(user_id, full_name)
            .await
            .context("update_profile")?
            .ok_or(GroupError::UserNotFound(user_id))?;

        tracing::info!(user_id, "Updated user profile");

        Ok(user)
    }
}
