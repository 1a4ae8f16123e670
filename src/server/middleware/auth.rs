use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Principal, Role, User},
};

/// Permission an endpoint can demand on top of being logged in.
pub enum Permission {
    Admin,
}

/// Resolves the session user and checks the requested permissions.
///
/// An empty permission list only requires a logged-in user that still exists.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user if every permission is satisfied.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => match user.role {
                    Role::Admin => {}
                    Role::Leader | Role::Student => {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without admin permissions".to_string(),
                        )
                        .into());
                    }
                },
            }
        }

        Ok(user)
    }

    /// Same checks as [`AuthGuard::require`], returning only the caller's id and role.
    pub async fn principal(&self, permissions: &[Permission]) -> Result<Principal, AppError> {
        Ok(self.require(permissions).await?.principal())
    }
}
