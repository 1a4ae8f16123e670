//! Password authentication.
//!
//! Accounts are identified by e-mail and authenticated with an Argon2 password hash
//! stored in PHC string format. The administrator account is seeded at startup from
//! configuration.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError, StoreContext},
    model::user::{CreateUserParam, Role, User},
};

/// Minimum accepted password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new student account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with role `Student`
    /// - `Err(AppError::BadRequest)` - Malformed e-mail or too short password
    /// - `Err(AuthError::UserAlreadyExists)` - E-mail already registered
    /// - `Err(AppError::Store)` - Database error
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<User, AppError> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&email).await.context("sign_up")?.is_some() {
            return Err(AuthError::UserAlreadyExists(email).into());
        }

        let password_hash = hash_password(password)?;
        let user = repo
            .create(CreateUserParam {
                email: Some(email.clone()),
                password_hash: Some(password_hash),
                role: Role::Student,
                full_name: full_name.filter(|name| !name.trim().is_empty()),
            })
            .await
            .map_err(|err| duplicate_email_or_store(err, &email))?;

        tracing::info!(user_id = user.id, "Registered new user");

        Ok(user)
    }

    /// Checks credentials and returns the matching user.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::UnknownEmail)` - No account for the e-mail
    /// - `Err(AuthError::WrongPassword)` - Password does not match
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&email)
            .await
            .context("login")?
        else {
            return Err(AuthError::UnknownEmail(email).into());
        };

        let Some(stored_hash) = user.password_hash.as_deref() else {
            return Err(AuthError::WrongPassword.into());
        };
        if !verify_password(password, stored_hash)? {
            return Err(AuthError::WrongPassword.into());
        }

        tracing::info!(user_id = user.id, "User logged in");

        Ok(user)
    }

    /// Creates the administrator account if no user with the e-mail exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Administrator created
    /// - `Ok(false)` - A user with the e-mail already exists; nothing changed
    pub async fn seed_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        let email = normalize_email(email)?;
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&email).await.context("seed_admin")?.is_some() {
            return Ok(false);
        }

        let user = repo
            .create(CreateUserParam {
                email: Some(email),
                password_hash: Some(hash_password(password)?),
                role: Role::Admin,
                full_name: Some("Administrator".to_string()),
            })
            .await
            .context("seed_admin")?;

        tracing::info!(user_id = user.id, "Seeded administrator account");

        Ok(true)
    }
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::BadRequest(format!("Invalid email address '{}'", email))),
    }
}

fn duplicate_email_or_store(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AuthError::UserAlreadyExists(email.to_string()).into()
        }
        _ => AppError::Store {
            operation: "sign_up",
            source: err,
        },
    }
}

/// Hashes a password with Argon2 and a random 16-byte salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::InternalError(format!("Failed to encode password salt: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
