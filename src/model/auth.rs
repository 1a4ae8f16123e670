use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a new account.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SignUpDto {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Request body for logging in.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}
