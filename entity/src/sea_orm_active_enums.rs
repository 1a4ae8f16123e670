use sea_orm::entity::prelude::*;

/// Stored role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "leader")]
    Leader,
    #[sea_orm(string_value = "admin")]
    Admin,
}
