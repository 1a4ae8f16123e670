use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a group.
///
/// `leader_id` is only honoured for administrators; a student creating a group
/// always becomes its leader.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateGroupDto {
    pub faculty_id: i32,
    pub program_id: i32,
    pub short_name: String,
    #[serde(default)]
    pub leader_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct JoinGroupDto {
    pub code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AssignLeaderDto {
    pub user_id: i32,
}

/// Full view of a single group.
///
/// `code` is present only when the caller is the group's leader or an administrator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub short_name: String,
    pub faculty_id: i32,
    pub faculty_name: String,
    pub program_id: i32,
    pub program_name: String,
    pub leader_id: Option<i32>,
    pub people_count: i32,
    pub exists_schedule: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row of the group listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GroupSummaryDto {
    pub id: i32,
    pub short_name: String,
    pub faculty_name: String,
    pub program_name: String,
    pub people_count: i32,
    pub exists_schedule: bool,
}
