//! Group domain models and parameters.
//!
//! A group is a cohort of users sharing one timetable. `people_count` is a denormalized
//! counter kept equal to the number of membership rows by the group engine.

use chrono::{DateTime, Utc};

use crate::{
    model::group::{CreateGroupDto, GroupDto, GroupSummaryDto},
    server::model::user::{Principal, Role},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub leader_id: Option<i32>,
    pub faculty_id: i32,
    pub program_id: i32,
    pub short_name: String,
    /// 4-character join code.
    pub code: String,
    pub people_count: i32,
    pub exists_schedule: bool,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Converts an entity model to a group domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            leader_id: entity.leader_id,
            faculty_id: entity.faculty_id,
            program_id: entity.program_id,
            short_name: entity.short_name,
            code: entity.code,
            people_count: entity.people_count,
            exists_schedule: entity.exists_schedule,
            created_at: entity.created_at,
        }
    }

    pub fn is_led_by(&self, user_id: i32) -> bool {
        self.leader_id == Some(user_id)
    }
}

/// Group together with the display names of its faculty and program.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDetails {
    pub group: Group,
    pub faculty_name: String,
    pub program_name: String,
}

impl GroupDetails {
    /// Whether `principal` may see the join code: administrators and the group's leader.
    pub fn code_visible_to(&self, principal: &Principal) -> bool {
        match principal.role {
            Role::Admin => true,
            Role::Leader | Role::Student => self.group.is_led_by(principal.user_id),
        }
    }

    /// Converts to a DTO.
    ///
    /// # Arguments
    /// - `include_code` - Whether the caller may see the join code
    pub fn into_dto(self, include_code: bool) -> GroupDto {
        GroupDto {
            id: self.group.id,
            short_name: self.group.short_name,
            faculty_id: self.group.faculty_id,
            faculty_name: self.faculty_name,
            program_id: self.group.program_id,
            program_name: self.program_name,
            leader_id: self.group.leader_id,
            people_count: self.group.people_count,
            exists_schedule: self.group.exists_schedule,
            code: include_code.then_some(self.group.code),
            created_at: self.group.created_at,
        }
    }
}

/// Row of the group listing.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub id: i32,
    pub short_name: String,
    pub faculty_name: String,
    pub program_name: String,
    pub people_count: i32,
    pub exists_schedule: bool,
}

impl GroupSummary {
    pub fn into_dto(self) -> GroupSummaryDto {
        GroupSummaryDto {
            id: self.id,
            short_name: self.short_name,
            faculty_name: self.faculty_name,
            program_name: self.program_name,
            people_count: self.people_count,
            exists_schedule: self.exists_schedule,
        }
    }
}

/// Optional exact-match filters on faculty and program display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSummaryFilter {
    pub faculty: Option<String>,
    pub program: Option<String>,
}

/// Parameters for the group creation operation.
#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub faculty_id: i32,
    pub program_id: i32,
    pub short_name: String,
    /// Leader requested by an administrator. Ignored for students.
    pub leader_id: Option<i32>,
}

impl CreateGroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self {
            faculty_id: dto.faculty_id,
            program_id: dto.program_id,
            short_name: dto.short_name.trim().to_string(),
            leader_id: dto.leader_id,
        }
    }
}

/// Row written by `GroupRepository::create`.
///
/// New groups start empty; the counter is raised as memberships are created.
#[derive(Debug, Clone)]
pub struct NewGroup {
    pub faculty_id: i32,
    pub program_id: i32,
    pub short_name: String,
    pub code: String,
    pub leader_id: Option<i32>,
}

/// Exclusive relation of one user to one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub id: i32,
    pub user_id: i32,
    pub group_id: i32,
}

impl Membership {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            group_id: entity.group_id,
        }
    }
}
