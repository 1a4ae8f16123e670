//! Group lifecycle and membership engine.
//!
//! `GroupService` owns every rule that spans more than one table: group creation with
//! faculty and program validation, join and leave with the member counter, leader
//! transfer and the one-time schedule upload.
//!
//! Each mutating operation opens one transaction and passes it to every repository it
//! uses, including the reads its decisions depend on. On SQLite the transaction takes
//! the write lock at `BEGIN`, so concurrent mutations queue behind each other instead of
//! failing when two readers race to upgrade. An error returned with `?` drops
//! the transaction, which rolls it back; the same happens when the request future is
//! dropped midway.

pub mod code;

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, SqlErr,
    SqliteTransactionMode, TransactionOptions, TransactionTrait,
};
use std::collections::HashSet;

use crate::server::{
    data::{
        catalog::CatalogRepository, group::GroupRepository, member::MemberRepository,
        schedule::ScheduleRepository, user::UserRepository,
    },
    error::{auth::AuthError, group::GroupError, AppError, StoreContext},
    model::{
        group::{
            CreateGroupParams, Group, GroupDetails, GroupSummary, GroupSummaryFilter, NewGroup,
        },
        schedule::{NewScheduleEntry, ParityFilter, ScheduleEntry},
        user::{Principal, Role},
    },
};

/// Service providing the group engine operations.
pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new GroupService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group.
    ///
    /// Administrators may create an unowned group or name any user as its leader. A
    /// student creates a group they lead themselves. A leader already belongs to a group
    /// and cannot create another. The leader, if any, becomes the first member and is
    /// promoted to the `Leader` role.
    ///
    /// # Arguments
    /// - `principal` - Caller creating the group
    /// - `params` - Faculty, program, short name and optional leader
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with its join code
    /// - `Err(GroupError::AlreadyInGroup)` - Caller is a leader, or the leader is already a member
    /// - `Err(GroupError::AlreadyExists)` - Short name is taken
    /// - `Err(AppError::InternalError)` - No unused join code found
    /// - `Err(GroupError::FacultyNotFound | ProgramNotFound | UserNotFound)` - Unknown reference
    /// - `Err(GroupError::FacultyProgramMismatch)` - Program belongs to another faculty
    /// - `Err(AppError::Store)` - Database error
    pub async fn create(
        &self,
        principal: Principal,
        params: CreateGroupParams,
    ) -> Result<Group, AppError> {
        const OP: &str = "create_group";

        let leader_id = match principal.role {
            Role::Admin => params.leader_id,
            Role::Student => Some(principal.user_id),
            Role::Leader => return Err(GroupError::AlreadyInGroup(principal.user_id).into()),
        };

        let txn = begin_write(self.db).await.context(OP)?;
        let groups = GroupRepository::new(&txn);
        let members = MemberRepository::new(&txn);
        let users = UserRepository::new(&txn);
        let catalog = CatalogRepository::new(&txn);

        if groups
            .find_by_short_name(&params.short_name)
            .await
            .context(OP)?
            .is_some()
        {
            return Err(GroupError::AlreadyExists(params.short_name).into());
        }

        let Some(faculty) = catalog
            .get_faculty_by_id(params.faculty_id)
            .await
            .context(OP)?
        else {
            return Err(GroupError::FacultyNotFound(params.faculty_id).into());
        };
        let Some(program) = catalog
            .get_program_by_id(params.program_id)
            .await
            .context(OP)?
        else {
            return Err(GroupError::ProgramNotFound(params.program_id).into());
        };
        if program.faculty_id != faculty.id {
            return Err(GroupError::FacultyProgramMismatch {
                faculty_id: faculty.id,
                program_id: program.id,
            }
            .into());
        }

        if let Some(leader_id) = leader_id {
            if users.find_by_id(leader_id).await.context(OP)?.is_none() {
                return Err(GroupError::UserNotFound(leader_id).into());
            }
            if members.find_by_user(leader_id).await.context(OP)?.is_some() {
                return Err(GroupError::AlreadyInGroup(leader_id).into());
            }
        }

        let group = code::insert_with_unique_code(
            &groups,
            NewGroup {
                faculty_id: faculty.id,
                program_id: program.id,
                short_name: params.short_name.clone(),
                code: String::new(),
                leader_id,
            },
            code::generate_code,
        )
        .await?;

        let group = match leader_id {
            Some(leader_id) => {
                add_member(&groups, &members, leader_id, group.id, OP).await?;
                promote_to_leader(&users, leader_id, OP).await?;

                groups
                    .find_by_id(group.id)
                    .await
                    .context(OP)?
                    .ok_or(GroupError::GroupNotFound(group.id))?
            }
            None => group,
        };

        txn.commit().await.context(OP)?;

        tracing::info!(
            group_id = group.id,
            short_name = %group.short_name,
            leader_id = ?group.leader_id,
            created_by = principal.user_id,
            "Created group"
        );

        Ok(group)
    }

    /// Joins the caller to a group using its join code.
    ///
    /// # Returns
    /// - `Ok(())` - Membership created and counter incremented
    /// - `Err(GroupError::AlreadyInGroup)` - Caller already has a membership
    /// - `Err(GroupError::GroupNotFound)` - No group with that id
    /// - `Err(GroupError::WrongCode)` - Code does not match
    /// - `Err(AppError::Store)` - Database error
    pub async fn join(&self, principal: Principal, group_id: i32, code: &str) -> Result<(), AppError> {
        const OP: &str = "join_group";

        let txn = begin_write(self.db).await.context(OP)?;
        let groups = GroupRepository::new(&txn);
        let members = MemberRepository::new(&txn);

        if members
            .find_by_user(principal.user_id)
            .await
            .context(OP)?
            .is_some()
        {
            return Err(GroupError::AlreadyInGroup(principal.user_id).into());
        }

        let Some(group) = groups.find_by_id(group_id).await.context(OP)? else {
            return Err(GroupError::GroupNotFound(group_id).into());
        };

        if group.code != code {
            return Err(GroupError::WrongCode(group_id).into());
        }

        add_member(&groups, &members, principal.user_id, group.id, OP).await?;

        txn.commit().await.context(OP)?;

        tracing::info!(group_id, user_id = principal.user_id, "User joined group");

        Ok(())
    }

    /// Removes the caller from their group.
    ///
    /// A leader who leaves clears the group's leader reference and reverts to `Student`.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed and counter decremented
    /// - `Err(GroupError::MemberNotFound)` - Caller has no membership
    /// - `Err(AppError::InternalError)` - Counter already zero; nothing is changed
    /// - `Err(AppError::Store)` - Database error
    pub async fn leave(&self, principal: Principal) -> Result<(), AppError> {
        const OP: &str = "leave_group";

        let txn = begin_write(self.db).await.context(OP)?;
        let groups = GroupRepository::new(&txn);
        let members = MemberRepository::new(&txn);
        let users = UserRepository::new(&txn);

        let Some(membership) = members.find_by_user(principal.user_id).await.context(OP)? else {
            return Err(GroupError::MemberNotFound(principal.user_id).into());
        };

        members.delete_by_user(principal.user_id).await.context(OP)?;
        if !groups
            .decrement_people_count(membership.group_id)
            .await
            .context(OP)?
        {
            tracing::error!(
                group_id = membership.group_id,
                user_id = principal.user_id,
                "Member counter out of sync with memberships"
            );
            return Err(AppError::InternalError(format!(
                "people_count of group {} is already zero while a membership exists",
                membership.group_id
            )));
        }

        let Some(group) = groups.find_by_id(membership.group_id).await.context(OP)? else {
            return Err(GroupError::GroupNotFound(membership.group_id).into());
        };

        if group.is_led_by(principal.user_id) {
            groups.set_leader(group.id, None).await.context(OP)?;
            revert_to_student(&users, principal.user_id, OP).await?;
        }

        txn.commit().await.context(OP)?;

        tracing::info!(
            group_id = membership.group_id,
            user_id = principal.user_id,
            "User left group"
        );

        Ok(())
    }

    /// Makes a member of the group its leader.
    ///
    /// The previous leader, if any, stays a member and reverts to `Student`.
    ///
    /// # Returns
    /// - `Ok(())` - Leader replaced
    /// - `Err(AuthError::AccessDenied)` - Caller is not an administrator
    /// - `Err(GroupError::GroupNotFound | UserNotFound)` - Unknown group or user
    /// - `Err(GroupError::MemberNotFound)` - User is not a member of this group
    /// - `Err(AppError::Store)` - Database error
    pub async fn assign_leader(
        &self,
        principal: Principal,
        group_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        const OP: &str = "assign_leader";

        require_admin(&principal, "assign a group leader")?;

        let txn = begin_write(self.db).await.context(OP)?;
        let groups = GroupRepository::new(&txn);
        let members = MemberRepository::new(&txn);
        let users = UserRepository::new(&txn);

        let Some(group) = groups.find_by_id(group_id).await.context(OP)? else {
            return Err(GroupError::GroupNotFound(group_id).into());
        };
        if users.find_by_id(user_id).await.context(OP)?.is_none() {
            return Err(GroupError::UserNotFound(user_id).into());
        }
        if members.find_group_id_by_user(user_id).await.context(OP)? != Some(group_id) {
            return Err(GroupError::MemberNotFound(user_id).into());
        }

        if let Some(previous) = group.leader_id.filter(|&id| id != user_id) {
            revert_to_student(&users, previous, OP).await?;
        }
        groups.set_leader(group_id, Some(user_id)).await.context(OP)?;
        promote_to_leader(&users, user_id, OP).await?;

        txn.commit().await.context(OP)?;

        tracing::info!(
            group_id,
            user_id,
            previous_leader_id = ?group.leader_id,
            "Assigned group leader"
        );

        Ok(())
    }

    /// Deletes a group with its memberships and schedule.
    ///
    /// The leader reverts to `Student`; other members simply lose their membership.
    ///
    /// # Returns
    /// - `Ok(())` - Group and dependent rows deleted
    /// - `Err(AuthError::AccessDenied)` - Caller is not an administrator
    /// - `Err(GroupError::GroupNotFound)` - No group with that id
    /// - `Err(AppError::Store)` - Database error
    pub async fn delete(&self, principal: Principal, group_id: i32) -> Result<(), AppError> {
        const OP: &str = "delete_group";

        require_admin(&principal, "delete a group")?;

        let txn = begin_write(self.db).await.context(OP)?;
        let groups = GroupRepository::new(&txn);
        let members = MemberRepository::new(&txn);
        let schedules = ScheduleRepository::new(&txn);
        let users = UserRepository::new(&txn);

        let Some(group) = groups.find_by_id(group_id).await.context(OP)? else {
            return Err(GroupError::GroupNotFound(group_id).into());
        };

        if let Some(leader_id) = group.leader_id {
            revert_to_student(&users, leader_id, OP).await?;
        }

        let removed_entries = schedules.delete_by_group(group_id).await.context(OP)?;
        let removed_members = members.delete_by_group(group_id).await.context(OP)?;
        groups.delete(group_id).await.context(OP)?;

        txn.commit().await.context(OP)?;

        tracing::info!(
            group_id,
            removed_members,
            removed_entries,
            "Deleted group"
        );

        Ok(())
    }

    /// Stores the timetable of a group.
    ///
    /// Allowed once per group, for administrators and the group's leader. Every entry's
    /// subject type and building must exist; the first unknown one aborts the upload and
    /// nothing is stored.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of entries stored
    /// - `Err(GroupError::GroupNotFound)` - No group with that id
    /// - `Err(GroupError::NotOwner)` - Caller is neither an administrator nor the leader
    /// - `Err(GroupError::AlreadyHasSchedule)` - A schedule was already uploaded
    /// - `Err(GroupError::SubjectTypeNotFound | BuildingNotFound)` - Unknown reference
    /// - `Err(AppError::Store)` - Database error
    pub async fn upload_schedule(
        &self,
        principal: Principal,
        group_id: i32,
        entries: Vec<NewScheduleEntry>,
    ) -> Result<usize, AppError> {
        const OP: &str = "upload_schedule";

        let txn = begin_write(self.db).await.context(OP)?;
        let groups = GroupRepository::new(&txn);
        let schedules = ScheduleRepository::new(&txn);
        let catalog = CatalogRepository::new(&txn);

        let Some(group) = groups.find_by_id(group_id).await.context(OP)? else {
            return Err(GroupError::GroupNotFound(group_id).into());
        };

        let is_owner = match principal.role {
            Role::Admin => true,
            Role::Leader | Role::Student => group.is_led_by(principal.user_id),
        };
        if !is_owner {
            return Err(GroupError::NotOwner {
                user_id: principal.user_id,
                group_id,
            }
            .into());
        }

        if group.exists_schedule {
            return Err(GroupError::AlreadyHasSchedule(group_id).into());
        }

        let mut known_types = HashSet::new();
        let mut known_buildings = HashSet::new();
        for entry in &entries {
            if known_types.insert(entry.subject_type_id)
                && catalog
                    .get_subject_type_by_id(entry.subject_type_id)
                    .await
                    .context(OP)?
                    .is_none()
            {
                return Err(GroupError::SubjectTypeNotFound(entry.subject_type_id).into());
            }
            if known_buildings.insert(entry.building_id)
                && catalog
                    .get_building_by_id(entry.building_id)
                    .await
                    .context(OP)?
                    .is_none()
            {
                return Err(GroupError::BuildingNotFound(entry.building_id).into());
            }
        }

        let stored = schedules.create_many(group_id, entries).await.context(OP)?;

        if !groups.mark_schedule_uploaded(group_id).await.context(OP)? {
            return Err(GroupError::AlreadyHasSchedule(group_id).into());
        }

        txn.commit().await.context(OP)?;

        tracing::info!(
            group_id,
            entries = stored,
            uploaded_by = principal.user_id,
            "Uploaded group schedule"
        );

        Ok(stored)
    }

    /// Gets the timetable of a group, optionally restricted to one week parity.
    ///
    /// # Returns
    /// - `Ok(Vec<ScheduleEntry>)` - Entries ordered by day, start time and id
    /// - `Err(GroupError::GroupNotFound)` - No group with that id
    /// - `Err(AppError::Store)` - Database error
    pub async fn get_schedule(
        &self,
        group_id: i32,
        parity: ParityFilter,
    ) -> Result<Vec<ScheduleEntry>, AppError> {
        const OP: &str = "get_schedule";

        let groups = GroupRepository::new(self.db);
        if groups.find_by_id(group_id).await.context(OP)?.is_none() {
            return Err(GroupError::GroupNotFound(group_id).into());
        }

        let entries = ScheduleRepository::new(self.db)
            .get_by_group(group_id, parity)
            .await
            .context(OP)?;

        Ok(entries)
    }

    /// Lists groups, optionally filtered by faculty and program display names.
    pub async fn get_summaries(
        &self,
        filter: GroupSummaryFilter,
    ) -> Result<Vec<GroupSummary>, AppError> {
        let summaries = GroupRepository::new(self.db)
            .get_summaries(filter)
            .await
            .context("get_group_summaries")?;

        Ok(summaries)
    }

    /// Gets the group the caller belongs to.
    ///
    /// # Returns
    /// - `Ok(GroupDetails)` - The caller's group
    /// - `Err(GroupError::MemberNotFound)` - Caller has no membership
    /// - `Err(AppError::Store)` - Database error
    pub async fn get_current_group(&self, principal: Principal) -> Result<GroupDetails, AppError> {
        const OP: &str = "get_current_group";

        let Some(group_id) = MemberRepository::new(self.db)
            .find_group_id_by_user(principal.user_id)
            .await
            .context(OP)?
        else {
            return Err(GroupError::MemberNotFound(principal.user_id).into());
        };

        GroupRepository::new(self.db)
            .get_details(group_id)
            .await
            .context(OP)?
            .ok_or_else(|| GroupError::GroupNotFound(group_id).into())
    }

    /// Gets a group by id.
    pub async fn get_by_id(&self, group_id: i32) -> Result<GroupDetails, AppError> {
        GroupRepository::new(self.db)
            .get_details(group_id)
            .await
            .context("get_group")?
            .ok_or_else(|| GroupError::GroupNotFound(group_id).into())
    }
}

/// Opens a transaction that holds the write lock from its first statement.
async fn begin_write(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    db.begin_with_options(TransactionOptions {
        sqlite_transaction_mode: Some(SqliteTransactionMode::Immediate),
        ..Default::default()
    })
    .await
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn require_admin(principal: &Principal, action: &str) -> Result<(), AppError> {
    match principal.role {
        Role::Admin => Ok(()),
        Role::Leader | Role::Student => Err(AuthError::AccessDenied(
            principal.user_id,
            format!("User attempted to {} without admin permissions", action),
        )
        .into()),
    }
}

/// Inserts a membership and raises the group's counter.
///
/// A unique violation on the membership insert means another transaction gave the user
/// a membership first.
async fn add_member<C: ConnectionTrait>(
    groups: &GroupRepository<'_, C>,
    members: &MemberRepository<'_, C>,
    user_id: i32,
    group_id: i32,
    operation: &'static str,
) -> Result<(), AppError> {
    members
        .create(user_id, group_id)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::from(GroupError::AlreadyInGroup(user_id))
            } else {
                AppError::Store {
                    operation,
                    source: err,
                }
            }
        })?;

    if !groups
        .increment_people_count(group_id)
        .await
        .context(operation)?
    {
        return Err(GroupError::GroupNotFound(group_id).into());
    }

    Ok(())
}

/// Gives a student the leader role. Administrators keep their role.
async fn promote_to_leader<C: ConnectionTrait>(
    users: &UserRepository<'_, C>,
    user_id: i32,
    operation: &'static str,
) -> Result<(), AppError> {
    let Some(user) = users.find_by_id(user_id).await.context(operation)? else {
        return Err(GroupError::UserNotFound(user_id).into());
    };

    match user.role {
        Role::Student => {
            users
                .update_role(user_id, Role::Leader)
                .await
                .context(operation)?;
        }
        Role::Leader | Role::Admin => {}
    }

    Ok(())
}

/// Returns a leader to the student role. Administrators keep their role.
async fn revert_to_student<C: ConnectionTrait>(
    users: &UserRepository<'_, C>,
    user_id: i32,
    operation: &'static str,
) -> Result<(), AppError> {
    let Some(user) = users.find_by_id(user_id).await.context(operation)? else {
        return Ok(());
    };

    match user.role {
        Role::Leader => {
            users
                .update_role(user_id, Role::Student)
                .await
                .context(operation)?;
        }
        Role::Student | Role::Admin => {}
    }

    Ok(())
}
