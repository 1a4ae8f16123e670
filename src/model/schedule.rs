use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Timetable upload for a group, one or two weeks of differing parity.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UploadScheduleDto {
    pub weeks: Vec<WeekDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct WeekDto {
    pub is_even: bool,
    pub days: Vec<DayDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DayDto {
    /// 1 = Monday, 7 = Sunday.
    pub day_number: i32,
    pub subjects: Vec<SubjectDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SubjectDto {
    pub name: String,
    pub room: String,
    pub teacher: String,
    pub type_id: i32,
    pub building_id: i32,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ScheduleEntryDto {
    pub id: i32,
    pub subject_name: String,
    pub teacher: String,
    pub room: String,
    pub is_even: bool,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub building_id: i32,
    pub building_name: String,
    pub building_address: String,
    pub subject_type_id: i32,
    pub subject_type_name: String,
}

/// Result of a schedule upload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ScheduleUploadedDto {
    /// Number of schedule entries stored.
    pub entries: usize,
}
