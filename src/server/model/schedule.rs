//! Schedule domain models, the parity filter and upload validation.

use crate::{
    model::schedule::{ScheduleEntryDto, UploadScheduleDto},
    server::error::AppError,
};

/// Week parity selection for schedule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParityFilter {
    #[default]
    All,
    Even,
    Odd,
}

impl ParityFilter {
    /// Parses the `week_even` query value.
    ///
    /// Accepts `true`/`even` and `false`/`odd` (case-insensitive). Anything else,
    /// including an absent value, selects every entry.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("true") | Some("even") => Self::Even,
            Some("false") | Some("odd") => Self::Odd,
            _ => Self::All,
        }
    }

    /// Value of `schedules.is_even` to filter on, `None` for all.
    pub fn is_even(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Even => Some(true),
            Self::Odd => Some(false),
        }
    }
}

/// Schedule row to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScheduleEntry {
    pub building_id: i32,
    pub subject_type_id: i32,
    pub subject_name: String,
    pub teacher: String,
    pub room: String,
    pub is_even: bool,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
}

impl NewScheduleEntry {
    /// Flattens and validates an uploaded timetable.
    ///
    /// A timetable holds 1 or 2 weeks; two weeks must differ in parity. Each week holds
    /// 1 to 7 days numbered 1..=7.
    ///
    /// # Returns
    /// - `Ok(Vec<NewScheduleEntry>)` - One entry per subject, in upload order
    /// - `Err(AppError::BadRequest)` - The payload violates the shape rules
    pub fn from_upload_dto(dto: UploadScheduleDto) -> Result<Vec<Self>, AppError> {
        if dto.weeks.is_empty() || dto.weeks.len() > 2 {
            return Err(AppError::BadRequest(format!(
                "A schedule must contain 1 or 2 weeks, got {}",
                dto.weeks.len()
            )));
        }

        if let [first, second] = dto.weeks.as_slice() {
            if first.is_even == second.is_even {
                return Err(AppError::BadRequest(
                    "Two weeks of a schedule must differ in parity".to_string(),
                ));
            }
        }

        let mut entries = Vec::new();
        for week in dto.weeks {
            if week.days.is_empty() || week.days.len() > 7 {
                return Err(AppError::BadRequest(format!(
                    "A week must contain 1 to 7 days, got {}",
                    week.days.len()
                )));
            }

            for day in week.days {
                if !(1..=7).contains(&day.day_number) {
                    return Err(AppError::BadRequest(format!(
                        "Day number must be between 1 and 7, got {}",
                        day.day_number
                    )));
                }

                for subject in day.subjects {
                    entries.push(Self {
                        building_id: subject.building_id,
                        subject_type_id: subject.type_id,
                        subject_name: subject.name,
                        teacher: subject.teacher,
                        room: subject.room,
                        is_even: week.is_even,
                        day_of_week: day.day_number,
                        start_time: subject.start_time,
                        end_time: subject.end_time,
                    });
                }
            }
        }

        Ok(entries)
    }
}

/// Stored schedule entry joined with its building and subject type.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub id: i32,
    pub group_id: i32,
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

impl ScheduleEntry {
    pub fn into_dto(self) -> ScheduleEntryDto {
        ScheduleEntryDto {
            id: self.id,
            subject_name: self.subject_name,
            teacher: self.teacher,
            room: self.room,
            is_even: self.is_even,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            building_id: self.building_id,
            building_name: self.building_name,
            building_address: self.building_address,
            subject_type_id: self.subject_type_id,
            subject_type_name: self.subject_type_name,
        }
    }
}
