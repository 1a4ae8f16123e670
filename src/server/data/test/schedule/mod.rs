use crate::server::{
    data::schedule::ScheduleRepository,
    model::schedule::{NewScheduleEntry, ParityFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod get_by_group;

fn entry(building_id: i32, subject_type_id: i32, day: i32, start: &str, is_even: bool) -> NewScheduleEntry {
    NewScheduleEntry {
        building_id,
        subject_type_id,
        subject_name: format!("Subject {} {}", day, start),
        teacher: "Dr. Smith".to_string(),
        room: "101".to_string(),
        is_even,
        day_of_week: day,
        start_time: start.to_string(),
        end_time: "23:59".to_string(),
    }
}
