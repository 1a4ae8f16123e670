pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_faculty_table;
mod m20250301_000002_create_program_table;
mod m20250301_000003_create_building_table;
mod m20250301_000004_create_subject_type_table;
mod m20250301_000005_create_user_table;
mod m20250302_000006_create_group_table;
mod m20250302_000007_create_member_table;
mod m20250303_000008_create_schedule_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_faculty_table::Migration),
            Box::new(m20250301_000002_create_program_table::Migration),
            Box::new(m20250301_000003_create_building_table::Migration),
            Box::new(m20250301_000004_create_subject_type_table::Migration),
            Box::new(m20250301_000005_create_user_table::Migration),
            Box::new(m20250302_000006_create_group_table::Migration),
            Box::new(m20250302_000007_create_member_table::Migration),
            Box::new(m20250303_000008_create_schedule_table::Migration),
        ]
    }
}
