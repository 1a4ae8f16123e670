//! Reference data service.
//!
//! Thin read-only facade over `CatalogRepository` that turns missing rows into
//! `GroupError` not-found variants.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::CatalogRepository,
    error::{group::GroupError, AppError, StoreContext},
    model::catalog::{Building, Faculty, Program, SubjectType},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_faculty(&self, id: i32) -> Result<Faculty, AppError> {
        CatalogRepository::new(self.db)
            .get_faculty_by_id(id)
            .await
            .context("get_faculty")?
            .ok_or_else(|| GroupError::FacultyNotFound(id).into())
    }

    pub async fn get_program(&self, id: i32) -> Result<Program, AppError> {
        CatalogRepository::new(self.db)
            .get_program_by_id(id)
            .await
            .context("get_program")?
            .ok_or_else(|| GroupError::ProgramNotFound(id).into())
    }

    pub async fn get_building(&self, id: i32) -> Result<Building, AppError> {
        CatalogRepository::new(self.db)
            .get_building_by_id(id)
            .await
            .context("get_building")?
            .ok_or_else(|| GroupError::BuildingNotFound(id).into())
    }

    pub async fn get_subject_type(&self, id: i32) -> Result<SubjectType, AppError> {
        CatalogRepository::new(self.db)
            .get_subject_type_by_id(id)
            .await
            .context("get_subject_type")?
            .ok_or_else(|| GroupError::SubjectTypeNotFound(id).into())
    }

    pub async fn get_all_faculties(&self) -> Result<Vec<Faculty>, AppError> {
        CatalogRepository::new(self.db)
            .get_all_faculties()
            .await
            .context("get_all_faculties")
    }

    /// Gets the programs of a faculty.
    ///
    /// # Returns
    /// - `Ok(Vec<Program>)` - Programs ordered by name
    /// - `Err(GroupError::FacultyNotFound)` - No faculty with that id
    pub async fn get_programs_by_faculty(&self, faculty_id: i32) -> Result<Vec<Program>, AppError> {
        let faculty = self.get_faculty(faculty_id).await?;

        CatalogRepository::new(self.db)
            .get_programs_by_faculty(faculty.id)
            .await
            .context("get_programs_by_faculty")
    }

    pub async fn get_all_buildings(&self) -> Result<Vec<Building>, AppError> {
        CatalogRepository::new(self.db)
            .get_all_buildings()
            .await
            .context("get_all_buildings")
    }

    pub async fn get_all_subject_types(&self) -> Result<Vec<SubjectType>, AppError> {
        CatalogRepository::new(self.db)
            .get_all_subject_types()
            .await
            .context("get_all_subject_types")
    }
}
