//! Reference data repository.
//!
//! Read-only access to faculties, programs, buildings and subject types.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::catalog::{Building, Faculty, Program, SubjectType};

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    /// Creates a new CatalogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to query through
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_faculty_by_id(&self, id: i32) -> Result<Option<Faculty>, DbErr> {
        let entity = entity::prelude::Faculty::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Faculty::from_entity))
    }

    pub async fn get_program_by_id(&self, id: i32) -> Result<Option<Program>, DbErr> {
        let entity = entity::prelude::Program::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Program::from_entity))
    }

    pub async fn get_building_by_id(&self, id: i32) -> Result<Option<Building>, DbErr> {
        let entity = entity::prelude::Building::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Building::from_entity))
    }

    pub async fn get_subject_type_by_id(&self, id: i32) -> Result<Option<SubjectType>, DbErr> {
        let entity = entity::prelude::SubjectType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(SubjectType::from_entity))
    }

    /// Gets all faculties ordered by name.
    pub async fn get_all_faculties(&self) -> Result<Vec<Faculty>, DbErr> {
        let entities = entity::prelude::Faculty::find()
            .order_by_asc(entity::faculty::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Faculty::from_entity).collect())
    }

    /// Gets the programs of a faculty ordered by name.
    ///
    /// Returns an empty list for an unknown faculty; callers check existence first.
    pub async fn get_programs_by_faculty(&self, faculty_id: i32) -> Result<Vec<Program>, DbErr> {
        let entities = entity::prelude::Program::find()
            .filter(entity::program::Column::FacultyId.eq(faculty_id))
            .order_by_asc(entity::program::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Program::from_entity).collect())
    }

    pub async fn get_all_buildings(&self) -> Result<Vec<Building>, DbErr> {
        let entities = entity::prelude::Building::find()
            .order_by_asc(entity::building::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Building::from_entity).collect())
    }

    pub async fn get_all_subject_types(&self) -> Result<Vec<SubjectType>, DbErr> {
        let entities = entity::prelude::SubjectType::find()
            .order_by_asc(entity::subject_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SubjectType::from_entity).collect())
    }
}
