//! Reference data: faculties, programs, buildings and subject types.
//!
//! These rows are seeded by operators and never modified by the API.

use crate::model::catalog::{BuildingDto, FacultyDto, ProgramDto, SubjectTypeDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Faculty {
    pub id: i32,
    pub name: String,
}

impl Faculty {
    pub fn from_entity(entity: entity::faculty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FacultyDto {
        FacultyDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Study program offered by a faculty.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: i32,
    pub faculty_id: i32,
    pub name: String,
}

impl Program {
    pub fn from_entity(entity: entity::program::Model) -> Self {
        Self {
            id: entity.id,
            faculty_id: entity.faculty_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ProgramDto {
        ProgramDto {
            id: self.id,
            faculty_id: self.faculty_id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl Building {
    pub fn from_entity(entity: entity::building::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            latitude: entity.latitude,
            longitude: entity.longitude,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> BuildingDto {
        BuildingDto {
            id: self.id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
        }
    }
}

/// Kind of class, e.g. lecture or seminar.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectType {
    pub id: i32,
    pub name: String,
}

impl SubjectType {
    pub fn from_entity(entity: entity::subject_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SubjectTypeDto {
        SubjectTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}
