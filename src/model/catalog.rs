use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FacultyDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProgramDto {
    pub id: i32,
    pub faculty_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BuildingDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SubjectTypeDto {
    pub id: i32,
    pub name: String,
}
