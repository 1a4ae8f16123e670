//! Building factory for creating test building entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test buildings.
pub struct BuildingFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl<'a> BuildingFactory<'a> {
    /// Creates a new BuildingFactory.
    ///
    /// Defaults:
    /// - name: `"Building {id}"`
    /// - address: `"{id} Campus Street"`
    /// - latitude/longitude: `0.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Building {}", id),
            address: format!("{} Campus Street", id),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Sets the building display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the street address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the coordinates.
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Builds and inserts the building entity into the database.
    pub async fn build(self) -> Result<entity::building::Model, DbErr> {
        entity::building::ActiveModel {
            name: ActiveValue::Set(self.name),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a building with default values.
pub async fn create_building(db: &DatabaseConnection) -> Result<entity::building::Model, DbErr> {
    BuildingFactory::new(db).build().await
}
