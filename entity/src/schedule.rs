use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    pub building_id: i32,
    pub subject_type_id: i32,
    pub subject_name: String,
    pub teacher: String,
    pub room: String,
    pub is_even: bool,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::building::Entity",
        from = "Column::BuildingId",
        to = "super::building::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Building,
    #[sea_orm(
        belongs_to = "super::subject_type::Entity",
        from = "Column::SubjectTypeId",
        to = "super::subject_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    SubjectType,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::building::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Building.def()
    }
}

impl Related<super::subject_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
