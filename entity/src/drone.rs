use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "drone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub serial_number: String,
    pub model: String,
    pub weight_limit: f64,
    pub battery_level: i32,
    pub state: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::battery_level_audit::Entity")]
    BatteryLevelAudit,
    #[sea_orm(has_many = "super::medication::Entity")]
    Medication,
}

impl Related<super::battery_level_audit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatteryLevelAudit.def()
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
