use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_drone_table::Drone;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BatteryLevelAudit::Table)
                    .if_not_exists()
                    .col(pk_auto(BatteryLevelAudit::Id))
                    .col(integer(BatteryLevelAudit::DroneId))
                    .col(string(BatteryLevelAudit::SerialNumber))
                    .col(integer(BatteryLevelAudit::BatteryLevel))
                    .col(
                        timestamp_with_time_zone(BatteryLevelAudit::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battery_level_audit_drone_id")
                            .from(BatteryLevelAudit::Table, BatteryLevelAudit::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_battery_level_audit_drone_id")
                    .table(BatteryLevelAudit::Table)
                    .col(BatteryLevelAudit::DroneId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BatteryLevelAudit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BatteryLevelAudit {
    Table,
    Id,
    DroneId,
    SerialNumber,
    BatteryLevel,
    RecordedAt,
}
