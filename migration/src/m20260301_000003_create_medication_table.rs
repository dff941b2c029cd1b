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
                    .table(Medication::Table)
                    .if_not_exists()
                    .col(pk_auto(Medication::Id))
                    .col(integer(Medication::DroneId))
                    .col(string(Medication::Name))
                    .col(string(Medication::Code))
                    .col(double(Medication::Weight))
                    .col(text_null(Medication::ImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medication_drone_id")
                            .from(Medication::Table, Medication::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Medication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Medication {
    Table,
    Id,
    DroneId,
    Name,
    Code,
    Weight,
    ImageUrl,
}
