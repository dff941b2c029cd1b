use crate::server::{
    data::{medication::MedicationRepository, store::MedicationStore},
    error::AppError,
    model::medication::NewMedication,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod save;
