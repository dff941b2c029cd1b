use crate::server::{
    data::{drone::DroneRepository, store::DroneStore},
    error::{drone::DroneError, AppError},
    model::drone::{DroneModel, DroneState, NewDrone},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists_by_serial_number;
mod find_all;
mod find_by_id;
mod save;
