use crate::server::{
    data::{media::MediaRepository, store::MediaStore},
    error::AppError,
    model::media::RegisterMediaParams,
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod save;
