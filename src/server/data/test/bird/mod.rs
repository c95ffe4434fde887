use crate::server::{
    data::bird::BirdRepository,
    model::bird::{CreateBirdParams, UpdateBirdParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
mod update;
