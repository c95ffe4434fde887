use crate::server::{data::toy::ToyRepository, model::toy::ToyParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod associate;
mod delete;
mod get_unassociated;
mod remove;
mod update;
