use crate::server::{data::feeding::FeedingRepository, model::feeding::CreateFeedingParams};
use chrono::NaiveDate;
use entity::feeding::Meal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_for_bird;
