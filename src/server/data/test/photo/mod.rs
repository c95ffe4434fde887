use crate::server::data::photo::PhotoRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
