use sea_orm::DatabaseConnection;

use crate::server::{
    data::feeding::FeedingRepository,
    error::AppError,
    model::feeding::{CreateFeedingParams, Feeding},
};

pub struct FeedingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a validated feeding
    pub async fn create(&self, params: CreateFeedingParams) -> Result<Feeding, AppError> {
        Ok(FeedingRepository::new(self.db).create(params).await?)
    }
}
