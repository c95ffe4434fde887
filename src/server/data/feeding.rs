//! Feeding data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::feeding::{CreateFeedingParams, Feeding};

pub struct FeedingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a feeding for `params.bird_id`.
    pub async fn create(&self, params: CreateFeedingParams) -> Result<Feeding, DbErr> {
        let entity = entity::feeding::ActiveModel {
            date: ActiveValue::Set(params.date),
            meal: ActiveValue::Set(params.meal),
            bird_id: ActiveValue::Set(params.bird_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feeding::from_entity(entity))
    }

    /// Gets a bird's feedings, newest date first; same-day feedings in insertion order.
    pub async fn get_for_bird(&self, bird_id: i32) -> Result<Vec<Feeding>, DbErr> {
        let entities = entity::prelude::Feeding::find()
            .filter(entity::feeding::Column::BirdId.eq(bird_id))
            .order_by_desc(entity::feeding::Column::Date)
            .order_by_asc(entity::feeding::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Feeding::from_entity).collect())
    }
}
