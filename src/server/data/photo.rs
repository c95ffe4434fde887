//! Photo data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::photo::Photo;

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a photo that has already been uploaded to `url`.
    pub async fn create(&self, bird_id: i32, url: String) -> Result<Photo, DbErr> {
        let entity = entity::photo::ActiveModel {
            url: ActiveValue::Set(url),
            bird_id: ActiveValue::Set(bird_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Photo::from_entity(entity))
    }

    pub async fn get_for_bird(&self, bird_id: i32) -> Result<Vec<Photo>, DbErr> {
        let entities = entity::prelude::Photo::find()
            .filter(entity::photo::Column::BirdId.eq(bird_id))
            .order_by_asc(entity::photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Photo::from_entity).collect())
    }
}
