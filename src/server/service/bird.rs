use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        bird::BirdRepository, feeding::FeedingRepository, photo::PhotoRepository,
        toy::ToyRepository,
    },
    error::AppError,
    model::{
        bird::{Bird, BirdDetail, CreateBirdParams, UpdateBirdParams},
        feeding::fed_for_today,
    },
};

pub struct BirdService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirdService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the birds owned by a user
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Bird>, AppError> {
        Ok(BirdRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_id(&self, bird_id: i32) -> Result<Option<Bird>, AppError> {
        Ok(BirdRepository::new(self.db).find_by_id(bird_id).await?)
    }

    /// Assembles everything the detail page shows for a bird.
    ///
    /// `today` decides the fed-for-today status; callers pass the current UTC date.
    ///
    /// # Returns
    /// - `Ok(Some(BirdDetail))` - The bird with feedings, toys, available toys and photos
    /// - `Ok(None)` - No bird with that id
    pub async fn get_detail(
        &self,
        bird_id: i32,
        today: NaiveDate,
    ) -> Result<Option<BirdDetail>, AppError> {
        let Some(bird) = BirdRepository::new(self.db).find_by_id(bird_id).await? else {
            return Ok(None);
        };

        let toy_repo = ToyRepository::new(self.db);
        let feedings = FeedingRepository::new(self.db)
            .get_for_bird(bird_id)
            .await?;
        let toys = toy_repo.get_for_bird(bird_id).await?;
        let available_toys = toy_repo.get_unassociated(bird_id).await?;
        let photos = PhotoRepository::new(self.db).get_for_bird(bird_id).await?;
        let fed_for_today = fed_for_today(&feedings, today);

        Ok(Some(BirdDetail {
            bird,
            feedings,
            toys,
            available_toys,
            photos,
            fed_for_today,
        }))
    }

    pub async fn create(&self, params: CreateBirdParams) -> Result<Bird, AppError> {
        Ok(BirdRepository::new(self.db).create(params).await?)
    }

    /// Updates a bird's breed, description and age.
    pub async fn update(&self, bird_id: i32, params: UpdateBirdParams) -> Result<Bird, AppError> {
        BirdRepository::new(self.db)
            .update(bird_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Bird not found".to_string()))
    }

    /// Deletes a bird and everything that belongs to it.
    pub async fn delete(&self, bird_id: i32) -> Result<(), AppError> {
        let deleted = BirdRepository::new(self.db).delete(bird_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Bird not found".to_string()));
        }

        Ok(())
    }
}
