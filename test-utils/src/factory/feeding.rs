//! Feeding factory for creating test feeding entities.

use chrono::{NaiveDate, Utc};
use entity::feeding::Meal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating feedings of a bird.
pub struct FeedingFactory<'a> {
    db: &'a DatabaseConnection,
    bird_id: i32,
    date: NaiveDate,
    meal: Meal,
}

impl<'a> FeedingFactory<'a> {
    /// Creates a new FeedingFactory with default values.
    ///
    /// Defaults:
    /// - date: today (UTC)
    /// - meal: `Meal::Breakfast`
    pub fn new(db: &'a DatabaseConnection, bird_id: i32) -> Self {
        Self {
            db,
            bird_id,
            date: Utc::now().date_naive(),
            meal: Meal::Breakfast,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn meal(mut self, meal: Meal) -> Self {
        self.meal = meal;
        self
    }

    /// Builds and inserts the feeding entity into the database.
    pub async fn build(self) -> Result<entity::feeding::Model, DbErr> {
        entity::feeding::ActiveModel {
            date: ActiveValue::Set(self.date),
            meal: ActiveValue::Set(self.meal),
            bird_id: ActiveValue::Set(self.bird_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a breakfast feeding for today.
pub async fn create_feeding(
    db: &DatabaseConnection,
    bird_id: i32,
) -> Result<entity::feeding::Model, DbErr> {
    FeedingFactory::new(db, bird_id).build().await
}
