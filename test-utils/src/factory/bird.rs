//! Bird factory for creating test bird entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating birds owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// let bird = BirdFactory::new(&db, user.id)
///     .name("Robin")
///     .breed("Finch")
///     .age(2)
///     .build()
///     .await?;
/// ```
pub struct BirdFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    breed: String,
    description: String,
    age: i32,
}

impl<'a> BirdFactory<'a> {
    /// Creates a new BirdFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Bird {id}"`
    /// - breed: `"Canary"`
    /// - description: `"A test bird"`
    /// - age: `1`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Bird {}", next_id()),
            breed: "Canary".to_string(),
            description: "A test bird".to_string(),
            age: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Builds and inserts the bird entity into the database.
    pub async fn build(self) -> Result<entity::bird::Model, DbErr> {
        entity::bird::ActiveModel {
            name: ActiveValue::Set(self.name),
            breed: ActiveValue::Set(self.breed),
            description: ActiveValue::Set(self.description),
            age: ActiveValue::Set(self.age),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bird with default values owned by `user_id`.
pub async fn create_bird(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::bird::Model, DbErr> {
    BirdFactory::new(db, user_id).build().await
}
