//! Toy factory and bird-toy association helper.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test toys.
pub struct ToyFactory<'a> {
    db: &'a DatabaseConnection,
    color: String,
    description: String,
}

impl<'a> ToyFactory<'a> {
    /// Creates a new ToyFactory with default values.
    ///
    /// Defaults:
    /// - color: `"Red"`
    /// - description: `"Toy {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            color: "Red".to_string(),
            description: format!("Toy {}", next_id()),
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the toy entity into the database.
    pub async fn build(self) -> Result<entity::toy::Model, DbErr> {
        entity::toy::ActiveModel {
            color: ActiveValue::Set(self.color),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a toy with default values.
pub async fn create_toy(db: &DatabaseConnection) -> Result<entity::toy::Model, DbErr> {
    ToyFactory::new(db).build().await
}

/// Inserts a bird-toy association row directly.
pub async fn associate_toy(
    db: &DatabaseConnection,
    bird_id: i32,
    toy_id: i32,
) -> Result<entity::bird_toy::Model, DbErr> {
    entity::bird_toy::ActiveModel {
        bird_id: ActiveValue::Set(bird_id),
        toy_id: ActiveValue::Set(toy_id),
    }
    .insert(db)
    .await
}
