use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::toy::ToyRepository,
    error::AppError,
    model::toy::{Toy, ToyParams},
};

pub struct ToyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Toy>, AppError> {
        Ok(ToyRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, toy_id: i32) -> Result<Option<Toy>, AppError> {
        Ok(ToyRepository::new(self.db).find_by_id(toy_id).await?)
    }

    pub async fn create(&self, params: ToyParams) -> Result<Toy, AppError> {
        Ok(ToyRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, toy_id: i32, params: ToyParams) -> Result<Toy, AppError> {
        ToyRepository::new(self.db)
            .update(toy_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Toy not found".to_string()))
    }

    pub async fn delete(&self, toy_id: i32) -> Result<(), AppError> {
        if !ToyRepository::new(self.db).delete(toy_id).await? {
            return Err(AppError::NotFound("Toy not found".to_string()));
        }

        Ok(())
    }

    /// Gives a toy to a bird. Repeating the call changes nothing.
    ///
    /// An unknown toy id fails on the foreign key and surfaces as a database error.
    pub async fn associate(&self, bird_id: i32, toy_id: i32) -> Result<(), AppError> {
        let inserted = ToyRepository::new(self.db)
            .associate(bird_id, toy_id)
            .await?;

        if !inserted {
            tracing::debug!("Toy {} already associated with bird {}", toy_id, bird_id);
        }

        Ok(())
    }

    /// Takes a toy away from a bird. Removing a toy the bird does not have is a no-op.
    pub async fn remove(&self, bird_id: i32, toy_id: i32) -> Result<(), AppError> {
        ToyRepository::new(self.db).remove(bird_id, toy_id).await?;

        Ok(())
    }
}
