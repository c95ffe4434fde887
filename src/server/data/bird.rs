//! Bird data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::bird::{Bird, CreateBirdParams, UpdateBirdParams};

/// Repository providing database operations for birds.
pub struct BirdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirdRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new bird owned by `params.user_id`.
    pub async fn create(&self, params: CreateBirdParams) -> Result<Bird, DbErr> {
        let entity = entity::bird::ActiveModel {
            name: ActiveValue::Set(params.name),
            breed: ActiveValue::Set(params.breed),
            description: ActiveValue::Set(params.description),
            age: ActiveValue::Set(params.age),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bird::from_entity(entity))
    }

    /// Finds a bird by id regardless of owner.
    ///
    /// Ownership is enforced by the auth guard, not here.
    pub async fn find_by_id(&self, bird_id: i32) -> Result<Option<Bird>, DbErr> {
        let entity = entity::prelude::Bird::find_by_id(bird_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Bird::from_entity))
    }

    /// Gets all birds owned by a user, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Bird>, DbErr> {
        let entities = entity::prelude::Bird::find()
            .filter(entity::bird::Column::UserId.eq(user_id))
            .order_by_asc(entity::bird::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bird::from_entity).collect())
    }

    /// Updates breed, description and age. The name column is never written.
    ///
    /// # Returns
    /// - `Ok(Some(Bird))` - The updated bird
    /// - `Ok(None)` - No bird with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        bird_id: i32,
        params: UpdateBirdParams,
    ) -> Result<Option<Bird>, DbErr> {
        let Some(entity) = entity::prelude::Bird::find_by_id(bird_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::bird::ActiveModel = entity.into();
        active.breed = ActiveValue::Set(params.breed);
        active.description = ActiveValue::Set(params.description);
        active.age = ActiveValue::Set(params.age);

        let updated = active.update(self.db).await?;

        Ok(Some(Bird::from_entity(updated)))
    }

    /// Deletes a bird along with its feedings, photos and toy associations.
    ///
    /// All deletes run in one transaction so a failure leaves the bird and its dependents
    /// untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The bird existed and was deleted
    /// - `Ok(false)` - No bird with that id; nothing changed
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn delete(&self, bird_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Feeding::delete_many()
            .filter(entity::feeding::Column::BirdId.eq(bird_id))
            .exec(&txn)
            .await?;

        entity::prelude::Photo::delete_many()
            .filter(entity::photo::Column::BirdId.eq(bird_id))
            .exec(&txn)
            .await?;

        entity::prelude::BirdToy::delete_many()
            .filter(entity::bird_toy::Column::BirdId.eq(bird_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Bird::delete_by_id(bird_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
