//! Toy data repository, including the bird-toy association table.

use sea_orm::{
    sea_query::{OnConflict, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::toy::{Toy, ToyParams};

/// Repository providing database operations for toys and their associations with birds.
pub struct ToyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ToyParams) -> Result<Toy, DbErr> {
        let entity = entity::toy::ActiveModel {
            color: ActiveValue::Set(params.color),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Toy::from_entity(entity))
    }

    pub async fn find_by_id(&self, toy_id: i32) -> Result<Option<Toy>, DbErr> {
        let entity = entity::prelude::Toy::find_by_id(toy_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Toy::from_entity))
    }

    /// Gets every toy, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Toy>, DbErr> {
        let entities = entity::prelude::Toy::find()
            .order_by_asc(entity::toy::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Toy::from_entity).collect())
    }

    /// Updates color and description.
    ///
    /// # Returns
    /// - `Ok(Some(Toy))` - The updated toy
    /// - `Ok(None)` - No toy with that id
    pub async fn update(&self, toy_id: i32, params: ToyParams) -> Result<Option<Toy>, DbErr> {
        let Some(entity) = entity::prelude::Toy::find_by_id(toy_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::toy::ActiveModel = entity.into();
        active.color = ActiveValue::Set(params.color);
        active.description = ActiveValue::Set(params.description);

        let updated = active.update(self.db).await?;

        Ok(Some(Toy::from_entity(updated)))
    }

    /// Deletes a toy and every association that references it, in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The toy existed and was deleted
    /// - `Ok(false)` - No toy with that id
    pub async fn delete(&self, toy_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::BirdToy::delete_many()
            .filter(entity::bird_toy::Column::ToyId.eq(toy_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Toy::delete_by_id(toy_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the toys associated with a bird.
    ///
    /// Inner join of `toy` with `bird_toy` restricted to `bird_id`.
    pub async fn get_for_bird(&self, bird_id: i32) -> Result<Vec<Toy>, DbErr> {
        let entities = entity::prelude::Toy::find()
            .inner_join(entity::prelude::BirdToy)
            .filter(entity::bird_toy::Column::BirdId.eq(bird_id))
            .order_by_asc(entity::toy::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Toy::from_entity).collect())
    }

    /// Gets the toys not yet associated with a bird.
    ///
    /// Anti-join: every toy whose id does not appear in `bird_toy` rows for `bird_id`. The
    /// result and `get_for_bird` partition the full toy set.
    pub async fn get_unassociated(&self, bird_id: i32) -> Result<Vec<Toy>, DbErr> {
        let associated = Query::select()
            .column(entity::bird_toy::Column::ToyId)
            .from(entity::bird_toy::Entity)
            .and_where(entity::bird_toy::Column::BirdId.eq(bird_id))
            .to_owned();

        let entities = entity::prelude::Toy::find()
            .filter(entity::toy::Column::Id.not_in_subquery(associated))
            .order_by_asc(entity::toy::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Toy::from_entity).collect())
    }

    /// Associates a toy with a bird. Associating an existing pair changes nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - A new association row was inserted
    /// - `Ok(false)` - The pair was already associated
    /// - `Err(DbErr)` - Database error, including a foreign key violation for unknown ids
    pub async fn associate(&self, bird_id: i32, toy_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::BirdToy::insert(entity::bird_toy::ActiveModel {
            bird_id: ActiveValue::Set(bird_id),
            toy_id: ActiveValue::Set(toy_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::bird_toy::Column::BirdId,
                entity::bird_toy::Column::ToyId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes the association between a bird and a toy, if any.
    ///
    /// # Returns
    /// - `Ok(true)` - An association row was deleted
    /// - `Ok(false)` - The pair was not associated
    pub async fn remove(&self, bird_id: i32, toy_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BirdToy::delete_many()
            .filter(entity::bird_toy::Column::BirdId.eq(bird_id))
            .filter(entity::bird_toy::Column::ToyId.eq(toy_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
