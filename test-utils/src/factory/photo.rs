//! Photo factory for creating test photo entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a photo row for `bird_id` pointing at a unique fake URL.
pub async fn create_photo(
    db: &DatabaseConnection,
    bird_id: i32,
) -> Result<entity::photo::Model, DbErr> {
    entity::photo::ActiveModel {
        url: ActiveValue::Set(format!(
            "https://storage.test/birds/{:06x}.jpg",
            next_id()
        )),
        bird_id: ActiveValue::Set(bird_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
