//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a bird owned by that user, both with default values.
///
/// # Returns
/// - `Ok((user, bird))` - The owner and the bird
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bird_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::bird::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let bird = crate::factory::bird::create_bird(db, user.id).await?;

    Ok((user, bird))
}

/// Creates a bird with one feeding, one photo and one associated toy.
///
/// Useful for asserting that deleting the bird leaves nothing behind.
///
/// # Returns
/// - `Ok((user, bird, toy))` - The owner, the bird and the associated toy
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bird_with_dependents(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::bird::Model,
        entity::toy::Model,
    ),
    DbErr,
> {
    let (user, bird) = create_bird_with_owner(db).await?;
    crate::factory::feeding::create_feeding(db, bird.id).await?;
    crate::factory::photo::create_photo(db, bird.id).await?;
    let toy = crate::factory::toy::create_toy(db).await?;
    crate::factory::toy::associate_toy(db, bird.id, toy.id).await?;

    Ok((user, bird, toy))
}
