//! Photo upload orchestration.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::photo::PhotoRepository, error::AppError, model::photo::Photo, storage::PhotoStorage,
};

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a PhotoStorage,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a PhotoStorage) -> Self {
        Self { db, storage }
    }

    /// Uploads a photo for a bird and records it.
    ///
    /// The photo row is written only after storage reports success. A storage failure is
    /// logged and swallowed so the caller can carry on to the detail page.
    ///
    /// # Returns
    /// - `Ok(Some(Photo))` - Uploaded and recorded
    /// - `Ok(None)` - Storage failed; nothing was recorded
    /// - `Err(AppError::DbErr)` - Upload succeeded but the row could not be written
    pub async fn add(
        &self,
        bird_id: i32,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<Photo>, AppError> {
        let url = match self.storage.upload(file_name, bytes).await {
            Ok(url) => url,
            Err(err) => {
                tracing::error!("Photo upload for bird {} failed: {}", bird_id, err);
                return Ok(None);
            }
        };

        let photo = PhotoRepository::new(self.db).create(bird_id, url).await?;
        tracing::info!("Stored photo {} for bird {}", photo.id, bird_id);

        Ok(Some(photo))
    }
}
