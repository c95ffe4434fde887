//! Object storage adapter for bird photos.
//!
//! Wraps an opendal [`Operator`] pointed at an S3-compatible bucket. The adapter is built
//! once at startup and shared through `AppState`; clones share the underlying client.

use std::time::Duration;

use dioxus_logger::tracing;
use opendal::{services, Buffer, ErrorKind, Operator};

use crate::server::{
    config::StorageConfig, error::storage::StorageError, util::upload::upload_key,
};

/// How many keys an upload draws before giving up on finding a free one.
pub const MAX_KEY_ATTEMPTS: usize = 5;

#[derive(Clone)]
pub struct PhotoStorage {
    operator: Operator,
    base_url: String,
    bucket: String,
    timeout: Duration,
}

impl PhotoStorage {
    /// Builds an S3-backed storage adapter from configuration.
    ///
    /// Explicit credentials are only applied when both key id and secret are set;
    /// otherwise opendal loads them from the standard AWS environment and profile files.
    ///
    /// # Returns
    /// - `Ok(PhotoStorage)` - Adapter ready for uploads
    /// - `Err(StorageError::Setup)` - The S3 service could not be configured
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut builder = services::S3::default()
            .bucket(&config.bucket)
            .region(&config.region);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        if let (Some(key_id), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            builder = builder.access_key_id(key_id).secret_access_key(secret);
        }

        let operator = Operator::new(builder)
            .map_err(StorageError::Setup)?
            .finish();

        Ok(Self::new(
            operator,
            config.base_url.clone(),
            config.bucket.clone(),
            config.timeout,
        ))
    }

    /// Creates an adapter around an already configured operator.
    pub fn new(operator: Operator, base_url: String, bucket: String, timeout: Duration) -> Self {
        Self {
            operator,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket,
            timeout,
        }
    }

    /// Public URL of an object: `<base>/<bucket>/<key>`.
    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.bucket, key)
    }

    /// Uploads a file under a freshly generated key.
    ///
    /// Existing objects are never replaced: when a generated key is already taken a new one
    /// is drawn, up to [`MAX_KEY_ATTEMPTS`] times. Each write attempt is cancelled if it does
    /// not complete within the configured timeout.
    ///
    /// # Arguments
    /// - `file_name` - Original filename, used only for its extension
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored object
    /// - `Err(StorageError::Upload)` - The storage service failed the write
    /// - `Err(StorageError::Timeout)` - The write did not finish in time
    /// - `Err(StorageError::KeysExhausted)` - Every generated key was already taken
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        let bytes = Buffer::from(bytes);

        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = upload_key(file_name);
            tracing::debug!("Uploading {} bytes as '{}'", bytes.len(), key);

            if self.write_new(&key, bytes.clone()).await? {
                return Ok(self.url_for(&key));
            }

            tracing::warn!("Object key '{}' is already taken, drawing another", key);
        }

        Err(StorageError::KeysExhausted {
            attempts: MAX_KEY_ATTEMPTS,
        })
    }

    /// Writes `bytes` under `key` unless an object already exists there.
    ///
    /// # Returns
    /// - `Ok(true)` - The object was written
    /// - `Ok(false)` - The key was taken; nothing was written
    async fn write_new(&self, key: &str, bytes: Buffer) -> Result<bool, StorageError> {
        match tokio::time::timeout(self.timeout, self.write_if_absent(key, bytes)).await {
            Ok(Ok(written)) => Ok(written),
            Ok(Err(source)) => Err(StorageError::Upload {
                key: key.to_string(),
                source,
            }),
            Err(_) => Err(StorageError::Timeout {
                key: key.to_string(),
                timeout: self.timeout,
            }),
        }
    }

    async fn write_if_absent(&self, key: &str, bytes: Buffer) -> opendal::Result<bool> {
        // S3 supports conditional writes; backends without them get an existence check.
        if self.operator.info().full_capability().write_with_if_not_exists {
            return match self.operator.write_with(key, bytes).if_not_exists(true).await {
                Ok(_) => Ok(true),
                Err(err) if err.kind() == ErrorKind::ConditionNotMatch => Ok(false),
                Err(err) => Err(err),
            };
        }

        if self.operator.exists(key).await? {
            return Ok(false);
        }

        self.operator.write(key, bytes).await?;
        Ok(true)
    }

    #[cfg(test)]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }
}
