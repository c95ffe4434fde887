use std::time::Duration;
use thiserror::Error;

/// Failures talking to the remote object storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage service rejected or failed the write.
    #[error("Failed to upload object '{key}': {source}")]
    Upload {
        /// Object key the upload targeted
        key: String,
        /// The underlying opendal error
        #[source]
        source: opendal::Error,
    },

    /// The storage call did not finish in time and was cancelled.
    #[error("Upload of object '{key}' timed out after {timeout:?}")]
    Timeout {
        /// Object key the upload targeted
        key: String,
        /// The configured upload timeout
        timeout: Duration,
    },

    /// Every generated object key was already in use.
    #[error("No free object key found after {attempts} attempts")]
    KeysExhausted {
        /// How many keys were tried
        attempts: usize,
    },

    /// The storage operator could not be built from configuration.
    #[error("Failed to configure object storage: {0}")]
    Setup(#[source] opendal::Error),
}
