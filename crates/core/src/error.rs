//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`TrainStore`](crate::store::TrainStore) persistence.
///
/// A missing file on load is not an error (the operation is a logged
/// no-op); everything here propagates to the caller untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a well-formed record array.
    #[error("invalid train data in {}: {source}", .path.display())]
    Format {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
