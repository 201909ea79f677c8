//! The in-memory train store and its JSON persistence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{error::StoreError, models::TrainRecord};

/// Ordered collection of [`TrainRecord`]s.
///
/// The collection is kept sorted ascending by `departure_time` under
/// plain string comparison. The sort runs after every insertion and only
/// then: a freshly loaded file keeps its order until the next insertion.
/// One store owns its records exclusively; there is no sharing and no
/// interior locking.
#[derive(Debug, Default)]
pub struct TrainStore {
    trains: Vec<TrainRecord>,
}

impl TrainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record and restore the departure-time ordering.
    ///
    /// The sort is stable: records with equal times keep their relative
    /// insertion order.
    pub fn add(&mut self, record: TrainRecord) {
        info!(
            departure_point = %record.departure_point,
            number = %record.number,
            departure_time = %record.departure_time,
            destination = %record.destination,
            "Train added"
        );
        self.trains.push(record);
        self.trains
            .sort_by(|a, b| a.departure_time.cmp(&b.departure_time));
    }

    /// Current records in store order.
    pub fn trains(&self) -> &[TrainRecord] {
        &self.trains
    }

    /// Records whose destination matches `destination`, ignoring case.
    ///
    /// Matching is exact after lower-casing both sides; store order is
    /// preserved among the matches.
    pub fn select(&self, destination: &str) -> Vec<TrainRecord> {
        let query = destination.to_lowercase();
        let selected: Vec<TrainRecord> = self
            .trains
            .iter()
            .filter(|train| train.destination.to_lowercase() == query)
            .cloned()
            .collect();
        info!(
            destination = %query,
            found = selected.len(),
            "Destination filter applied"
        );
        selected
    }

    /// Replace the collection with the contents of a JSON file.
    ///
    /// A missing file is a warning and a no-op. On success the loaded
    /// order becomes the active order; on failure the previous contents
    /// stay in place.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "Load skipped: file not found");
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.trains = serde_json::from_str(&content).map_err(|source| StoreError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), count = self.trains.len(), "Trains loaded");
        Ok(())
    }

    /// Write the collection to `path` as a pretty-printed JSON array.
    ///
    /// A `.json` suffix is appended unless the path already ends with
    /// one; the target is overwritten if present. Returns the path that
    /// was actually written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, StoreError> {
        let path = normalize_json_path(path.as_ref());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        }

        let serialized =
            serde_json::to_vec_pretty(&self.trains).map_err(|source| StoreError::Format {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, serialized).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), count = self.trains.len(), "Trains saved");
        Ok(path)
    }
}

/// Append `.json` unless the path already ends with that suffix.
///
/// A suffix check, not an extension swap: `data.txt` becomes
/// `data.txt.json`, never `data.json`.
fn normalize_json_path(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(".json") {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(".json");
        PathBuf::from(raw)
    }
}
