//! Best-effort persistence of points and history.

use std::sync::Arc;

use malaab_core::model::{History, Points, Progress};
use serde::Serialize;
use serde::de::DeserializeOwned;
use storage::KeyValueStore;
use tracing::{error, warn};

pub const POINTS_KEY: &str = "malaab.points";
pub const HISTORY_KEY: &str = "malaab.history";

/// Reads and writes `Progress` through a key-value store.
///
/// Nothing here returns an error: unreadable values fall back to defaults
/// and failed writes are logged and dropped.
#[derive(Clone)]
pub struct ProgressStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load points and history, each independently defaulted.
    pub async fn load(&self) -> Progress {
        let points: Points = self.read(POINTS_KEY).await;
        let history: History = self.read(HISTORY_KEY).await;
        Progress::new(points, history)
    }

    pub async fn save_points(&self, points: Points) {
        self.write(POINTS_KEY, &points).await;
    }

    pub async fn save_history(&self, history: &History) {
        self.write(HISTORY_KEY, history).await;
    }

    async fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.kv.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                warn!(key, error = %err, "could not read stored progress, using defaults");
                return T::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key, error = %err, "stored progress is malformed, using defaults");
            T::default()
        })
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                error!(key, error = %err, "could not serialize progress");
                return;
            }
        };

        if let Err(err) = self.kv.set(key, &raw).await {
            error!(key, error = %err, "could not persist progress");
        }
    }
}
