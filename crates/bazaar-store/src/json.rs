//! # JSON File Store
//!
//! Durable item store over a single JSON file shaped `{"items": [...]}`.
//! A missing file (or missing `items` key) reads as the empty collection,
//! so a fresh deployment serves an empty list instead of erroring.
//!
//! One mutex serializes every operation. `update` holds it across the
//! whole load-apply-persist cycle, which is what makes the trait's
//! no-lost-updates guarantee hold for this backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

use bazaar_core::{BazaarError, BazaarResult, Item, ItemStore, UpdateFn};

/// On-disk collection shape
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCollection {
    #[serde(default)]
    items: Vec<Item>,
}

/// File-backed item store
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given file path. The file is created on
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection. Caller must hold the lock.
    async fn load_unlocked(&self) -> BazaarResult<Vec<Item>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("item store file {:?} not found, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(err) => return Err(BazaarError::Storage(err.to_string())),
        };

        let collection: StoredCollection = serde_json::from_str(&raw)
            .map_err(|err| BazaarError::Serialization(err.to_string()))?;
        Ok(collection.items)
    }

    /// Persist the collection. Caller must hold the lock.
    async fn persist_unlocked(&self, items: &[Item]) -> BazaarResult<()> {
        let collection = StoredCollection {
            items: items.to_vec(),
        };
        let raw = serde_json::to_string_pretty(&collection)
            .map_err(|err| BazaarError::Serialization(err.to_string()))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|err| BazaarError::Storage(err.to_string()))?;

        debug!("persisted {} items to {:?}", items.len(), self.path);
        Ok(())
    }
}

#[async_trait]
impl ItemStore for JsonFileStore {
    async fn read(&self) -> BazaarResult<Vec<Item>> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    async fn write(&self, items: Vec<Item>) -> BazaarResult<()> {
        let _guard = self.lock.lock().await;
        self.persist_unlocked(&items).await
    }

    async fn update(&self, apply: UpdateFn) -> BazaarResult<Vec<Item>> {
        let _guard = self.lock.lock().await;
        let items = self.load_unlocked().await?;
        let items = apply(items);
        self.persist_unlocked(&items).await?;
        Ok(items)
    }
}
