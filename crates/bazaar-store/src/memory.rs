//! In-memory item store, used by tests and local experiments.

use async_trait::async_trait;
use tokio::sync::Mutex;

use bazaar_core::{BazaarResult, Item, ItemStore, UpdateFn};

/// Item store holding everything in process memory
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-populated
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn read(&self) -> BazaarResult<Vec<Item>> {
        Ok(self.items.lock().await.clone())
    }

    async fn write(&self, items: Vec<Item>) -> BazaarResult<()> {
        *self.items.lock().await = items;
        Ok(())
    }

    async fn update(&self, apply: UpdateFn) -> BazaarResult<Vec<Item>> {
        let mut guard = self.items.lock().await;
        let items = apply(std::mem::take(&mut *guard));
        *guard = items.clone();
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn item(id: &str) -> Item {
        let fields = json!({ "item_name": "Tea" }).as_object().unwrap().clone();
        Item::with_id(id, fields)
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.read().await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn test_write_read_round_trip() {
        let store = MemoryStore::new();
        let items = vec![item("a"), item("b")];

        store.write(items.clone()).await.unwrap();
        assert_eq!(store.read().await.unwrap(), items);
    }

    #[tokio::test]
    async fn test_with_items_seeds_collection() {
        let store = MemoryStore::with_items(vec![item("seeded")]);
        assert_eq!(store.read().await.unwrap()[0].id, "seeded");
    }

    #[tokio::test]
    async fn test_update_applies_and_returns_result() {
        let store = MemoryStore::with_items(vec![item("old")]);

        let updated = store
            .update(Box::new(|mut items| {
                items.insert(0, item("new"));
                items
            }))
            .await
            .unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].id, "new");
        assert_eq!(store.read().await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_concurrent_updates_lose_nothing() {
        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for n in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .update(Box::new(move |mut items| {
                        items.insert(0, item(&format!("id-{n}")));
                        items
                    }))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.read().await.unwrap().len(), 8);
    }
}
