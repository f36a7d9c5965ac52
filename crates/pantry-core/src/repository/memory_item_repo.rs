//! In-Memory Item Repository
//!
//! Same contract as the remote table, backed by a vector. Ids are
//! sequential integers rendered as text.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, ItemId, NewPantryItem, PantryItem};
use super::traits::ItemRepository;

#[derive(Default)]
pub struct MemoryItemRepository {
    inner: Mutex<MemoryTable>,
}

#[derive(Default)]
struct MemoryTable {
    rows: Vec<PantryItem>,
    next_id: u64,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list_all(&self) -> DomainResult<Vec<PantryItem>> {
        Ok(self.inner.lock().await.rows.clone())
    }

    async fn insert_many(&self, items: &[NewPantryItem]) -> DomainResult<()> {
        if items.iter().any(|i| i.name.is_empty()) {
            return Err(DomainError::Validation("nome must not be empty".to_string()));
        }

        let mut table = self.inner.lock().await;
        for item in items {
            table.next_id += 1;
            let id = ItemId::new(table.next_id.to_string());
            table.rows.push(PantryItem {
                id,
                name: item.name.clone(),
                expires_on: item.expires_on,
            });
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &ItemId) -> DomainResult<()> {
        // Deleting a missing row is not an error, same as the remote filter delete
        self.inner.lock().await.rows.retain(|row| &row.id != id);
        Ok(())
    }
}
