//! Pantry Service
//!
//! Add / remove / fetch on top of an `ItemRepository`. Every mutation is
//! followed by a full re-fetch and the fresh list is returned, so callers
//! never patch local state by hand.

use std::sync::Arc;

use crate::domain::{DomainResult, ItemDraft, ItemId, PantryItem};
use crate::repository::ItemRepository;

#[derive(Clone)]
pub struct PantryService {
    repo: Arc<dyn ItemRepository>,
}

impl PantryService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    pub async fn fetch(&self) -> DomainResult<Vec<PantryItem>> {
        self.repo.list_all().await
    }

    /// Insert `draft.quantity` copies of the draft, then re-fetch
    pub async fn add(&self, draft: &ItemDraft) -> DomainResult<Vec<PantryItem>> {
        let batch = draft.to_batch()?;
        self.repo.insert_many(&batch).await?;
        log::info!("[pantry] added {} x {}", batch.len(), draft.name.trim());
        self.fetch().await
    }

    pub async fn remove(&self, id: &ItemId) -> DomainResult<Vec<PantryItem>> {
        self.repo.delete_by_id(id).await?;
        log::info!("[pantry] removed item {}", id);
        self.fetch().await
    }
}
