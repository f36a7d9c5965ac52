//! Repository Layer - Core Traits
//!
//! Abstract interfaces for the remote item table and local preference
//! storage. Implementations can be HTTP-backed, file-backed or in-memory.

use async_trait::async_trait;

use crate::domain::{DomainResult, ItemId, NewPantryItem, PantryItem, Preferences};

/// Access to the hosted pantry table
///
/// Items are never updated in place: they are inserted in batches and
/// deleted one at a time.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Read every row, in server order
    async fn list_all(&self) -> DomainResult<Vec<PantryItem>>;

    /// Insert a batch; either every row lands or none does
    async fn insert_many(&self, items: &[NewPantryItem]) -> DomainResult<()>;

    async fn delete_by_id(&self, id: &ItemId) -> DomainResult<()>;
}

/// Local storage for the single preferences record
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// `None` when nothing has been saved yet
    async fn load(&self) -> DomainResult<Option<Preferences>>;

    async fn save(&self, prefs: &Preferences) -> DomainResult<()>;
}
