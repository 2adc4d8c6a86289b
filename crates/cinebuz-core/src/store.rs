//! Remote document collection interface.
//!
//! One collection per identity, path-scoped by principal id. The transport
//! (websocket-ish realtime store) is an external collaborator; the engine
//! only depends on this trait, which tests implement in memory.

use async_trait::async_trait;
use cinebuz_models::{SavedDocument, WatchlistEntry};

use crate::error::StoreError;
use crate::subscription::SubscriptionHandle;

pub type SnapshotListener = Box<dyn Fn(&[WatchlistEntry]) + Send + Sync>;

/// Per-identity collection of saved catalog items.
#[async_trait]
pub trait SavedItemsCollection: Send + Sync {
    /// Create a document in `principal_id`'s collection, returning the
    /// store-assigned document id.
    async fn create(&self, principal_id: &str, doc: &SavedDocument) -> Result<String, StoreError>;

    /// Delete by document id. Deleting an id that no longer exists is a
    /// success no-op; concurrent writers make that case routine.
    async fn delete(&self, principal_id: &str, doc_id: &str) -> Result<(), StoreError>;

    /// Live subscription to `principal_id`'s collection. Delivers the full
    /// current document set once at registration and again on every change,
    /// in the order the store emits them.
    fn watch(&self, principal_id: &str, on_change: SnapshotListener) -> SubscriptionHandle;
}
