//! Locally observed watchlist, kept consistent with the remote collection.
//!
//! The store owns the snapshot exclusively. Every remote change notification
//! replaces it in full (no incremental patching), so the local view always
//! matches server state without merge logic. There are no optimistic local
//! updates: a toggle becomes visible only once the next notification
//! arrives.

use std::sync::{Arc, Mutex, PoisonError};

use cinebuz_models::{CatalogItem, Identity, SavedDocument, WatchlistEntry};
use tracing::{debug, info, warn};

use crate::error::WatchlistError;
use crate::session::IdentitySession;
use crate::store::SavedItemsCollection;
use crate::subscription::{Subscribers, SubscriptionHandle};

struct Inner {
    snapshot: Vec<WatchlistEntry>,
    principal: Option<String>,
    /// Bumped on every identity swap; a remote delivery carrying a stale
    /// epoch belongs to a superseded subscription and is never applied.
    epoch: u64,
    remote: Option<SubscriptionHandle>,
}

/// Per-identity watchlist synchronized through a push subscription.
pub struct WatchlistStore {
    collection: Arc<dyn SavedItemsCollection>,
    inner: Arc<Mutex<Inner>>,
    subscribers: Arc<Subscribers<Vec<WatchlistEntry>>>,
}

impl WatchlistStore {
    pub fn new(collection: Arc<dyn SavedItemsCollection>) -> Self {
        Self {
            collection,
            inner: Arc::new(Mutex::new(Inner {
                snapshot: Vec::new(),
                principal: None,
                epoch: 0,
                remote: None,
            })),
            subscribers: Arc::new(Subscribers::new()),
        }
    }

    /// The full current snapshot, by value. Owned exclusively by the store;
    /// mutated only on remote notifications and identity changes to none.
    pub fn snapshot(&self) -> Vec<WatchlistEntry> {
        lock(&self.inner).snapshot.clone()
    }

    /// Membership test on the natural key (catalog id).
    pub fn is_saved(&self, catalog_id: u64) -> bool {
        lock(&self.inner)
            .snapshot
            .iter()
            .any(|entry| entry.catalog_id() == catalog_id)
    }

    /// Observe snapshot replacements. The current snapshot is delivered
    /// immediately, then every replacement until the handle is released.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Vec<WatchlistEntry>) + Send + Sync + 'static,
    ) -> SubscriptionHandle {
        let callback = Arc::new(callback);
        let handle = self.subscribers.register(callback.clone());
        callback(&self.snapshot());
        handle
    }

    /// Swap the active remote subscription to `identity`'s collection.
    ///
    /// With no identity there is nothing to watch: the prior subscription is
    /// released and the snapshot is cleared synchronously, without any
    /// remote call. With an identity, the prior subscription (for a
    /// different or absent identity) is closed first; at most one remote
    /// subscription is live per store instance.
    pub fn set_identity(&self, identity: Option<&Identity>) {
        apply_identity(&self.collection, &self.inner, &self.subscribers, identity);
    }

    /// Wire this store to an identity session: every identity change calls
    /// [`Self::set_identity`]. Releasing the returned handle detaches the
    /// store (the active remote subscription, if any, stays as last set).
    pub fn follow(&self, session: &IdentitySession) -> SubscriptionHandle {
        let collection = Arc::clone(&self.collection);
        let inner = Arc::clone(&self.inner);
        let subscribers = Arc::clone(&self.subscribers);
        session.subscribe(move |identity| {
            apply_identity(&collection, &inner, &subscribers, identity.as_ref());
        })
    }

    /// Serialized save/unsave request against the remote collection.
    ///
    /// `currently_saved` is the caller's read of the snapshot. Unsaving an
    /// item that is no longer present (removed concurrently) is a silent
    /// no-op. Saving issues a create; the entry becomes visible only once
    /// the next subscription notification arrives. A resolved future means
    /// "accepted by the remote", not "reflected in the snapshot".
    ///
    /// Callers must hold a signed-in identity; the UI-side guard
    /// ([`crate::actions::toggle_saved`]) enforces that before calling.
    pub async fn toggle(
        &self,
        identity: &Identity,
        item: &CatalogItem,
        currently_saved: bool,
    ) -> Result<(), WatchlistError> {
        if currently_saved {
            let doc_id = lock(&self.inner)
                .snapshot
                .iter()
                .find(|entry| entry.catalog_id() == item.id)
                .map(|entry| entry.doc_id.clone());
            let Some(doc_id) = doc_id else {
                debug!(catalog_id = item.id, "unsave of absent item, nothing to do");
                return Ok(());
            };
            self.collection
                .delete(&identity.principal_id, &doc_id)
                .await?;
            info!(catalog_id = item.id, doc_id = %doc_id, "removed from watchlist");
        } else {
            let doc = SavedDocument::from(item);
            let doc_id = self
                .collection
                .create(&identity.principal_id, &doc)
                .await?;
            info!(catalog_id = item.id, doc_id = %doc_id, "saved to watchlist");
        }
        Ok(())
    }
}

fn apply_identity(
    collection: &Arc<dyn SavedItemsCollection>,
    inner: &Arc<Mutex<Inner>>,
    subscribers: &Arc<Subscribers<Vec<WatchlistEntry>>>,
    identity: Option<&Identity>,
) {
    let (superseded, epoch) = {
        let mut guard = lock(inner);
        guard.epoch += 1;
        let superseded = guard.remote.take();
        guard.principal = identity.map(|i| i.principal_id.clone());
        if identity.is_none() {
            guard.snapshot.clear();
        }
        (superseded, guard.epoch)
    };
    // Release the superseded subscription outside the lock; its disposer
    // must run exactly once.
    drop(superseded);

    match identity {
        None => {
            debug!("identity cleared, watchlist emptied");
            subscribers.notify(&Vec::new());
        }
        Some(identity) => {
            debug!(principal = %identity.principal_id, "opening watchlist subscription");
            let cb_inner = Arc::clone(inner);
            let cb_subscribers = Arc::clone(subscribers);
            let handle = collection.watch(
                &identity.principal_id,
                Box::new(move |entries| {
                    let snapshot = {
                        let mut guard = lock(&cb_inner);
                        if guard.epoch != epoch {
                            // Late delivery from a superseded subscription.
                            warn!("dropping stale watchlist notification");
                            return;
                        }
                        guard.snapshot = entries.to_vec();
                        guard.snapshot.clone()
                    };
                    cb_subscribers.notify(&snapshot);
                }),
            );
            let mut guard = lock(inner);
            if guard.epoch == epoch {
                guard.remote = Some(handle);
            }
            // Otherwise a newer identity change won the race while the
            // subscription was being opened; dropping the handle closes it.
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> std::sync::MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
