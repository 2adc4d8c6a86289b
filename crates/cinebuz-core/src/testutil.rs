//! Hand-written doubles for the external collaborators, shared by the unit
//! tests across modules.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use cinebuz_catalog::{CatalogApi, CatalogError, DetailRecord, Page};
use cinebuz_models::{
    CastMember, CatalogItem, Identity, MediaKind, SavedDocument, Video, WatchlistEntry,
};

use crate::error::{SessionError, StoreError};
use crate::session::{IdentityListener, IdentityProvider};
use crate::store::{SavedItemsCollection, SnapshotListener};
use crate::subscription::SubscriptionHandle;

pub fn identity(principal: &str) -> Identity {
    Identity {
        principal_id: principal.to_string(),
        display_name: format!("{} display", principal),
        photo_url: None,
    }
}

pub fn item(id: u64, title: &str) -> CatalogItem {
    CatalogItem {
        id,
        kind: MediaKind::Movie,
        title: title.to_string(),
        poster_path: None,
        release_date: Some("2020-01-01".to_string()),
        vote_average: Some(7.0),
    }
}

pub fn entry(doc_id: &str, catalog_id: u64, title: &str) -> WatchlistEntry {
    WatchlistEntry {
        doc_id: doc_id.to_string(),
        doc: SavedDocument::from(&item(catalog_id, title)),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scripted identity provider. `sign_in` emits the configured identity
/// unless primed to fail; `emit` simulates out-of-band pushes such as a
/// restored session.
pub struct FakeIdentityProvider {
    identity: Identity,
    fail_next: AtomicBool,
    listeners: Mutex<Vec<(u64, Arc<dyn Fn(Option<Identity>) + Send + Sync>)>>,
    next_listener_id: AtomicU64,
    registry: Arc<Mutex<Vec<u64>>>,
}

impl FakeIdentityProvider {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            fail_next: AtomicBool::new(false),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(0),
            registry: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn fail_next_sign_in(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn emit(&self, identity: Option<Identity>) {
        let live: Vec<Arc<dyn Fn(Option<Identity>) + Send + Sync>> = {
            let registry = lock(&self.registry);
            lock(&self.listeners)
                .iter()
                .filter(|(id, _)| registry.contains(id))
                .map(|(_, cb)| cb.clone())
                .collect()
        };
        for listener in live {
            listener(identity.clone());
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn sign_in(&self) -> Result<Identity, SessionError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(SessionError::Cancelled);
        }
        self.emit(Some(self.identity.clone()));
        Ok(self.identity.clone())
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.emit(None);
        Ok(())
    }

    fn watch(&self, listener: IdentityListener) -> SubscriptionHandle {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        lock(&self.listeners).push((id, Arc::from(listener)));
        lock(&self.registry).push(id);
        let registry = Arc::clone(&self.registry);
        SubscriptionHandle::new(move || {
            lock(&registry).retain(|&l| l != id);
        })
    }
}

type Watcher = (u64, String, Arc<dyn Fn(&[WatchlistEntry]) + Send + Sync>);

/// In-memory per-principal document collection. Echoes the full
/// authoritative document set to watchers on registration and after every
/// accepted write, the way the remote store does.
pub struct FakeCollection {
    docs: Mutex<HashMap<String, Vec<WatchlistEntry>>>,
    watchers: Arc<Mutex<Vec<Watcher>>>,
    next_watch_id: AtomicU64,
    next_doc_id: AtomicU64,
    creates: AtomicUsize,
    deletes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl FakeCollection {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(HashMap::new()),
            watchers: Arc::new(Mutex::new(Vec::new())),
            next_watch_id: AtomicU64::new(0),
            next_doc_id: AtomicU64::new(0),
            creates: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn watcher_count(&self, principal: &str) -> usize {
        lock(&self.watchers)
            .iter()
            .filter(|(_, p, _)| p == principal)
            .count()
    }

    /// Replace the stored set for `principal` and notify its watchers,
    /// simulating a write from another device.
    pub fn push(&self, principal: &str, entries: Vec<WatchlistEntry>) {
        lock(&self.docs).insert(principal.to_string(), entries);
        self.emit(principal);
    }

    fn emit(&self, principal: &str) {
        let entries = lock(&self.docs)
            .get(principal)
            .cloned()
            .unwrap_or_default();
        let targets: Vec<Arc<dyn Fn(&[WatchlistEntry]) + Send + Sync>> = lock(&self.watchers)
            .iter()
            .filter(|(_, p, _)| p == principal)
            .map(|(_, _, cb)| cb.clone())
            .collect();
        for target in targets {
            target(&entries);
        }
    }
}

#[async_trait]
impl SavedItemsCollection for FakeCollection {
    async fn create(&self, principal_id: &str, doc: &SavedDocument) -> Result<String, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("write refused".to_string()));
        }
        self.creates.fetch_add(1, Ordering::SeqCst);
        let doc_id = format!("doc-{}", self.next_doc_id.fetch_add(1, Ordering::SeqCst));
        lock(&self.docs)
            .entry(principal_id.to_string())
            .or_default()
            .push(WatchlistEntry {
                doc_id: doc_id.clone(),
                doc: doc.clone(),
            });
        self.emit(principal_id);
        Ok(doc_id)
    }

    async fn delete(&self, principal_id: &str, doc_id: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("write refused".to_string()));
        }
        self.deletes.fetch_add(1, Ordering::SeqCst);
        // Deleting a missing doc id is a no-op, as the trait requires.
        if let Some(entries) = lock(&self.docs).get_mut(principal_id) {
            entries.retain(|entry| entry.doc_id != doc_id);
        }
        self.emit(principal_id);
        Ok(())
    }

    fn watch(&self, principal_id: &str, on_change: SnapshotListener) -> SubscriptionHandle {
        let id = self.next_watch_id.fetch_add(1, Ordering::SeqCst);
        let callback: Arc<dyn Fn(&[WatchlistEntry]) + Send + Sync> = Arc::from(on_change);
        lock(&self.watchers).push((id, principal_id.to_string(), callback.clone()));
        // Initial delivery of the current set, synchronously.
        let entries = lock(&self.docs)
            .get(principal_id)
            .cloned()
            .unwrap_or_default();
        callback(&entries);

        let watchers = Arc::clone(&self.watchers);
        SubscriptionHandle::new(move || {
            lock(&watchers).retain(|(watch_id, _, _)| *watch_id != id);
        })
    }
}

/// Scripted catalog API that records which endpoints were hit.
pub struct FakeCatalog {
    pub details: Mutex<HashMap<(MediaKind, u64), DetailRecord>>,
    pub cast: Mutex<Vec<CastMember>>,
    pub videos: Mutex<Vec<Video>>,
    pub similar: Mutex<Vec<CatalogItem>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            details: Mutex::new(HashMap::new()),
            cast: Mutex::new(Vec::new()),
            videos: Mutex::new(Vec::new()),
            similar: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_detail(self, kind: MediaKind, id: u64, title: &str) -> Self {
        lock(&self.details).insert(
            (kind, id),
            DetailRecord {
                id,
                kind,
                title: title.to_string(),
                tagline: None,
                overview: Some("An overview.".to_string()),
                poster_path: None,
                backdrop_path: None,
                release_date: Some("2020-01-01".to_string()),
                vote_average: Some(7.5),
                runtime_minutes: Some(120),
                number_of_seasons: None,
                genres: Vec::new(),
            },
        );
        self
    }

    pub fn with_cast(self, cast: Vec<CastMember>) -> Self {
        *lock(&self.cast) = cast;
        self
    }

    pub fn with_videos(self, videos: Vec<Video>) -> Self {
        *lock(&self.videos) = videos;
        self
    }

    pub fn with_similar(self, similar: Vec<CatalogItem>) -> Self {
        *lock(&self.similar) = similar;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: String) {
        lock(&self.calls).push(call);
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn discover(&self, kind: MediaKind, page: u32) -> Result<Page, CatalogError> {
        self.record(format!("discover/{}/{}", kind.path_segment(), page));
        Ok(Page {
            results: Vec::new(),
            total_pages: 1,
        })
    }

    async fn trending(&self) -> Result<Page, CatalogError> {
        self.record("trending".to_string());
        Ok(Page {
            results: Vec::new(),
            total_pages: 1,
        })
    }

    async fn detail(&self, kind: MediaKind, id: u64) -> Result<DetailRecord, CatalogError> {
        self.record(format!("{}/{}", kind.path_segment(), id));
        // Yield once so concurrent resolutions actually interleave.
        tokio::task::yield_now().await;
        lock(&self.details)
            .get(&(kind, id))
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn credits(&self, kind: MediaKind, id: u64) -> Result<Vec<CastMember>, CatalogError> {
        self.record(format!("{}/{}/credits", kind.path_segment(), id));
        Ok(lock(&self.cast).clone())
    }

    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<Video>, CatalogError> {
        self.record(format!("{}/{}/videos", kind.path_segment(), id));
        Ok(lock(&self.videos).clone())
    }

    async fn similar(&self, kind: MediaKind, id: u64) -> Result<Vec<CatalogItem>, CatalogError> {
        self.record(format!("{}/{}/similar", kind.path_segment(), id));
        Ok(lock(&self.similar).clone())
    }
}
