use cinebuz_catalog::CatalogError;
use thiserror::Error;

/// Sign-in/sign-out failures from the identity provider. A cancelled
/// interactive flow is not a provider fault; callers surface the message
/// and move on, no change notification is emitted.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("sign-in was cancelled")]
    Cancelled,

    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Failures from the remote document collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("remote collection unavailable: {0}")]
    Unavailable(String),

    #[error("remote write rejected: {0}")]
    Rejected(String),
}

/// Failures surfaced by [`crate::WatchlistStore::toggle`]. The local
/// snapshot is left untouched on failure; the next authoritative
/// notification reconciles whatever state the remote actually holds.
#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("remote write failed: {0}")]
    RemoteWrite(#[from] StoreError),
}

/// Failures from [`crate::MediaResolver::resolve`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither the movie nor the series probe recognized the id.
    #[error("media not found")]
    NotFound,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
