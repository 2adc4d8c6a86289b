//! Identity state tracking.
//!
//! The session wraps an external [`IdentityProvider`] (interactive sign-in
//! popup, persisted browser sessions) and republishes its push-based change
//! stream to local subscribers. One session instance is constructed at
//! startup and injected into every consumer; there are no globals.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use cinebuz_models::Identity;
use tracing::{debug, info};

use crate::error::SessionError;
use crate::subscription::{Subscribers, SubscriptionHandle};

pub type IdentityListener = Box<dyn Fn(Option<Identity>) + Send + Sync>;

/// External authentication service.
///
/// Change notifications are push-based and may fire at arbitrary times
/// outside caller-initiated calls, e.g. a session restored from a prior
/// browser session delivered shortly after `watch` is registered. The first
/// delivered value, whatever it is, is authoritative.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Run the interactive sign-in flow. On success the provider pushes the
    /// new identity through its change stream exactly once; on user-cancel
    /// or failure it returns an error without emitting a change.
    async fn sign_in(&self) -> Result<Identity, SessionError>;

    /// Clear the provider session. Pushes `None` through the change stream.
    async fn sign_out(&self) -> Result<(), SessionError>;

    /// Register for identity changes. The returned handle stops delivery
    /// synchronously and idempotently.
    fn watch(&self, listener: IdentityListener) -> SubscriptionHandle;
}

/// Tracks the signed-in principal (or none) for this client session.
pub struct IdentitySession {
    provider: Arc<dyn IdentityProvider>,
    current: Arc<Mutex<Option<Identity>>>,
    subscribers: Arc<Subscribers<Option<Identity>>>,
    _provider_watch: SubscriptionHandle,
}

impl IdentitySession {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let current = Arc::new(Mutex::new(None));
        let subscribers = Arc::new(Subscribers::new());
        let provider_watch = {
            let current = Arc::clone(&current);
            let subscribers: Arc<Subscribers<Option<Identity>>> = Arc::clone(&subscribers);
            provider.watch(Box::new(move |identity| {
                match &identity {
                    Some(id) => info!(principal = %id.principal_id, "identity changed: signed in"),
                    None => info!("identity changed: signed out"),
                }
                *current.lock().unwrap_or_else(PoisonError::into_inner) = identity.clone();
                subscribers.notify(&identity);
            }))
        };
        Self {
            provider,
            current,
            subscribers,
            _provider_watch: provider_watch,
        }
    }

    /// The currently signed-in identity, if any.
    pub fn current(&self) -> Option<Identity> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Observe identity changes. The currently-known value is delivered
    /// immediately, then every subsequent change until the handle is
    /// released.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Option<Identity>) + Send + Sync + 'static,
    ) -> SubscriptionHandle {
        let callback = Arc::new(callback);
        let handle = self.subscribers.register(callback.clone());
        callback(&self.current());
        handle
    }

    /// Trigger the interactive sign-in flow. The identity itself arrives
    /// through the change stream; a cancelled or failed flow resolves here
    /// without any notification.
    pub async fn sign_in(&self) -> Result<(), SessionError> {
        debug!("starting interactive sign-in");
        self.provider.sign_in().await?;
        Ok(())
    }

    pub async fn sign_out(&self) -> Result<(), SessionError> {
        debug!("signing out");
        self.provider.sign_out().await
    }
}
