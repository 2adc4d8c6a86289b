//! Push-based observer registration.
//!
//! Every subscribable component in the engine (identity session, watchlist
//! store, notification channel, and the external provider/collection traits)
//! hands out a [`SubscriptionHandle`]: a disposer that stops further
//! callback delivery. Unsubscribing is idempotent and synchronous; once the
//! handle is released, the callback is never invoked again.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Disposer for one active subscription. Dropping the handle unsubscribes.
pub struct SubscriptionHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for subscriptions with nothing to release.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Stop further callback delivery. Safe to call more than once.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    callbacks: HashMap<u64, Callback<T>>,
}

/// A set of callbacks observing values of type `T`.
pub struct Subscribers<T> {
    inner: Arc<Mutex<Registry<T>>>,
}

impl<T: 'static> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                next_id: 0,
                callbacks: HashMap::new(),
            })),
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionHandle {
        self.register(Arc::new(callback))
    }

    pub(crate) fn register(&self, callback: Callback<T>) -> SubscriptionHandle {
        let id = {
            let mut registry = lock(&self.inner);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.callbacks.insert(id, callback);
            id
        };
        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.inner);
        SubscriptionHandle::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).callbacks.remove(&id);
            }
        })
    }

    /// Deliver `value` to every current subscriber. The callback list is
    /// snapshotted before invocation so callbacks may themselves subscribe
    /// or unsubscribe without deadlocking.
    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = lock(&self.inner).callbacks.values().cloned().collect();
        for callback in callbacks {
            callback(value);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        lock(&self.inner).callbacks.len()
    }
}

impl<T: 'static> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<Registry<T>>) -> std::sync::MutexGuard<'_, Registry<T>> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notify_reaches_all_subscribers() {
        let subscribers = Subscribers::<u32>::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let a = {
            let seen = seen.clone();
            subscribers.subscribe(move |v| {
                seen.fetch_add(*v as usize, Ordering::SeqCst);
            })
        };
        let b = {
            let seen = seen.clone();
            subscribers.subscribe(move |v| {
                seen.fetch_add(*v as usize, Ordering::SeqCst);
            })
        };
        subscribers.notify(&3);
        assert_eq!(seen.load(Ordering::SeqCst), 6);
        drop(a);
        drop(b);
    }

    #[test]
    fn unsubscribe_stops_delivery_and_is_idempotent() {
        let subscribers = Subscribers::<u32>::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let mut handle = {
            let seen = seen.clone();
            subscribers.subscribe(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
        };
        subscribers.notify(&1);
        handle.unsubscribe();
        handle.unsubscribe();
        subscribers.notify(&1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(subscribers.len(), 0);
    }

    #[test]
    fn dropping_handle_unsubscribes() {
        let subscribers = Subscribers::<u32>::new();
        {
            let _handle = subscribers.subscribe(|_| {});
            assert_eq!(subscribers.len(), 1);
        }
        assert_eq!(subscribers.len(), 0);
    }
}
