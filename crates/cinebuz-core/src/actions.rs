//! User-facing save/unsave action, with its sign-in guard and failure
//! messaging.

use cinebuz_models::CatalogItem;
use tracing::warn;

use crate::notify::NotificationChannel;
use crate::session::IdentitySession;
use crate::watchlist::WatchlistStore;

pub const SIGN_IN_REQUIRED_MESSAGE: &str = "You must log in to save this";
pub const SAVE_FAILED_MESSAGE: &str = "Could not update your list";

/// Toggle `item` in the signed-in user's watchlist.
///
/// Without a signed-in identity the store is never touched; the user gets
/// the sign-in prompt instead. A rejected remote write surfaces as a generic
/// failure notification and leaves the snapshot as the remote last echoed
/// it. Saved-state changes become visible only through the store's change
/// stream, never optimistically.
pub async fn toggle_saved(
    session: &IdentitySession,
    store: &WatchlistStore,
    notifications: &NotificationChannel,
    item: &CatalogItem,
    currently_saved: bool,
) {
    let Some(identity) = session.current() else {
        notifications.show(SIGN_IN_REQUIRED_MESSAGE);
        return;
    };
    if let Err(err) = store.toggle(&identity, item, currently_saved).await {
        warn!(
            catalog_id = item.id,
            error = %err,
            "watchlist toggle rejected by remote"
        );
        notifications.show(SAVE_FAILED_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationChannel;
    use crate::session::IdentitySession;
    use crate::testutil::{identity, item, FakeCollection, FakeIdentityProvider};
    use crate::watchlist::WatchlistStore;
    use std::sync::Arc;
    use std::time::Duration;

    fn harness() -> (
        Arc<FakeIdentityProvider>,
        IdentitySession,
        Arc<FakeCollection>,
        WatchlistStore,
        NotificationChannel,
    ) {
        let provider = Arc::new(FakeIdentityProvider::new(identity("alice")));
        let session = IdentitySession::new(provider.clone());
        let collection = Arc::new(FakeCollection::new());
        let store = WatchlistStore::new(collection.clone());
        (provider, session, collection, store, NotificationChannel::new())
    }

    #[tokio::test(start_paused = true)]
    async fn signed_out_toggle_prompts_and_never_touches_the_store() {
        let (_provider, session, collection, store, notifications) = harness();

        toggle_saved(&session, &store, &notifications, &item(1, "Dune"), false).await;

        assert_eq!(collection.create_count(), 0);
        assert_eq!(collection.delete_count(), 0);
        let shown = notifications.current();
        assert!(shown.visible);
        assert_eq!(shown.message, SIGN_IN_REQUIRED_MESSAGE);

        tokio::time::sleep(Duration::from_millis(3_100)).await;
        assert!(!notifications.current().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn signed_in_toggle_saves_without_any_notification() {
        let (_provider, session, collection, store, notifications) = harness();
        session.sign_in().await.unwrap();
        store.set_identity(Some(&identity("alice")));

        toggle_saved(&session, &store, &notifications, &item(1, "Dune"), false).await;

        assert_eq!(collection.create_count(), 1);
        assert!(!notifications.current().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_write_shows_the_generic_failure_message() {
        let (_provider, session, collection, store, notifications) = harness();
        session.sign_in().await.unwrap();
        store.set_identity(Some(&identity("alice")));
        collection.fail_writes(true);

        toggle_saved(&session, &store, &notifications, &item(1, "Dune"), false).await;

        let shown = notifications.current();
        assert!(shown.visible);
        assert_eq!(shown.message, SAVE_FAILED_MESSAGE);
        assert!(store.snapshot().is_empty());
    }
}
