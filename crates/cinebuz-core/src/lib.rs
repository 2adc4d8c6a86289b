pub mod actions;
pub mod error;
pub mod notify;
pub mod pagination;
pub mod resolver;
pub mod session;
pub mod store;
pub mod subscription;
pub mod watchlist;

#[cfg(test)]
pub(crate) mod testutil;

pub use actions::{toggle_saved, SAVE_FAILED_MESSAGE, SIGN_IN_REQUIRED_MESSAGE};
pub use error::{ResolveError, SessionError, StoreError, WatchlistError};
pub use notify::NotificationChannel;
pub use pagination::{PageCursor, MAX_PAGES};
pub use resolver::MediaResolver;
pub use session::{IdentityProvider, IdentitySession};
pub use store::SavedItemsCollection;
pub use subscription::{Subscribers, SubscriptionHandle};
pub use watchlist::WatchlistStore;
