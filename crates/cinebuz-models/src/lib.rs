pub mod catalog;
pub mod detail;
pub mod identity;
pub mod notification;
pub mod page;
pub mod watchlist;

pub use catalog::{CatalogItem, MediaKind};
pub use detail::{CastMember, Genre, MediaDetail, Video};
pub use identity::Identity;
pub use notification::Notification;
pub use page::PageState;
pub use watchlist::{SavedDocument, WatchlistEntry};
