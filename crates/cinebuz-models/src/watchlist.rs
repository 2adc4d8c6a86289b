use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Wire shape of one saved item in the remote per-identity collection.
/// This is exactly what gets written on save and read back by the live
/// subscription; the remote store adds nothing but the document id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedDocument {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
}

impl From<&CatalogItem> for SavedDocument {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            poster_path: item.poster_path.clone(),
            vote_average: item.vote_average,
            release_date: item.release_date.clone(),
        }
    }
}

/// One entry of the locally observed watchlist.
///
/// `doc_id` is assigned by the remote store on creation and is the only
/// stable handle for deletion. `doc.id` (the catalog id) is the natural key
/// for membership tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub doc_id: String,
    #[serde(flatten)]
    pub doc: SavedDocument,
}

impl WatchlistEntry {
    pub fn catalog_id(&self) -> u64 {
        self.doc.id
    }
}
