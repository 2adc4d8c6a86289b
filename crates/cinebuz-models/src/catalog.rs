use serde::{Deserialize, Serialize};

/// Classification of a catalog item. The upstream API serves movies and
/// series from disjoint endpoint families (`movie/...` vs `tv/...`), so
/// every fetch needs to know which family it is talking to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// Path segment used by the catalog API for this kind.
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }
}

/// Immutable snapshot of a catalog listing row. Never mutated locally,
/// only replaced wholesale on refetch.
///
/// Movie rows and series rows spell their fields differently upstream
/// (`title`/`release_date` vs `name`/`first_air_date`); the catalog client
/// normalizes both into this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

impl CatalogItem {
    /// Release year, when a release date is known.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }
}
