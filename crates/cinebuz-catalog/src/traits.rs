use async_trait::async_trait;
use cinebuz_models::{CastMember, CatalogItem, Genre, MediaKind, Video};

use crate::error::CatalogError;

/// One page of a paginated listing response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub results: Vec<CatalogItem>,
    pub total_pages: u32,
}

/// Normalized detail response for a single catalog item, before the
/// resolver combines it with credits, videos, and similar items.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRecord {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub runtime_minutes: Option<u32>,
    pub number_of_seasons: Option<u32>,
    pub genres: Vec<Genre>,
}

/// Read-only access to the external movie/TV metadata API.
///
/// Stateless: every method is a single request against the upstream REST
/// API. The concrete implementation lives in [`crate::tmdb`]; consumers take
/// the trait so tests can substitute a scripted double.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Discover listing for one kind, one page.
    async fn discover(&self, kind: MediaKind, page: u32) -> Result<Page, CatalogError>;

    /// Trending across movies and series for the current day. Rows that are
    /// neither movies nor series (people) are dropped.
    async fn trending(&self) -> Result<Page, CatalogError>;

    /// Detail fetch, doubling as the kind probe: a 4xx maps to
    /// [`CatalogError::NotFound`], meaning `id` is not of `kind`.
    async fn detail(&self, kind: MediaKind, id: u64) -> Result<DetailRecord, CatalogError>;

    async fn credits(&self, kind: MediaKind, id: u64) -> Result<Vec<CastMember>, CatalogError>;

    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<Video>, CatalogError>;

    async fn similar(&self, kind: MediaKind, id: u64) -> Result<Vec<CatalogItem>, CatalogError>;
}
