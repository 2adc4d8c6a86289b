use async_trait::async_trait;
use cinebuz_models::{CastMember, CatalogItem, MediaKind, Video};
use reqwest::Client;

use crate::error::CatalogError;
use crate::tmdb::{api, DEFAULT_BASE_URL};
use crate::traits::{CatalogApi, DetailRecord, Page};

/// Stateless TMDB client. Holds nothing but the connection pool and the
/// query parameters every request carries.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            language: "en-US".to_string(),
        }
    }

    /// Point the client at a different API root (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[async_trait]
impl CatalogApi for TmdbClient {
    async fn discover(&self, kind: MediaKind, page: u32) -> Result<Page, CatalogError> {
        api::discover(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            kind,
            page,
        )
        .await
    }

    async fn trending(&self) -> Result<Page, CatalogError> {
        api::trending(&self.client, &self.base_url, &self.api_key).await
    }

    async fn detail(&self, kind: MediaKind, id: u64) -> Result<DetailRecord, CatalogError> {
        api::detail(&self.client, &self.base_url, &self.api_key, kind, id).await
    }

    async fn credits(&self, kind: MediaKind, id: u64) -> Result<Vec<CastMember>, CatalogError> {
        api::credits(&self.client, &self.base_url, &self.api_key, kind, id).await
    }

    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<Video>, CatalogError> {
        api::videos(&self.client, &self.base_url, &self.api_key, kind, id).await
    }

    async fn similar(&self, kind: MediaKind, id: u64) -> Result<Vec<CatalogItem>, CatalogError> {
        api::similar(&self.client, &self.base_url, &self.api_key, kind, id).await
    }
}
