use cinebuz_models::{CastMember, CatalogItem, MediaKind, Video};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CatalogError;
use crate::tmdb::types::{
    TmdbCreditsResponse, TmdbListResponse, TmdbMovieDetail, TmdbTvDetail, TmdbVideosResponse,
};
use crate::traits::{DetailRecord, Page};

/// Issue one GET and decode the JSON body. Non-OK responses become
/// [`CatalogError::Status`]; detail probes handle 4xx themselves before
/// calling this.
async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, endpoint: &str) -> Result<T, CatalogError> {
    debug!(endpoint, "catalog request");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
        });
    }
    Ok(response.json::<T>().await?)
}

pub async fn discover(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    kind: MediaKind,
    page: u32,
) -> Result<Page, CatalogError> {
    let endpoint = format!("discover/{}", kind.path_segment());
    let url = format!(
        "{}/{}?api_key={}&language={}&sort_by=popularity.desc&page={}",
        base_url,
        endpoint,
        api_key,
        language,
        page
    );
    let body: TmdbListResponse = get_json(client, &url, &endpoint).await?;
    Ok(Page {
        results: body
            .results
            .into_iter()
            .filter_map(|row| row.into_item(kind))
            .collect(),
        total_pages: body.total_pages.unwrap_or(1).max(1),
    })
}

pub async fn trending(
    client: &Client,
    base_url: &str,
    api_key: &str,
) -> Result<Page, CatalogError> {
    let endpoint = "trending/all/day";
    let url = format!("{}/{}?api_key={}", base_url, endpoint, api_key);
    let body: TmdbListResponse = get_json(client, &url, endpoint).await?;
    Ok(Page {
        results: body
            .results
            .into_iter()
            // Trending rows always carry media_type; people are dropped here.
            .filter_map(|row| row.into_item(MediaKind::Movie))
            .collect(),
        total_pages: body.total_pages.unwrap_or(1).max(1),
    })
}

/// Detail fetch doubling as the kind probe: any 4xx means "not this kind"
/// and maps to [`CatalogError::NotFound`] so the caller can try the other
/// kind.
pub async fn detail(
    client: &Client,
    base_url: &str,
    api_key: &str,
    kind: MediaKind,
    id: u64,
) -> Result<DetailRecord, CatalogError> {
    let endpoint = format!("{}/{}", kind.path_segment(), id);
    let url = format!("{}/{}?api_key={}", base_url, endpoint, api_key);
    debug!(endpoint = %endpoint, "catalog detail probe");
    let response = client.get(&url).send().await?;
    let status = response.status();
    if status.is_client_error() {
        return Err(CatalogError::NotFound);
    }
    if !status.is_success() {
        return Err(CatalogError::Status {
            status: status.as_u16(),
            endpoint,
        });
    }
    match kind {
        MediaKind::Movie => Ok(response.json::<TmdbMovieDetail>().await?.into()),
        MediaKind::Series => Ok(response.json::<TmdbTvDetail>().await?.into()),
    }
}

pub async fn credits(
    client: &Client,
    base_url: &str,
    api_key: &str,
    kind: MediaKind,
    id: u64,
) -> Result<Vec<CastMember>, CatalogError> {
    let endpoint = format!("{}/{}/credits", kind.path_segment(), id);
    let url = format!("{}/{}?api_key={}", base_url, endpoint, api_key);
    let body: TmdbCreditsResponse = get_json(client, &url, &endpoint).await?;
    Ok(body.cast.into_iter().map(CastMember::from).collect())
}

pub async fn videos(
    client: &Client,
    base_url: &str,
    api_key: &str,
    kind: MediaKind,
    id: u64,
) -> Result<Vec<Video>, CatalogError> {
    let endpoint = format!("{}/{}/videos", kind.path_segment(), id);
    let url = format!("{}/{}?api_key={}", base_url, endpoint, api_key);
    let body: TmdbVideosResponse = get_json(client, &url, &endpoint).await?;
    Ok(body.results.into_iter().map(Video::from).collect())
}

pub async fn similar(
    client: &Client,
    base_url: &str,
    api_key: &str,
    kind: MediaKind,
    id: u64,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let endpoint = format!("{}/{}/similar", kind.path_segment(), id);
    let url = format!("{}/{}?api_key={}", base_url, endpoint, api_key);
    let body: TmdbListResponse = get_json(client, &url, &endpoint).await?;
    Ok(body
        .results
        .into_iter()
        .filter_map(|row| row.into_item(kind))
        .collect())
}
