//! Resolves a bare catalog id into a full [`MediaDetail`].
//!
//! Ids arrive without a kind attached (saved documents and trending rows mix
//! movies and series), so resolution probes the movie detail endpoint first
//! and falls back to series when the catalog reports the id unknown. Only
//! after the kind is settled do the credits, videos, and similar fetches fan
//! out, all scoped to that kind.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cinebuz_catalog::{CatalogApi, DetailRecord};
use cinebuz_models::{MediaDetail, MediaKind, Video};
use tracing::debug;

use crate::error::ResolveError;

const CAST_LIMIT: usize = 10;
const SIMILAR_LIMIT: usize = 10;

pub struct MediaResolver {
    catalog: Arc<dyn CatalogApi>,
    generation: AtomicU64,
}

impl MediaResolver {
    pub fn new(catalog: Arc<dyn CatalogApi>) -> Self {
        Self {
            catalog,
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve `id` into a detail aggregate. Last id wins: if another
    /// `resolve` starts while this one is in flight, the superseded call
    /// completes with `Ok(None)` and its result must be discarded.
    pub async fn resolve(&self, id: u64) -> Result<Option<MediaDetail>, ResolveError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let record = self.probe(id).await?;
        let kind = record.kind;
        debug!(id, kind = kind.path_segment(), "catalog id classified");

        let (mut cast, videos, mut similar) = futures::try_join!(
            self.catalog.credits(kind, id),
            self.catalog.videos(kind, id),
            self.catalog.similar(kind, id),
        )?;

        if self.generation.load(Ordering::SeqCst) != token {
            debug!(id, "resolution superseded, discarding");
            return Ok(None);
        }

        cast.truncate(CAST_LIMIT);
        similar.truncate(SIMILAR_LIMIT);
        Ok(Some(MediaDetail {
            id: record.id,
            kind,
            title: record.title,
            tagline: record.tagline,
            overview: record.overview,
            poster_path: record.poster_path,
            backdrop_path: record.backdrop_path,
            release_date: record.release_date,
            vote_average: record.vote_average,
            runtime_minutes: record.runtime_minutes,
            number_of_seasons: record.number_of_seasons,
            genres: record.genres,
            cast,
            trailer_key: select_trailer(&videos),
            similar,
        }))
    }

    async fn probe(&self, id: u64) -> Result<DetailRecord, ResolveError> {
        match self.catalog.detail(MediaKind::Movie, id).await {
            Ok(record) => Ok(record),
            Err(err) if err.is_not_found() => match self.catalog.detail(MediaKind::Series, id).await
            {
                Ok(record) => Ok(record),
                Err(err) if err.is_not_found() => Err(ResolveError::NotFound),
                Err(err) => Err(ResolveError::Catalog(err)),
            },
            Err(err) => Err(ResolveError::Catalog(err)),
        }
    }
}

/// First video entry that is a YouTube-hosted trailer, in server order.
fn select_trailer(videos: &[Video]) -> Option<String> {
    videos
        .iter()
        .find(|video| video.kind == "Trailer" && video.site == "YouTube")
        .map(|video| video.key.clone())
}
