use cinebuz_models::{CastMember, CatalogItem, Genre, MediaKind, Video};
use serde::Deserialize;

use crate::traits::DetailRecord;

/// Listing row as served by discover, trending, and similar endpoints.
/// Movie rows use `title`/`release_date`, series rows `name`/`first_air_date`;
/// trending additionally tags rows with `media_type` and may include people.
#[derive(Debug, Deserialize)]
pub struct TmdbListRow {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f64>,
    pub media_type: Option<String>,
}

impl TmdbListRow {
    /// Normalize into a [`CatalogItem`], or `None` for rows of neither kind
    /// (trending serves people too).
    pub fn into_item(self, default_kind: MediaKind) -> Option<CatalogItem> {
        let kind = match self.media_type.as_deref() {
            Some("movie") => MediaKind::Movie,
            Some("tv") => MediaKind::Series,
            Some(_) => return None,
            None => default_kind,
        };
        let title = self.title.or(self.name)?;
        Some(CatalogItem {
            id: self.id,
            kind,
            title,
            poster_path: self.poster_path,
            release_date: self.release_date.or(self.first_air_date),
            vote_average: self.vote_average,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbListResponse {
    pub results: Vec<TmdbListRow>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbGenre {
    pub id: u64,
    pub name: String,
}

impl From<TmdbGenre> for Genre {
    fn from(g: TmdbGenre) -> Self {
        Genre {
            id: g.id,
            name: g.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovieDetail {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

impl From<TmdbMovieDetail> for DetailRecord {
    fn from(d: TmdbMovieDetail) -> Self {
        DetailRecord {
            id: d.id,
            kind: MediaKind::Movie,
            title: d.title,
            tagline: d.tagline.filter(|t| !t.is_empty()),
            overview: d.overview.filter(|o| !o.is_empty()),
            poster_path: d.poster_path,
            backdrop_path: d.backdrop_path,
            release_date: d.release_date,
            vote_average: d.vote_average,
            runtime_minutes: d.runtime,
            number_of_seasons: None,
            genres: d.genres.into_iter().map(Genre::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbTvDetail {
    pub id: u64,
    pub name: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f64>,
    /// Per-episode runtimes; the first entry stands in for "runtime".
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

impl From<TmdbTvDetail> for DetailRecord {
    fn from(d: TmdbTvDetail) -> Self {
        DetailRecord {
            id: d.id,
            kind: MediaKind::Series,
            title: d.name,
            tagline: d.tagline.filter(|t| !t.is_empty()),
            overview: d.overview.filter(|o| !o.is_empty()),
            poster_path: d.poster_path,
            backdrop_path: d.backdrop_path,
            release_date: d.first_air_date,
            vote_average: d.vote_average,
            runtime_minutes: d.episode_run_time.first().copied(),
            number_of_seasons: d.number_of_seasons,
            genres: d.genres.into_iter().map(Genre::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbCastRow {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

impl From<TmdbCastRow> for CastMember {
    fn from(c: TmdbCastRow) -> Self {
        CastMember {
            id: c.id,
            name: c.name,
            character: c.character,
            profile_path: c.profile_path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbCreditsResponse {
    #[serde(default)]
    pub cast: Vec<TmdbCastRow>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbVideoRow {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub site: String,
}

impl From<TmdbVideoRow> for Video {
    fn from(v: TmdbVideoRow) -> Self {
        Video {
            key: v.key,
            kind: v.kind,
            site: v.site,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TmdbVideosResponse {
    #[serde(default)]
    pub results: Vec<TmdbVideoRow>,
}
