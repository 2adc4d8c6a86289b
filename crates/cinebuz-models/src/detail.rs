use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, MediaKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// One entry of a detail page's video list, as served by the catalog API.
/// `kind` is the API's `type` field ("Trailer", "Teaser", "Clip", ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub site: String,
}

/// Aggregate built by the media resolver once per resolution and replaced
/// wholesale when a different id is resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaDetail {
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
    /// Series only; movies leave this unset.
    pub number_of_seasons: Option<u32>,
    pub genres: Vec<Genre>,
    /// First 10 cast entries, server order preserved.
    pub cast: Vec<CastMember>,
    /// Key of the first video entry of type "Trailer" hosted on YouTube.
    pub trailer_key: Option<String>,
    /// First 10 similar items, server order preserved.
    pub similar: Vec<CatalogItem>,
}
