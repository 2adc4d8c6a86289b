pub mod api;
pub mod client;
pub mod types;

pub use client::TmdbClient;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Build a full image URL from a TMDB-relative path such as `/abc.jpg`.
/// Sizes follow the upstream naming: `w200`, `w500`, `w780`, `original`.
pub fn image_url(size: &str, path: &str) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size, path)
}
