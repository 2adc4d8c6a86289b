use thiserror::Error;

/// Failures surfaced by the catalog client.
///
/// `NotFound` is reserved for detail probes: a 4xx on `movie/{id}` or
/// `tv/{id}` means "this id is not of that kind", which callers use to fall
/// back to the other kind. Everything else is a transport or server problem
/// and is never retried automatically.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog item not found")]
    NotFound,

    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog responded with status {status} for {endpoint}")]
    Status { status: u16, endpoint: String },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }
}
