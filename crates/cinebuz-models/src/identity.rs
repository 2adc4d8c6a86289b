use serde::{Deserialize, Serialize};

/// The signed-in principal for the current client session.
///
/// Created on sign-in completion, destroyed on sign-out; at most one is
/// active at a time and all watchlist operations are scoped to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub principal_id: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}
