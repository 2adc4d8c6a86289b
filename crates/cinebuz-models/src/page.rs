use serde::{Deserialize, Serialize};

/// Position of a bounded listing cursor.
///
/// Invariant after initialization: `1 <= current_page <= min(total_pages, 500)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}
