//! Page cursor for discover listings.

use cinebuz_models::PageState;

/// The remote catalog rejects page numbers above 500 regardless of how many
/// pages it reports, so navigation stops there.
pub const MAX_PAGES: u32 = 500;

/// One-based page cursor, clamped to `[1, min(total_pages, MAX_PAGES)]`.
#[derive(Debug, Clone, Default)]
pub struct PageCursor {
    state: PageState,
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    fn ceiling(&self) -> u32 {
        self.state.total_pages.min(MAX_PAGES)
    }

    /// Advance one page. At the ceiling this is a no-op.
    pub fn next(&mut self) {
        if self.state.current_page < self.ceiling() {
            self.state.current_page += 1;
        }
    }

    /// Step back one page. At page one this is a no-op.
    pub fn previous(&mut self) {
        if self.state.current_page > 1 {
            self.state.current_page -= 1;
        }
    }

    /// Record the total page count from the latest listing response. A
    /// shrinking total pulls the current page back inside the new ceiling.
    pub fn set_total_pages(&mut self, total: u32) {
        self.state.total_pages = total.max(1);
        if self.state.current_page > self.ceiling() {
            self.state.current_page = self.ceiling();
        }
    }
}
