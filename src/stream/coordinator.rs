// SPDX-License-Identifier: MPL-2.0
//! Pagination and sort state of the photo stream.
//!
//! The coordinator never performs I/O itself. Transitions that need a page
//! hand back a `'static` future for the shell to run; the shell feeds the
//! outcome back through [`StreamCoordinator::apply_page`].
//!
//! ```text
//!  Init ──activate──▶ Loading ──apply_page(Ok)──▶ Ready
//!   ▲                   │  ▲                        │
//!   └──apply_page(Err)──┘  └───────load_more────────┘
//! ```

use super::fetcher::{PageResult, PhotoFetcher};
use crate::application::port::PhotoApi;
use crate::domain::photo::PhotoRecord;
use crate::domain::stream::{PageSizeTier, SortOrder};
use crate::error::Result;
use std::future::Future;
use std::sync::Arc;

/// Notification that the user picked a different sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortChanged {
    pub sort: SortOrder,
}

/// Pagination state, mutated only by completed fetches and sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamState {
    /// Next page to request (1-based).
    pub current_page: u32,
    pub photo_count_so_far: u64,
    /// Captured from the first successful page; `None` before that.
    pub total_photos_available: Option<u64>,
    pub page_size: PageSizeTier,
    pub selected_sort: SortOrder,
}

impl Default for StreamState {
    fn default() -> Self {
        Self {
            current_page: 1,
            photo_count_so_far: 0,
            total_photos_available: None,
            page_size: PageSizeTier::default(),
            selected_sort: SortOrder::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Init,
    Loading,
    Ready,
}

/// Drives a [`PhotoFetcher`] page by page.
#[derive(Debug)]
pub struct StreamCoordinator<A> {
    fetcher: Arc<PhotoFetcher<A>>,
    state: StreamState,
    phase: Phase,
    params: Vec<(String, String)>,
}

impl<A: PhotoApi + 'static> StreamCoordinator<A> {
    #[must_use]
    pub fn new(fetcher: Arc<PhotoFetcher<A>>, initial_sort: SortOrder) -> Self {
        Self {
            fetcher,
            state: StreamState {
                selected_sort: initial_sort,
                ..StreamState::default()
            },
            phase: Phase::Init,
            params: Vec::new(),
        }
    }

    /// Extra query parameters sent with every page request.
    #[must_use]
    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    #[must_use]
    pub fn fetcher(&self) -> &Arc<PhotoFetcher<A>> {
        &self.fetcher
    }

    /// Returns `true` while a page request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Returns `true` once every available photo has been received.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state
            .total_photos_available
            .is_some_and(|total| self.state.photo_count_so_far >= total)
    }

    /// Picks the page size from the viewport width and requests page 1.
    ///
    /// Returns `None` if the stream was already activated.
    pub fn activate(
        &mut self,
        viewport_width: f32,
    ) -> Option<impl Future<Output = Result<PageResult>> + Send + 'static> {
        if self.phase != Phase::Init {
            tracing::debug!("stream already active; ignoring activate");
            return None;
        }

        let tier = PageSizeTier::for_viewport_width(viewport_width);
        self.fetcher.set_page_size(tier);
        self.state.page_size = tier;
        self.phase = Phase::Loading;
        tracing::info!(
            viewport_width,
            per_page = tier.per_page(),
            "activating photo stream"
        );
        Some(self.request(self.state.current_page))
    }

    /// Requests the next page, if there is one and none is in flight.
    ///
    /// Repeated calls after exhaustion are no-ops.
    pub fn load_more(&mut self) -> Option<impl Future<Output = Result<PageResult>> + Send + 'static> {
        match self.phase {
            Phase::Init | Phase::Loading => return None,
            Phase::Ready => {}
        }
        if self.is_exhausted() {
            tracing::debug!(
                photos = self.state.photo_count_so_far,
                "stream exhausted; nothing to load"
            );
            return None;
        }

        self.phase = Phase::Loading;
        tracing::debug!(page = self.state.current_page, "loading more photos");
        Some(self.request(self.state.current_page))
    }

    /// Applies the outcome of a page request.
    ///
    /// On success the page's photos are returned for display. On failure the
    /// pagination state is left untouched and the error is passed through.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged.
    pub fn apply_page(&mut self, result: Result<PageResult>) -> Result<Vec<PhotoRecord>> {
        let page = match result {
            Ok(page) => page,
            Err(err) => {
                self.phase = if self.state.total_photos_available.is_some() {
                    Phase::Ready
                } else {
                    Phase::Init
                };
                tracing::warn!(page = self.state.current_page, error = %err, "page request failed");
                return Err(err);
            }
        };

        let received = page.photos.len() as u64;
        self.state.photo_count_so_far += received;
        if self.state.total_photos_available.is_none() {
            self.state.total_photos_available = Some(page.page_info.total_count);
        }
        if received == 0 && !self.is_exhausted() {
            // An empty page before the advertised total would make every
            // later scroll request the same page forever.
            tracing::warn!(
                page = self.state.current_page,
                photos = self.state.photo_count_so_far,
                "empty page before advertised total; treating stream as exhausted"
            );
            self.state.total_photos_available = Some(self.state.photo_count_so_far);
        }
        self.state.current_page += 1;
        self.phase = Phase::Ready;

        tracing::info!(
            page = page.page_info.page,
            photos = received,
            loaded = self.state.photo_count_so_far,
            total = ?self.state.total_photos_available,
            "page applied"
        );
        Ok(page.photos)
    }

    /// Selects a sort order, notifying only when it actually changes.
    pub fn select_sort(&mut self, sort: SortOrder) -> Option<SortChanged> {
        if self.state.selected_sort == sort {
            return None;
        }
        self.state.selected_sort = sort;
        tracing::debug!(%sort, "sort order changed");
        Some(SortChanged { sort })
    }

    fn request(&self, page: u32) -> impl Future<Output = Result<PageResult>> + Send + 'static {
        let fetcher = Arc::clone(&self.fetcher);
        let params = self.params.clone();
        async move { fetcher.fetch_page(page, &params).await }
    }
}
