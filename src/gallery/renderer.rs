// SPDX-License-Identifier: MPL-2.0
//! Grid state: the accumulated photo list, its active sort, the current
//! justified layout and the lightbox selection.
//!
//! Every mutation ends in a full layout pass. A pass captures the natural
//! sizes it used into a [`ResizeBinding`], replacing the previous binding;
//! [`GridRenderer::resize`] only ever recomputes from the live binding.

use super::layout::{self, GridLayout, LayoutError, LayoutParams, NaturalSize};
use super::sort::sort_photos;
use crate::domain::photo::{PhotoId, PhotoRecord};
use crate::domain::stream::SortOrder;
use std::sync::Arc;

/// Inputs captured by the most recent layout pass for resize handling.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeBinding {
    /// Incremented on every pass.
    pub generation: u64,
    sizes: Arc<Vec<NaturalSize>>,
}

#[derive(Debug, Clone)]
pub struct GridRenderer {
    photos: Vec<PhotoRecord>,
    sort: SortOrder,
    params: LayoutParams,
    layout: GridLayout,
    binding: Option<ResizeBinding>,
    passes: u64,
    selected: Option<PhotoId>,
}

impl GridRenderer {
    /// Creates an empty grid; `params.container_width` may still be zero.
    #[must_use]
    pub fn new(params: LayoutParams, sort: SortOrder) -> Self {
        Self {
            photos: Vec::new(),
            sort,
            params,
            layout: GridLayout::default(),
            binding: None,
            passes: 0,
            selected: None,
        }
    }

    #[must_use]
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn params(&self) -> LayoutParams {
        self.params
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// The live resize binding, if a layout pass has succeeded.
    #[must_use]
    pub fn resize_binding(&self) -> Option<&ResizeBinding> {
        self.binding.as_ref()
    }

    /// Replaces the photo list (initial load), orders it by the active sort
    /// and lays it out.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if a photo lacks usable dimensions.
    pub fn replace(&mut self, photos: Vec<PhotoRecord>) -> Result<(), LayoutError> {
        self.photos = photos;
        self.selected = None;
        sort_photos(&mut self.photos, self.sort);
        self.layout_pass()
    }

    /// Appends a page, re-applies the active sort and lays everything out.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if a photo lacks usable dimensions.
    pub fn append(&mut self, photos: Vec<PhotoRecord>) -> Result<(), LayoutError> {
        self.photos.extend(photos);
        sort_photos(&mut self.photos, self.sort);
        self.layout_pass()
    }

    /// Reorders the full accumulated list and lays it out again.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if a photo lacks usable dimensions.
    pub fn apply_sort(&mut self, sort: SortOrder) -> Result<(), LayoutError> {
        self.sort = sort;
        sort_photos(&mut self.photos, sort);
        self.layout_pass()
    }

    /// Recomputes the layout for a new container width from the inputs
    /// captured by the last pass. Does nothing before the first pass.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the captured sizes are invalid.
    pub fn resize(&mut self, container_width: u32) -> Result<(), LayoutError> {
        self.params = self.params.with_width(container_width);
        let Some(binding) = &self.binding else {
            return Ok(());
        };
        self.layout = layout::justify(&binding.sizes, self.params)?;
        tracing::debug!(
            width = container_width,
            rows = self.layout.rows.len(),
            "grid resized"
        );
        Ok(())
    }

    /// Opens the lightbox on the photo at `index` of the current order.
    pub fn view_photo(&mut self, index: usize) -> Option<&PhotoRecord> {
        let photo = self.photos.get(index)?;
        self.selected = Some(photo.id.clone());
        Some(photo)
    }

    pub fn close_viewer(&mut self) {
        self.selected = None;
    }

    /// Photo shown in the lightbox, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&PhotoRecord> {
        let id = self.selected.as_ref()?;
        self.photos.iter().find(|photo| &photo.id == id)
    }

    fn layout_pass(&mut self) -> Result<(), LayoutError> {
        // Drop the old binding first so a failed pass leaves no stale handler.
        self.binding = None;

        let sizes = match layout::natural_sizes(&self.photos) {
            Ok(sizes) => sizes,
            Err(err) => {
                self.layout = GridLayout::default();
                return Err(err);
            }
        };
        self.layout = match layout::justify(&sizes, self.params) {
            Ok(layout) => layout,
            Err(err) => {
                self.layout = GridLayout::default();
                return Err(err);
            }
        };

        self.passes += 1;
        self.binding = Some(ResizeBinding {
            generation: self.passes,
            sizes: Arc::new(sizes),
        });
        tracing::debug!(
            photos = self.photos.len(),
            rows = self.layout.rows.len(),
            sort = %self.sort,
            "layout pass"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::SizeLabel;
    use crate::test_utils::record;

    fn params() -> LayoutParams {
        LayoutParams {
            container_width: 1000,
            row_height: 180,
            margin: 8,
        }
    }

    fn dated(id: &str, date: i64, views: u64) -> PhotoRecord {
        let mut photo = record(id, 300, 200);
        photo.date_uploaded = date;
        photo.views = views;
        photo
    }

    fn ids(renderer: &GridRenderer) -> Vec<&str> {
        renderer.photos().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn replace_orders_first_page_by_active_sort() {
        let mut renderer = GridRenderer::new(params(), SortOrder::UploadDate);
        renderer
            .replace(vec![dated("old", 1, 0), dated("new", 9, 0)])
            .expect("valid photos");
        assert_eq!(ids(&renderer), vec!["new", "old"]);
        assert_eq!(renderer.layout().tile_count(), 2);
    }

    #[test]
    fn replace_honors_views_sort_chosen_before_loading() {
        let mut renderer = GridRenderer::new(params(), SortOrder::Views);
        renderer
            .replace(vec![dated("a", 1, 1), dated("b", 2, 99)])
            .expect("valid photos");
        assert_eq!(ids(&renderer), vec!["b", "a"]);
        assert_eq!(renderer.sort(), SortOrder::Views);
    }

    #[test]
    fn append_reapplies_active_sort_over_everything() {
        let mut renderer = GridRenderer::new(params(), SortOrder::Views);
        renderer
            .replace(vec![dated("a", 1, 10), dated("b", 2, 50)])
            .expect("valid photos");
        renderer
            .append(vec![dated("c", 3, 30), dated("d", 4, 90)])
            .expect("valid photos");

        assert_eq!(ids(&renderer), vec!["d", "b", "c", "a"]);
        assert_eq!(renderer.layout().tile_count(), 4);
    }

    #[test]
    fn apply_sort_reorders_full_list() {
        let mut renderer = GridRenderer::new(params(), SortOrder::UploadDate);
        renderer
            .replace(vec![dated("a", 1, 30), dated("b", 3, 10), dated("c", 2, 20)])
            .expect("valid photos");

        renderer.apply_sort(SortOrder::UploadDate).expect("sorted");
        assert_eq!(ids(&renderer), vec!["b", "c", "a"]);
        renderer.apply_sort(SortOrder::Views).expect("sorted");
        assert_eq!(ids(&renderer), vec!["a", "c", "b"]);
        assert_eq!(renderer.sort(), SortOrder::Views);
    }

    #[test]
    fn each_pass_replaces_the_resize_binding() {
        let mut renderer = GridRenderer::new(params(), SortOrder::UploadDate);
        assert!(renderer.resize_binding().is_none());

        renderer.replace(vec![dated("a", 1, 0)]).expect("valid photos");
        assert_eq!(renderer.resize_binding().map(|b| b.generation), Some(1));
        renderer.append(vec![dated("b", 2, 0)]).expect("valid photos");
        assert_eq!(renderer.resize_binding().map(|b| b.generation), Some(2));
        renderer.apply_sort(SortOrder::Views).expect("valid photos");
        assert_eq!(renderer.resize_binding().map(|b| b.generation), Some(3));
    }

    #[test]
    fn resize_recomputes_with_captured_inputs() {
        let mut renderer = GridRenderer::new(params(), SortOrder::UploadDate);
        renderer
            .replace((0..5).map(|i| dated(&i.to_string(), i, 0)).collect())
            .expect("valid photos");
        assert_eq!(renderer.layout().rows.len(), 2);

        renderer.resize(550).expect("valid sizes");
        assert_eq!(renderer.layout().container_width, 550);
        let first = &renderer.layout().rows[0];
        assert_eq!(first.tiles.len(), 2);
        assert_eq!(first.width, 550);
        // Resizing does not start a new pass.
        assert_eq!(renderer.resize_binding().map(|b| b.generation), Some(1));
    }

    #[test]
    fn resize_before_first_pass_only_records_width() {
        let mut renderer = GridRenderer::new(params().with_width(0), SortOrder::UploadDate);
        renderer.resize(800).expect("no-op");
        assert!(renderer.layout().rows.is_empty());
        assert_eq!(renderer.params().container_width, 800);
    }

    #[test]
    fn missing_layout_size_clears_layout_and_binding() {
        let mut renderer = GridRenderer::new(params(), SortOrder::UploadDate);
        renderer.replace(vec![dated("a", 1, 0)]).expect("valid photos");

        let mut broken = dated("b", 2, 0);
        broken.sizes[0].label = SizeLabel::Small;
        let err = renderer.append(vec![broken]).expect_err("no medium");

        assert!(matches!(err, LayoutError::MissingSize { .. }));
        assert!(renderer.layout().rows.is_empty());
        assert!(renderer.resize_binding().is_none());
    }

    #[test]
    fn viewer_selection_follows_photo_across_sorts() {
        let mut renderer = GridRenderer::new(params(), SortOrder::UploadDate);
        renderer
            .replace(vec![dated("a", 1, 30), dated("b", 3, 10)])
            .expect("valid photos");

        // Newest first: "b" at 0, "a" at 1.
        let opened = renderer.view_photo(1).map(|p| p.url_large.clone());
        assert_eq!(
            opened.as_deref(),
            Some("https://farm1.staticflickr.com/1/a_s_b.jpg")
        );
        renderer.apply_sort(SortOrder::Views).expect("sorted");
        assert_eq!(ids(&renderer), vec!["a", "b"]);
        assert_eq!(renderer.selected().map(|p| p.id.as_str()), Some("a"));

        renderer.close_viewer();
        assert!(renderer.selected().is_none());
        assert!(renderer.view_photo(99).is_none());
    }
}
