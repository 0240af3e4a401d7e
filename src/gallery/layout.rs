// SPDX-License-Identifier: MPL-2.0
//! Justified-row layout.
//!
//! Photos are scaled to a target row height, packed left to right until a row
//! overflows the container, then the whole row is shrunk so that it spans the
//! container exactly. A trailing row that never fills up keeps the previous
//! row's height and is left ragged.
//!
//! The layout is a pure function of the natural sizes and [`LayoutParams`];
//! nothing here knows about widgets.

use crate::config::{DEFAULT_ROW_HEIGHT, DEFAULT_TILE_MARGIN};
use crate::domain::photo::{PhotoId, PhotoRecord, SizeLabel};
use thiserror::Error;

/// Slack applied before rounding so that float noise on an exact pixel value
/// does not push it to the next integer.
const PIXEL_EPSILON: f64 = 1e-9;

/// Data-integrity failures detected while laying out photos.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A photo reported a zero width or height.
    #[error("photo at index {index} has a zero dimension")]
    ZeroDimension { index: usize },

    /// A photo has no rendition of the tier used for layout.
    #[error("photo {photo_id} has no {label} rendition")]
    MissingSize { photo_id: PhotoId, label: SizeLabel },
}

/// Intrinsic pixel size of one photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Inputs of a layout pass besides the photos themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub container_width: u32,
    /// Row height before shrinking.
    pub row_height: u32,
    /// Horizontal space reserved per tile (both sides combined).
    pub margin: u32,
}

impl LayoutParams {
    #[must_use]
    pub fn with_width(self, container_width: u32) -> Self {
        Self {
            container_width,
            ..self
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            container_width: 0,
            row_height: DEFAULT_ROW_HEIGHT,
            margin: DEFAULT_TILE_MARGIN,
        }
    }
}

/// Placement of one photo; `index` points into the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub tiles: Vec<Tile>,
    /// Sum of tile widths plus one margin per tile.
    pub width: u32,
    pub height: u32,
    /// Factor applied to the provisional widths of this row.
    pub shrink: f64,
    /// `false` for a trailing row that never reached the container width.
    pub full: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub rows: Vec<LayoutRow>,
    pub container_width: u32,
}

impl GridLayout {
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(|row| row.tiles.len()).sum()
    }

    /// Total height of the grid with `row_spacing` pixels between rows.
    #[must_use]
    pub fn content_height(&self, row_spacing: u32) -> u32 {
        let rows: u32 = self.rows.iter().map(|row| row.height).sum();
        let gaps = u32::try_from(self.rows.len().saturating_sub(1)).unwrap_or(u32::MAX);
        rows.saturating_add(gaps.saturating_mul(row_spacing))
    }
}

/// Extracts the layout size of every record, in order.
///
/// # Errors
///
/// Returns [`LayoutError::MissingSize`] for the first record without a
/// [`SizeLabel::DEFAULT`] rendition.
pub fn natural_sizes(photos: &[PhotoRecord]) -> Result<Vec<NaturalSize>, LayoutError> {
    photos
        .iter()
        .map(|photo| {
            photo
                .default_size()
                .map(|size| NaturalSize::new(size.width, size.height))
                .ok_or_else(|| LayoutError::MissingSize {
                    photo_id: photo.id.clone(),
                    label: SizeLabel::DEFAULT,
                })
        })
        .collect()
}

/// Lays `sizes` out in justified rows.
///
/// Every full row satisfies `Σ widths + n·margin == container_width`. Tile
/// edges sit at the scaled prefix sums rounded up, so the rounding spreads
/// across the row and the last tile closes it exactly.
///
/// # Errors
///
/// Returns [`LayoutError::ZeroDimension`] if any size has a zero side.
pub fn justify(sizes: &[NaturalSize], params: LayoutParams) -> Result<GridLayout, LayoutError> {
    if let Some(index) = sizes.iter().position(|s| s.width == 0 || s.height == 0) {
        return Err(LayoutError::ZeroDimension { index });
    }

    let target = f64::from(params.row_height);
    let container = f64::from(params.container_width);
    let margin = f64::from(params.margin);

    let mut rows = Vec::new();
    let mut pending: Vec<(usize, f64)> = Vec::new();
    let mut accumulated = 0.0;
    // Height and shrink of the most recent full row, for the trailing row.
    let mut last_height = params.row_height;
    let mut last_shrink = 1.0;

    for (index, size) in sizes.iter().enumerate() {
        let provisional = f64::from(size.width) * target / f64::from(size.height);
        pending.push((index, provisional));
        accumulated += provisional + margin;

        if accumulated >= container {
            let row = close_row(&pending, accumulated, params);
            last_height = row.height;
            last_shrink = row.shrink;
            rows.push(row);
            pending.clear();
            accumulated = 0.0;
        }
    }

    if !pending.is_empty() {
        let tiles: Vec<Tile> = pending
            .iter()
            .map(|&(index, provisional)| Tile {
                index,
                width: floor_px(provisional * last_shrink),
                height: last_height,
            })
            .collect();
        rows.push(LayoutRow {
            width: row_width(&tiles, params.margin),
            tiles,
            height: last_height,
            shrink: last_shrink,
            full: false,
        });
    }

    Ok(GridLayout {
        rows,
        container_width: params.container_width,
    })
}

fn close_row(pending: &[(usize, f64)], accumulated: f64, params: LayoutParams) -> LayoutRow {
    let count = u32::try_from(pending.len()).unwrap_or(u32::MAX);
    let whitespace = count.saturating_mul(params.margin);
    let available = params.container_width.saturating_sub(whitespace);
    let shrink = f64::from(available) / (accumulated - f64::from(whitespace));
    let height = ceil_px(f64::from(params.row_height) * shrink);

    // Each tile ends at the rounded-up scaled prefix sum, so widths never go
    // negative and the last edge lands exactly on `available`.
    let mut tiles = Vec::with_capacity(pending.len());
    let mut prefix = 0.0;
    let mut placed = 0u32;
    for (position, &(index, provisional)) in pending.iter().enumerate() {
        prefix += provisional;
        let edge = if position + 1 == pending.len() {
            available
        } else {
            ceil_px(prefix * shrink).min(available)
        };
        let width = edge.saturating_sub(placed);
        placed = edge.max(placed);
        tiles.push(Tile {
            index,
            width,
            height,
        });
    }

    LayoutRow {
        width: row_width(&tiles, params.margin),
        tiles,
        height,
        shrink,
        full: true,
    }
}

fn row_width(tiles: &[Tile], margin: u32) -> u32 {
    tiles
        .iter()
        .map(|tile| tile.width.saturating_add(margin))
        .fold(0u32, u32::saturating_add)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_px(value: f64) -> u32 {
    (value - PIXEL_EPSILON).ceil().max(0.0) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_px(value: f64) -> u32 {
    (value + PIXEL_EPSILON).floor().max(0.0) as u32
}
