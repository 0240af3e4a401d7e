// SPDX-License-Identifier: MPL-2.0
//! Descending orderings of the accumulated photo list.

use crate::domain::photo::PhotoRecord;
use crate::domain::stream::SortOrder;
use std::cmp::Reverse;

/// Sorts `photos` in place, newest or most viewed first.
///
/// Ties compare equal; their relative order is not part of the contract.
pub fn sort_photos(photos: &mut [PhotoRecord], order: SortOrder) {
    match order {
        SortOrder::UploadDate => photos.sort_by_key(|photo| Reverse(photo.date_uploaded)),
        SortOrder::Views => photos.sort_by_key(|photo| Reverse(photo.views)),
    }
}
