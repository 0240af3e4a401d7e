// SPDX-License-Identifier: MPL-2.0
//! Bounded memo of size lookups keyed by photo id.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used lookups are dropped first
//! - **Entry-bounded**: capacity is a number of photos, not bytes
//! - **Shared**: entries are `Arc`ed so a hit never clones the variant list
//!
//! The mutex guards only synchronous map operations and is never held while
//! a request is pending.

use crate::config::{MAX_SIZE_CACHE_ENTRIES, MIN_SIZE_CACHE_ENTRIES};
use crate::domain::photo::{PhotoId, SizeVariant};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe LRU of size variants.
#[derive(Debug)]
pub struct SizeCache {
    entries: Mutex<LruCache<PhotoId, Arc<Vec<SizeVariant>>>>,
}

impl SizeCache {
    /// Creates a memo holding at most `capacity` photos (clamped to the
    /// configured bounds).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_SIZE_CACHE_ENTRIES, MAX_SIZE_CACHE_ENTRIES);
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the memoized variants for `id`, promoting the entry.
    pub fn get(&self, id: &PhotoId) -> Option<Arc<Vec<SizeVariant>>> {
        self.lock().get(id).cloned()
    }

    /// Stores the variants for `id`, evicting the oldest entry if full.
    pub fn insert(&self, id: PhotoId, sizes: Arc<Vec<SizeVariant>>) {
        self.lock().put(id, sizes);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    // A poisoned lock only means another task panicked mid-insert; the map
    // itself is still consistent.
    fn lock(&self) -> MutexGuard<'_, LruCache<PhotoId, Arc<Vec<SizeVariant>>>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
