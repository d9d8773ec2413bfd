// SPDX-License-Identifier: MPL-2.0
//! Photo byte fetching, decoding, and the in-memory handle cache.
//!
//! Photos are referenced by URL in the feed; bytes are fetched over HTTP
//! (or read from disk for plain paths, which demo feeds use), decoded to
//! RGBA, and kept as ready-to-render handles in a bounded LRU cache keyed
//! by photo id. Paging back to a recently seen photo never re-downloads.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// How many decoded photos are kept in memory. Full-screen photos are a few
/// megabytes each once decoded, so the cache is kept small.
const CACHE_CAPACITY: usize = 16;

/// A decoded photo ready for the image widget.
pub type PhotoHandle = Handle;

/// Lifecycle of a single photo's pixels.
#[derive(Debug, Clone)]
pub enum PhotoImage {
    /// Fetch in progress.
    Loading,
    /// Decoded and ready to render.
    Ready(PhotoHandle),
    /// Fetch or decode failed; rendered as a failed-state page.
    Failed,
}

/// Bounded LRU cache of photo handles, keyed by photo id.
pub struct ImageCache {
    entries: LruCache<String, PhotoImage>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl ImageCache {
    /// Creates an empty cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: LruCache::new(
                NonZeroUsize::new(CACHE_CAPACITY).expect("cache capacity is non-zero"),
            ),
        }
    }

    /// Looks up a photo's slot without disturbing the LRU order.
    #[must_use]
    pub fn slot(&self, id: &str) -> Option<&PhotoImage> {
        self.entries.peek(id)
    }

    /// Checks whether a photo has a slot (loading, ready, or failed).
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains(id)
    }

    /// Marks a photo as being fetched so it is not requested twice.
    pub fn mark_loading(&mut self, id: &str) {
        self.entries.put(id.to_string(), PhotoImage::Loading);
    }

    /// Stores a decoded photo handle.
    pub fn insert_ready(&mut self, id: &str, handle: PhotoHandle) {
        self.entries.put(id.to_string(), PhotoImage::Ready(handle));
    }

    /// Records a failed fetch so the page renders its failed state.
    pub fn insert_failed(&mut self, id: &str) {
        self.entries.put(id.to_string(), PhotoImage::Failed);
    }

    /// Promotes a photo to most-recently-used (called when its page settles).
    pub fn touch(&mut self, id: &str) {
        self.entries.get(id);
    }

    /// Number of cached slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes photo bytes into an RGBA image handle.
pub fn decode_photo(bytes: &[u8]) -> Result<PhotoHandle> {
    let image = image_rs::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Fetches and decodes a photo.
///
/// `http(s)` URLs go through the shared client; anything else is treated as
/// a local filesystem path (read off the async executor).
pub async fn fetch_photo(client: reqwest::Client, url: String) -> Result<PhotoHandle> {
    let bytes: Vec<u8> = if url.starts_with("http://") || url.starts_with("https://") {
        client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    } else {
        tokio::task::spawn_blocking(move || std::fs::read(&url))
            .await
            .map_err(|e| Error::Io(e.to_string()))??
    };

    decode_photo(&bytes)
}
