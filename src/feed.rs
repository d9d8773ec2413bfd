// SPDX-License-Identifier: MPL-2.0
//! Photo feed model and reel navigation.
//!
//! The feed is handed to the application fully formed (this process never
//! fetches it); the [`PhotoReel`] keeps the locally owned, mutable copy of
//! that sequence together with the current page index, providing a single
//! source of truth for which photo is on screen.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single photo entry of the feed.
///
/// Wire format is camelCase JSON, matching the upstream feed service:
/// `{"id": "...", "imageUrl": "...", "activity": "...", "createdAt": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique photo identifier, also the deletion key.
    pub id: String,
    /// Where the photo bytes live (http(s) URL or a local path).
    pub image_url: String,
    /// Activity label, e.g. "running"; resolved against the activity catalog.
    pub activity: String,
    /// When the photo was posted.
    pub created_at: DateTime<Utc>,
}

/// Reads and parses a feed file (a JSON array of photos).
pub fn load_feed(path: &Path) -> Result<Vec<Photo>> {
    let raw = fs::read_to_string(path)?;
    let photos: Vec<Photo> = serde_json::from_str(&raw)?;
    Ok(photos)
}

/// Outcome of removing a photo from the reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The removed photo was the last one; the screen should exit.
    Emptied,
    /// Photos remain; `index` is the (possibly clamped) current index.
    Remaining { index: usize },
}

/// Ordered photo sequence plus the current page index.
///
/// Invariant: while the reel is non-empty the index is in bounds. The reel
/// only ever shrinks (photos are removed, never created here).
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoReel {
    photos: Vec<Photo>,
    current: usize,
}

impl PhotoReel {
    /// Creates a reel positioned at `initial_index`, clamped into bounds.
    pub fn new(photos: Vec<Photo>, initial_index: usize) -> Self {
        let current = if photos.is_empty() {
            0
        } else {
            initial_index.min(photos.len() - 1)
        };
        Self { photos, current }
    }

    /// Returns the number of photos in the reel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Checks if the reel has no photos left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Returns the current page index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the currently visible photo, if any remain.
    #[must_use]
    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.current)
    }

    /// Returns the photo at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Returns the full ordered sequence.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Sets the current index, clamped into bounds; returns the effective index.
    pub fn set_current_index(&mut self, index: usize) -> usize {
        if !self.photos.is_empty() {
            self.current = index.min(self.photos.len() - 1);
        }
        self.current
    }

    /// Removes the photo with the given id.
    ///
    /// Returns `None` when no photo with that id exists. Otherwise the
    /// current index is left untouched unless it fell out of range, in
    /// which case it is clamped to the new last page.
    pub fn remove(&mut self, id: &str) -> Option<RemoveOutcome> {
        let position = self.photos.iter().position(|p| p.id == id)?;
        self.photos.remove(position);

        if self.photos.is_empty() {
            self.current = 0;
            return Some(RemoveOutcome::Emptied);
        }

        self.current = self.current.min(self.photos.len() - 1);
        Some(RemoveOutcome::Remaining {
            index: self.current,
        })
    }
}
