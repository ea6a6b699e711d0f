//! Image set and the inline preview grid.
//!
//! The property page shows at most [`PREVIEW_LIMIT`] tiles inline. The last
//! tile carries a `+ N photos` badge when the set is larger than the grid.
//! Clicking a tile opens the lightbox on that image; because the preview is a
//! prefix of the set, a tile's position is also its index in the full set.

use crate::viewer::ViewerSession;
use serde::{Deserialize, Serialize};

/// Number of tiles in the inline preview grid.
pub const PREVIEW_LIMIT: usize = 5;

/// Ordered, immutable list of image references (URLs or paths).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSet(Vec<String>);

impl ImageSet {
    pub fn new(images: Vec<String>) -> Self {
        Self(images)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// A closed lightbox session over this set.
    pub fn session(&self) -> ViewerSession {
        ViewerSession::new(self.len())
    }
}

impl<S: Into<String>> FromIterator<S> for ImageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The bounded inline subset of an [`ImageSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSlice<'a> {
    /// First `min(PREVIEW_LIMIT, n)` images, in order.
    pub shown: &'a [String],
    /// Images not shown inline: `max(0, n - PREVIEW_LIMIT)`.
    pub overflow_count: usize,
}

/// Split `images` into the inline preview and the overflow count.
pub fn preview_slice(images: &ImageSet) -> PreviewSlice<'_> {
    let all = images.as_slice();
    let shown = &all[..all.len().min(PREVIEW_LIMIT)];
    PreviewSlice {
        shown,
        overflow_count: all.len().saturating_sub(PREVIEW_LIMIT),
    }
}

impl PreviewSlice<'_> {
    /// Badge text for the last tile, if anything overflows.
    pub fn overflow_badge(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("+ {} photos", self.overflow_count))
    }

    /// Whether the tile at `position` carries the overflow badge.
    pub fn is_badge_tile(&self, position: usize) -> bool {
        self.overflow_count > 0 && position + 1 == self.shown.len()
    }

    /// Route a click on tile `position` to the lightbox.
    ///
    /// Returns `false` and leaves the session alone when no tile is at
    /// `position`.
    pub fn open_tile(&self, position: usize, session: &mut ViewerSession) -> bool {
        if position >= self.shown.len() {
            return false;
        }
        session.open(position as i64);
        true
    }
}
