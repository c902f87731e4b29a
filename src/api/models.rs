// SPDX-License-Identifier: MPL-2.0
//! Wire types of the image metadata API.

use serde::{Deserialize, Serialize};

/// A single uploaded image as returned by the feed endpoint.
///
/// Records are immutable once fetched; the feed owns them for the duration of
/// the browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    /// External image location, publicly retrievable.
    pub url: String,
    /// Creation timestamp in microseconds since the Unix epoch.
    pub ts: i64,
}

impl ImageRecord {
    /// Human-readable creation date, or `None` when `ts` is out of range.
    pub fn posted_on(&self) -> Option<String> {
        chrono::DateTime::from_timestamp_micros(self.ts)
            .map(|moment| moment.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// One page of the feed. A present `after` cursor means more pages exist; an
/// absent one marks the terminal page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub data: Vec<ImageRecord>,
    #[serde(default)]
    pub after: Option<String>,
}

/// Body of the record creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewImage {
    pub title: String,
    pub description: String,
    pub url: String,
}
