// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entity of the application, the catalog
//! [`TrackRecord`], exactly as it is published in the music database JSON,
//! together with the derived values the views need (the combined client and
//! version string, the playable video identifier, the release month).

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod playback;
pub(crate) mod sort;
pub(crate) mod stats;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TrackMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) album_artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct TrackSource {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) client: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) structure: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) version: String,

    /// Combined "client version" display string, computed at load time.
    #[serde(skip)]
    pub(crate) cliver: Option<String>,
}

/// A single entry of the music catalog, keyed by `filename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct TrackRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) filename: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) mark: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) metadata: TrackMetadata,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) source: TrackSource,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) youtube: String,
}

// Published entries sometimes carry `null` where a value is simply missing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TrackRecord {
    /// Derives the display fields that are not part of the published data.
    ///
    /// The combined client string is only set when both the client and the
    /// version are present.
    pub(crate) fn annotate(mut self) -> Self {
        let source = &mut self.source;
        if !source.client.is_empty() && !source.version.is_empty() {
            source.cliver = Some(format!("{} {}", source.client, source.version));
        }
        self
    }

    pub(crate) fn video_id(&self) -> Option<&str> {
        (!self.youtube.is_empty()).then_some(self.youtube.as_str())
    }

    pub(crate) fn is_playable(&self) -> bool {
        self.video_id().is_some()
    }

    pub(crate) fn client_version(&self) -> &str {
        self.source.cliver.as_deref().unwrap_or_default()
    }

    /// Zero-based month of the source date, if the date can be parsed.
    ///
    /// Dates are published as `YYYY-MM-DD`, sometimes as the prefix of a full
    /// timestamp, so only the first ten characters are considered.
    pub(crate) fn release_month(&self) -> Option<u32> {
        let date = self.source.date.get(..10)?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.month0())
    }

    pub(crate) fn year(&self) -> Option<i32> {
        self.metadata.year.trim().parse().ok()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{TrackMetadata, TrackRecord, TrackSource};

    pub(crate) fn track(filename: &str, title: &str, youtube: &str) -> TrackRecord {
        TrackRecord {
            filename: filename.to_string(),
            metadata: TrackMetadata {
                title: title.to_string(),
                ..TrackMetadata::default()
            },
            youtube: youtube.to_string(),
            ..TrackRecord::default()
        }
    }

    pub(crate) fn dated(filename: &str, year: &str, date: &str) -> TrackRecord {
        TrackRecord {
            filename: filename.to_string(),
            metadata: TrackMetadata {
                year: year.to_string(),
                ..TrackMetadata::default()
            },
            source: TrackSource {
                date: date.to_string(),
                ..TrackSource::default()
            },
            ..TrackRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotate_combines_client_and_version() {
        let mut track = fixtures::track("a.mp3", "A", "");
        track.source.client = "GMS".to_string();
        track.source.version = "v.229".to_string();

        let track = track.annotate();

        assert_eq!(track.source.cliver.as_deref(), Some("GMS v.229"));
        assert_eq!(track.client_version(), "GMS v.229");
    }

    #[test]
    fn annotate_requires_both_fields() {
        let mut track = fixtures::track("a.mp3", "A", "");
        track.source.client = "KMS".to_string();

        let track = track.annotate();

        assert_eq!(track.source.cliver, None);
        assert_eq!(track.client_version(), "");
    }

    #[test]
    fn empty_video_id_is_not_playable() {
        assert!(!fixtures::track("a.mp3", "A", "").is_playable());
        assert_eq!(fixtures::track("b.mp3", "B", "xyz").video_id(), Some("xyz"));
    }

    #[test]
    fn release_month_is_zero_based() {
        assert_eq!(fixtures::dated("a", "2019", "2019-03-27").release_month(), Some(2));
        assert_eq!(fixtures::dated("a", "2019", "2019-12-01T00:00:00Z").release_month(), Some(11));
        assert_eq!(fixtures::dated("a", "2019", "").release_month(), None);
        assert_eq!(fixtures::dated("a", "2019", "not a date").release_month(), None);
    }
}
