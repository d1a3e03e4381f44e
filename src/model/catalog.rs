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

//! Music catalog state and loading.
//!
//! This module provides state for the catalog loading process and the loaded
//! collection of tracks, which is fetched once at start-up and shared with
//! every view.

use std::{sync::Arc, time::Duration};

use crate::{error::CatalogError, model::TrackRecord};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CatalogStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

pub(crate) struct Catalog {
    pub(crate) status: CatalogStatus,
    tracks: Arc<Vec<TrackRecord>>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self {
            status: CatalogStatus::Idle,
            tracks: Arc::new(vec![]),
        }
    }

    pub(crate) fn begin_load(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    pub(crate) fn finish_load(&mut self, tracks: Vec<TrackRecord>) {
        self.tracks = Arc::new(tracks);
        self.status = CatalogStatus::Loaded;
    }

    /// A failed load leaves whatever was there before, normally nothing.
    pub(crate) fn fail_load(&mut self) {
        self.status = CatalogStatus::Failed;
    }

    pub(crate) fn tracks(&self) -> Arc<Vec<TrackRecord>> {
        Arc::clone(&self.tracks)
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn find_by_video(&self, video_id: &str) -> Option<&TrackRecord> {
        self.tracks.iter().find(|t| t.youtube == video_id)
    }
}

/// Decodes a catalog JSON array and annotates every record.
pub(crate) fn parse_catalog(body: &str) -> Result<Vec<TrackRecord>, CatalogError> {
    let records: Vec<TrackRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(TrackRecord::annotate).collect())
}

/// Fetches the catalog with a single blocking HTTP GET.
///
/// This is called from the task worker thread, never from the UI thread.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a non
/// success status, or the body is not a JSON array of track records.
pub(crate) fn fetch_catalog(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Vec<TrackRecord>, CatalogError> {
    let response = client.get(url).timeout(FETCH_TIMEOUT).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }

    let body = response.text()?;
    parse_catalog(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {
            "description": "Henesys",
            "filename": "FloralLife",
            "mark": "Henesys",
            "metadata": {
                "albumArtist": "Wizet",
                "artist": "Wizet",
                "subtitle": "",
                "title": "Floral Life",
                "year": "2003"
            },
            "source": {
                "client": "GMS",
                "date": "2003-04-29",
                "structure": "Bgm00",
                "version": "v.1"
            },
            "youtube": "Xpj0Cz0ZFnY"
        },
        {
            "description": "Unreleased",
            "filename": "Missing",
            "metadata": { "title": "Missing" },
            "source": { "client": "KMS" }
        }
    ]"#;

    #[test]
    fn parse_catalog_annotates_records() {
        let tracks = parse_catalog(CATALOG_JSON).unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].metadata.title, "Floral Life");
        assert_eq!(tracks[0].metadata.album_artist, "Wizet");
        assert_eq!(tracks[0].client_version(), "GMS v.1");
        assert_eq!(tracks[0].video_id(), Some("Xpj0Cz0ZFnY"));

        assert_eq!(tracks[1].source.cliver, None);
        assert!(!tracks[1].is_playable());
        assert_eq!(tracks[1].mark, "");
    }

    #[test]
    fn parse_catalog_rejects_non_array() {
        let err = parse_catalog(r#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn null_fields_decode_as_missing() {
        let body = r#"[
            {
                "filename": "Null",
                "description": null,
                "metadata": { "title": "Null", "year": null },
                "source": null,
                "youtube": null
            },
            { "filename": "Fine", "youtube": "abc" }
        ]"#;

        let tracks = parse_catalog(body).unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].description, "");
        assert_eq!(tracks[0].metadata.title, "Null");
        assert_eq!(tracks[0].source, Default::default());
        assert!(!tracks[0].is_playable());
        assert!(tracks[1].is_playable());
    }

    #[test]
    fn failed_load_keeps_catalog_empty() {
        let mut catalog = Catalog::new();
        catalog.begin_load();
        catalog.fail_load();

        assert_eq!(catalog.status, CatalogStatus::Failed);
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn find_by_video_looks_up_loaded_tracks() {
        let mut catalog = Catalog::new();
        catalog.finish_load(parse_catalog(CATALOG_JSON).unwrap());

        assert_eq!(catalog.status, CatalogStatus::Loaded);
        let track = catalog.find_by_video("Xpj0Cz0ZFnY").unwrap();
        assert_eq!(track.filename, "FloralLife");
        assert!(catalog.find_by_video("nope").is_none());
    }
}
