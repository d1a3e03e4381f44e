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

//! Quick filter over the catalog.
//!
//! The quick filter is a single free-text string matched against the
//! searchable columns of every record. It holds no state beyond the text
//! itself; the visible rows and the shuffle pool are derived from it on every
//! change.

use crate::model::TrackRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QuickFilter {
    text: String,
}

impl QuickFilter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Whether the filter narrows the grid at all.
    pub(crate) fn is_active(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Every whitespace-separated token must occur, case-insensitively, in
    /// the title or the description. Other columns are not searchable.
    pub(crate) fn matches(&self, track: &TrackRecord) -> bool {
        let haystack = quick_filter_text(track);
        self.text
            .to_lowercase()
            .split_whitespace()
            .all(|token| haystack.contains(token))
    }

    /// Indices of the matching records, in catalog order.
    pub(crate) fn apply(&self, tracks: &[TrackRecord]) -> Vec<usize> {
        if !self.is_active() {
            return (0..tracks.len()).collect();
        }

        tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| self.matches(t))
            .map(|(i, _)| i)
            .collect()
    }
}

// Columns are joined with a newline so a token cannot match across the
// boundary between title and description.
fn quick_filter_text(track: &TrackRecord) -> String {
    format!("{}\n{}", track.metadata.title, track.description).to_lowercase()
}

/// The visible rows that can be played, the candidates for a shuffled
/// playlist.
pub(crate) fn shuffle_pool(tracks: &[TrackRecord], rows: &[usize]) -> Vec<TrackRecord> {
    rows.iter()
        .filter_map(|&i| tracks.get(i))
        .filter(|t| t.is_playable())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::track;

    fn catalog() -> Vec<TrackRecord> {
        let mut henesys = track("FloralLife", "Floral Life", "v1");
        henesys.description = "Henesys".to_string();
        henesys.source.structure = "Bgm00".to_string();

        let mut ellinia = track("WhenTheMorningComes", "When The Morning Comes", "");
        ellinia.description = "Ellinia Forest".to_string();

        let mut perion = track("Nightmare", "Nightmare", "v3");
        perion.description = "Perion".to_string();
        perion.source.date = "2003-04-29".to_string();
        perion.source.cliver = Some("GMS v.1".to_string());

        vec![henesys, ellinia, perion]
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = QuickFilter::new();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&catalog()), vec![0, 1, 2]);

        let mut blank = QuickFilter::new();
        blank.set_text("   ");
        assert!(!blank.is_active());
        assert_eq!(blank.apply(&catalog()), vec![0, 1, 2]);
    }

    #[test]
    fn filter_is_case_insensitive_across_title_and_description() {
        let mut filter = QuickFilter::new();

        filter.set_text("FLORAL");
        assert_eq!(filter.apply(&catalog()), vec![0]);

        filter.set_text("forest");
        assert_eq!(filter.apply(&catalog()), vec![1]);
    }

    #[test]
    fn every_token_must_match() {
        let mut filter = QuickFilter::new();

        filter.set_text("morning ellinia");
        assert_eq!(filter.apply(&catalog()), vec![1]);

        filter.set_text("morning perion");
        assert!(filter.apply(&catalog()).is_empty());
    }

    #[test]
    fn non_searchable_columns_are_ignored() {
        let mut filter = QuickFilter::new();

        filter.set_text("Bgm00");
        assert!(filter.apply(&catalog()).is_empty());

        filter.set_text("2003");
        assert!(filter.apply(&catalog()).is_empty());

        filter.set_text("GMS");
        assert!(filter.apply(&catalog()).is_empty());
    }

    #[test]
    fn pool_contains_only_visible_playable_tracks() {
        let tracks = catalog();

        let pool = shuffle_pool(&tracks, &[0, 1, 2]);
        let names: Vec<&str> = pool.iter().map(|t| t.filename.as_str()).collect();
        assert_eq!(names, vec!["FloralLife", "Nightmare"]);

        assert!(shuffle_pool(&tracks, &[1]).is_empty());
    }
}
