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

//! Grid row ordering.

use std::cmp::Ordering;

use crate::model::TrackRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortColumn {
    Title,
    Description,
    Folder,
    Date,
    Client,
}

impl SortColumn {
    pub(crate) fn next(self) -> Self {
        match self {
            SortColumn::Title => SortColumn::Description,
            SortColumn::Description => SortColumn::Folder,
            SortColumn::Folder => SortColumn::Date,
            SortColumn::Date => SortColumn::Client,
            SortColumn::Client => SortColumn::Title,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SortColumn::Title => "Title",
            SortColumn::Description => "Description",
            SortColumn::Folder => "Folder",
            SortColumn::Date => "Date",
            SortColumn::Client => "Client",
        }
    }

    fn key(self, track: &TrackRecord) -> &str {
        match self {
            SortColumn::Title => &track.metadata.title,
            SortColumn::Description => &track.description,
            SortColumn::Folder => &track.source.structure,
            SortColumn::Date => &track.source.date,
            SortColumn::Client => track.client_version(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridSort {
    pub(crate) column: SortColumn,
    pub(crate) direction: SortDirection,
}

impl Default for GridSort {
    // Newest songs first.
    fn default() -> Self {
        Self {
            column: SortColumn::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl GridSort {
    pub(crate) fn cycle_column(&mut self) {
        self.column = self.column.next();
    }

    pub(crate) fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
    }

    /// Sorts row indices in place. Ties keep catalog order in both
    /// directions.
    pub(crate) fn sort_rows(&self, tracks: &[TrackRecord], rows: &mut [usize]) {
        rows.sort_by(|&a, &b| {
            let (Some(a), Some(b)) = (tracks.get(a), tracks.get(b)) else {
                return Ordering::Equal;
            };
            let ordering = self.column.key(a).cmp(self.column.key(b));
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{dated, track};

    #[test]
    fn default_sort_is_newest_first() {
        let tracks = vec![
            dated("a", "2003", "2003-04-29"),
            dated("b", "2019", "2019-07-10"),
            dated("c", "2008", "2008-01-15"),
        ];
        let mut rows = vec![0, 1, 2];

        GridSort::default().sort_rows(&tracks, &mut rows);

        assert_eq!(rows, vec![1, 2, 0]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let tracks = vec![
            dated("a", "2003", "2003-04-29"),
            dated("b", "2003", "2003-04-29"),
            dated("c", "2003", "2003-04-29"),
        ];

        let mut rows = vec![0, 1, 2];
        GridSort::default().sort_rows(&tracks, &mut rows);
        assert_eq!(rows, vec![0, 1, 2]);

        let mut sort = GridSort::default();
        sort.toggle_direction();
        let mut rows = vec![0, 1, 2];
        sort.sort_rows(&tracks, &mut rows);
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn cycling_columns_sorts_by_title() {
        let tracks = vec![track("1", "Raindrop Flower", ""), track("2", "Floral Life", "")];
        let mut sort = GridSort::default();
        while sort.column != SortColumn::Title {
            sort.cycle_column();
        }
        sort.toggle_direction();

        let mut rows = vec![0, 1];
        sort.sort_rows(&tracks, &mut rows);

        assert_eq!(sort.direction, SortDirection::Ascending);
        assert_eq!(rows, vec![1, 0]);
    }
}
