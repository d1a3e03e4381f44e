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

//! Interactive track grid widget and state management.
//!
//! This module provides the catalog grid: the filtered, sorted rows of the
//! catalog with a highlighted cursor row. It separates persistent state
//! ([`TrackGridState`]) from the transient widget view ([`TrackGrid`]) that
//! borrows the catalog for drawing.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{TrackRecord, filter::QuickFilter, sort::GridSort};

/// Rows per page, for paging keys and the page summary.
pub(crate) const GRID_PAGE_SIZE: usize = 25;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TrackGridAction {
    /// Play the catalog track at this index.
    Activate(usize),
}

pub(crate) struct TrackGridState {
    rows: Vec<usize>,
    sort: GridSort,
    table_state: TableState,
    viewport_rows: usize,
}

impl TrackGridState {
    pub(crate) fn new() -> Self {
        Self {
            rows: vec![],
            sort: GridSort::default(),
            table_state: TableState::new(),
            viewport_rows: GRID_PAGE_SIZE,
        }
    }

    /// Recomputes the visible rows after the catalog or the filter changed,
    /// moving the cursor back to the first row.
    pub(crate) fn refresh(&mut self, tracks: &[TrackRecord], filter: &QuickFilter) {
        self.rows = filter.apply(tracks);
        self.sort.sort_rows(tracks, &mut self.rows);
        self.table_state = TableState::new();
        self.table_state
            .select((!self.rows.is_empty()).then_some(0));
    }

    /// Catalog indices of the visible rows, in display order.
    pub(crate) fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub(crate) fn sort(&self) -> GridSort {
        self.sort
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Catalog index of the row under the cursor.
    pub(crate) fn selected_track(&self) -> Option<usize> {
        self.table_state
            .selected()
            .and_then(|i| self.rows.get(i))
            .copied()
    }

    pub(crate) fn as_widget<'a>(
        &'a mut self,
        tracks: &'a [TrackRecord],
        now_playing: Option<&'a str>,
    ) -> TrackGrid<'a> {
        TrackGrid {
            tracks,
            now_playing,
            state: self,
        }
    }

    fn cycle_sort(&mut self, tracks: &[TrackRecord]) {
        self.sort.cycle_column();
        self.resort(tracks);
    }

    fn toggle_sort_direction(&mut self, tracks: &[TrackRecord]) {
        self.sort.toggle_direction();
        self.resort(tracks);
    }

    // Re-sorts while keeping the cursor on the same track.
    fn resort(&mut self, tracks: &[TrackRecord]) {
        let current = self.selected_track();
        self.sort.sort_rows(tracks, &mut self.rows);
        if let Some(track) = current {
            let position = self.rows.iter().position(|&r| r == track);
            self.table_state.select(position);
        }
    }

    fn goto_next(&mut self) {
        let len = self.rows.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.rows.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }

    fn goto_offset(&mut self, delta: isize) {
        let len = self.rows.len();
        if len == 0 { return; }
        let current = self.table_state.selected().unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(target));
    }

    fn goto_page_forward(&mut self) {
        self.goto_offset(GRID_PAGE_SIZE as isize);
    }

    fn goto_page_back(&mut self) {
        self.goto_offset(-(GRID_PAGE_SIZE as isize));
    }

    fn goto_half_page_forward(&mut self) {
        self.goto_offset((GRID_PAGE_SIZE / 2) as isize);
    }

    fn goto_half_page_back(&mut self) {
        self.goto_offset(-((GRID_PAGE_SIZE / 2) as isize));
    }

    // The top, middle and bottom rows of what was last drawn.
    fn goto_high(&mut self) {
        self.goto_viewport_row(0);
    }

    fn goto_middle(&mut self) {
        self.goto_viewport_row(self.viewport_rows.saturating_sub(1) / 2);
    }

    fn goto_low(&mut self) {
        self.goto_viewport_row(self.viewport_rows.saturating_sub(1));
    }

    fn goto_viewport_row(&mut self, row: usize) {
        let len = self.rows.len();
        if len == 0 { return; }
        let target = (self.table_state.offset() + row).min(len - 1);
        self.table_state.select(Some(target));
    }
}

pub(crate) struct TrackGrid<'a> {
    tracks: &'a [TrackRecord],
    now_playing: Option<&'a str>,
    state: &'a mut TrackGridState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::track;

    fn catalog() -> Vec<TrackRecord> {
        (0..60)
            .map(|i| {
                let mut t = track(&format!("f{i}"), &format!("Song {i:02}"), "v");
                t.source.date = format!("2010-01-{:02}", 1 + i % 28);
                t
            })
            .collect()
    }

    #[test]
    fn refresh_selects_first_visible_row() {
        let tracks = catalog();
        let mut grid = TrackGridState::new();
        let mut filter = QuickFilter::new();

        grid.refresh(&tracks, &filter);
        assert_eq!(grid.rows().len(), 60);
        assert_eq!(grid.selected(), Some(0));

        filter.set_text("Song 07");
        grid.refresh(&tracks, &filter);
        assert_eq!(grid.rows(), &[7]);
        assert_eq!(grid.selected_track(), Some(7));

        filter.set_text("nothing matches");
        grid.refresh(&tracks, &filter);
        assert!(grid.rows().is_empty());
        assert_eq!(grid.selected(), None);
    }

    #[test]
    fn paging_is_clamped() {
        let tracks = catalog();
        let mut grid = TrackGridState::new();
        grid.refresh(&tracks, &QuickFilter::new());

        grid.goto_page_forward();
        assert_eq!(grid.selected(), Some(25));
        grid.goto_page_forward();
        grid.goto_page_forward();
        assert_eq!(grid.selected(), Some(59));
        grid.goto_page_back();
        assert_eq!(grid.selected(), Some(34));
        grid.goto_half_page_back();
        assert_eq!(grid.selected(), Some(22));
    }

    #[test]
    fn next_and_previous_wrap() {
        let tracks = catalog();
        let mut grid = TrackGridState::new();
        grid.refresh(&tracks, &QuickFilter::new());

        grid.goto_previous();
        assert_eq!(grid.selected(), Some(59));
        grid.goto_next();
        assert_eq!(grid.selected(), Some(0));
    }

    #[test]
    fn resorting_keeps_cursor_on_track() {
        let tracks = catalog();
        let mut grid = TrackGridState::new();
        grid.refresh(&tracks, &QuickFilter::new());
        grid.goto_offset(5);
        let track = grid.selected_track();

        grid.toggle_sort_direction(&tracks);

        assert_eq!(grid.selected_track(), track);
    }
}
