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

//! Catalog statistics view.
//!
//! Holds the per-year song counts and, for every year present in the
//! catalog, the per-month release counts. Frequencies are computed once when
//! the catalog loads so that changing the selected year is free.

mod event;
mod render;

use crate::model::{
    TrackRecord,
    stats::{available_years, monthly_frequency, yearly_frequency},
};

pub(crate) struct StatsView {
    years: Vec<i32>,
    monthly: Vec<[u64; 12]>,
    yearly: Vec<(i32, u64)>,
    selected: usize,
}

impl StatsView {
    pub(crate) fn new() -> Self {
        Self {
            years: vec![],
            monthly: vec![],
            yearly: vec![],
            selected: 0,
        }
    }

    /// Recomputes the frequencies and selects the latest year.
    pub(crate) fn refresh(&mut self, tracks: &[TrackRecord]) {
        self.years = available_years(tracks);
        self.monthly = self
            .years
            .iter()
            .map(|&year| monthly_frequency(tracks, year))
            .collect();
        self.yearly = yearly_frequency(tracks);
        self.selected = self.years.len().saturating_sub(1);
    }

    pub(crate) fn selected_year(&self) -> Option<i32> {
        self.years.get(self.selected).copied()
    }

    /// Selects `year` if the catalog has songs for it.
    pub(crate) fn select_year(&mut self, year: i32) -> bool {
        match self.years.iter().position(|&y| y == year) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub(crate) fn next_year(&mut self) {
        if self.selected + 1 < self.years.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn previous_year(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn selected_monthly(&self) -> [u64; 12] {
        self.monthly.get(self.selected).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::dated;

    fn catalog() -> Vec<TrackRecord> {
        vec![
            dated("a", "2005", "2005-03-01"),
            dated("b", "2008", "2008-07-15"),
            dated("c", "2008", "2008-07-16"),
            dated("d", "2012", "2012-12-24"),
        ]
    }

    #[test]
    fn latest_year_is_selected_after_refresh() {
        let mut stats = StatsView::new();
        assert_eq!(stats.selected_year(), None);

        stats.refresh(&catalog());

        assert_eq!(stats.selected_year(), Some(2012));
        assert_eq!(stats.selected_monthly()[11], 1);
    }

    #[test]
    fn year_selection_is_clamped() {
        let mut stats = StatsView::new();
        stats.refresh(&catalog());

        stats.next_year();
        assert_eq!(stats.selected_year(), Some(2012));

        stats.previous_year();
        assert_eq!(stats.selected_year(), Some(2008));
        assert_eq!(stats.selected_monthly()[6], 2);

        stats.previous_year();
        stats.previous_year();
        assert_eq!(stats.selected_year(), Some(2005));
    }

    #[test]
    fn unknown_years_are_rejected() {
        let mut stats = StatsView::new();
        stats.refresh(&catalog());

        assert!(!stats.select_year(1999));
        assert_eq!(stats.selected_year(), Some(2012));
        assert!(stats.select_year(2005));
        assert_eq!(stats.selected_year(), Some(2005));
    }
}
