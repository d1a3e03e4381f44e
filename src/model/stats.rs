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

//! Catalog statistics for the chart views.

use std::collections::BTreeMap;

use crate::model::TrackRecord;

pub(crate) const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of songs released in each month of `year`.
///
/// A record counts when its metadata year equals `year` and its source date
/// can be parsed; the bucket is the month of the source date.
pub(crate) fn monthly_frequency(tracks: &[TrackRecord], year: i32) -> [u64; 12] {
    let year = year.to_string();

    tracks
        .iter()
        .filter(|t| t.metadata.year == year)
        .filter_map(TrackRecord::release_month)
        .fold([0; 12], |mut buckets, month| {
            buckets[month as usize] += 1;
            buckets
        })
}

/// Number of songs per metadata year, oldest first.
pub(crate) fn yearly_frequency(tracks: &[TrackRecord]) -> Vec<(i32, u64)> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for year in tracks.iter().filter_map(TrackRecord::year) {
        *counts.entry(year).or_default() += 1;
    }
    counts.into_iter().collect()
}

pub(crate) fn available_years(tracks: &[TrackRecord]) -> Vec<i32> {
    yearly_frequency(tracks).into_iter().map(|(year, _)| year).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::dated;

    fn catalog() -> Vec<TrackRecord> {
        vec![
            dated("a", "2019", "2019-01-10"),
            dated("b", "2019", "2019-01-24"),
            dated("c", "2019", "2019-11-20"),
            dated("d", "2019", ""),
            dated("e", "2018", "2018-01-10"),
            dated("f", "unknown", "2018-05-10"),
        ]
    }

    #[test]
    fn monthly_frequency_buckets_by_month() {
        let buckets = monthly_frequency(&catalog(), 2019);

        assert_eq!(buckets[0], 2);
        assert_eq!(buckets[10], 1);
        assert_eq!(buckets.iter().sum::<u64>(), 3);
    }

    #[test]
    fn monthly_frequency_of_missing_year_is_empty() {
        assert_eq!(monthly_frequency(&catalog(), 2005), [0; 12]);
    }

    #[test]
    fn yearly_frequency_skips_non_numeric_years() {
        assert_eq!(yearly_frequency(&catalog()), vec![(2018, 1), (2019, 4)]);
        assert_eq!(available_years(&catalog()), vec![2018, 2019]);
    }
}
