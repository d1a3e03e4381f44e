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

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// This is used primarily for displaying track positions and total durations
/// in the player interface.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Formats a one-based playlist position as `current | total`, padding the
/// current position with zeros to the width of the total.
pub(crate) fn format_position(current: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{:0width$} | {}", current, total)
}

/// Formats the grid paging summary for the page holding `selected`.
pub(crate) fn format_page(selected: Option<usize>, total: usize, page_size: usize) -> String {
    if total == 0 {
        return "No rows".to_string();
    }

    let page = selected.unwrap_or(0).min(total - 1) / page_size;
    let first = page * page_size + 1;
    let last = ((page + 1) * page_size).min(total);
    format!("Rows {}-{} of {}", first, last, total)
}
