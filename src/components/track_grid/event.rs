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

//! Input handling and event processing for the track grid.
//!
//! This module maps raw terminal keyboard events to grid navigation, sorting,
//! and the activation of the row under the cursor.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::track_grid::{TrackGridAction, TrackGridState},
    model::TrackRecord,
};

impl TrackGridState {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        tracks: &[TrackRecord],
    ) -> Option<TrackGridAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(),

            (KeyCode::Char('H'), _) => self.goto_high(),
            (KeyCode::Char('M'), _) => self.goto_middle(),
            (KeyCode::Char('L'), _) => self.goto_low(),

            (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.goto_page_forward()
            }
            (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.goto_page_back()
            }
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => self.goto_half_page_forward(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.goto_half_page_back(),

            (KeyCode::Char('o'), _) => self.cycle_sort(tracks),
            (KeyCode::Char('O'), _) => self.toggle_sort_direction(tracks),

            // Rows without a video cannot be played.
            (KeyCode::Enter, _) => {
                return self
                    .selected_track()
                    .filter(|&i| tracks.get(i).is_some_and(TrackRecord::is_playable))
                    .map(TrackGridAction::Activate);
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::model::{filter::QuickFilter, fixtures::track, sort::{SortColumn, SortDirection}};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_activates_playable_rows_only() {
        let tracks = vec![track("a", "Alpha", "vid-a"), track("b", "Beta", "")];
        let mut grid = TrackGridState::new();
        grid.refresh(&tracks, &QuickFilter::new());
        grid.process_event(&key(KeyCode::Char('o')), &tracks);
        assert_eq!(grid.sort().column, SortColumn::Client);
        grid.process_event(&key(KeyCode::Char('o')), &tracks);
        assert_eq!(grid.sort().column, SortColumn::Title);
        grid.process_event(&key(KeyCode::Char('O')), &tracks);
        assert_eq!(grid.sort().direction, SortDirection::Ascending);

        grid.process_event(&key(KeyCode::Char('g')), &tracks);
        let first = grid.selected_track();
        let action = grid.process_event(&key(KeyCode::Enter), &tracks);
        assert_eq!(first, Some(0));
        assert_eq!(action, Some(TrackGridAction::Activate(0)));

        grid.process_event(&key(KeyCode::Char('j')), &tracks);
        assert_eq!(grid.process_event(&key(KeyCode::Enter), &tracks), None);
    }
}
