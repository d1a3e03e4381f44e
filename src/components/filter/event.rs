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

//! Event routing for the quick filter input.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::FilterInput,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for FilterInput {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.focused {
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Enter | KeyCode::Esc => self.focused = false,
            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(event);
                if self.input.value() != before {
                    event_tx.send(AppEvent::FilterTextChanged(self.input.value().to_string()))?;
                }
            }
        }

        // A focused input swallows every key.
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let (tx, rx) = mpsc::channel();
        let mut filter = FilterInput::new();

        assert!(!filter.process_event(&key(KeyCode::Char('a')), &tx).unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn typing_publishes_each_change() {
        let (tx, rx) = mpsc::channel();
        let mut filter = FilterInput::new();
        filter.focus();

        assert!(filter.process_event(&key(KeyCode::Char('h')), &tx).unwrap());
        assert!(filter.process_event(&key(KeyCode::Char('i')), &tx).unwrap());

        let texts: Vec<String> = rx
            .try_iter()
            .filter_map(|e| match e {
                AppEvent::FilterTextChanged(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["h", "hi"]);
    }

    #[test]
    fn enter_blurs_without_changing_text() {
        let (tx, rx) = mpsc::channel();
        let mut filter = FilterInput::new();
        filter.set_value("henesys");
        filter.focus();

        assert!(filter.process_event(&key(KeyCode::Enter), &tx).unwrap());
        assert!(!filter.focused());
        assert_eq!(filter.value(), "henesys");
        assert!(rx.try_recv().is_err());
    }
}
