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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application event when typing is finished and a command is submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    MainView,
    events::{AppEvent, AppEventProcessor},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }
}

impl AppEventProcessor for Commander {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                match parse_command(&buffer) {
                    Some(app_event) => event_tx.send(app_event)?,
                    None if buffer.is_empty() => {}
                    None => log::debug!("Ignoring unknown command '{}'", buffer),
                }
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Translates a submitted command line into the application event it names.
fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] => Some(AppEvent::ExitApplication),

        ["home"] => Some(AppEvent::SetMainView(MainView::Home)),
        ["stats"] => Some(AppEvent::SetMainView(MainView::Stats)),
        ["about"] => Some(AppEvent::SetMainView(MainView::About)),

        ["shuffle"] => Some(AppEvent::Shuffle),
        ["next"] => Some(AppEvent::PlaylistNext),
        ["prev"] => Some(AppEvent::PlaylistPrevious),

        ["filter", text @ ..] if !text.is_empty() => {
            Some(AppEvent::FilterTextChanged(text.join(" ")))
        }
        ["clear"] => Some(AppEvent::FilterTextChanged(String::new())),

        ["year", year] => year.parse().ok().map(AppEvent::SelectYear),

        _ => None,
    }
}
