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

//! Quick filter input.
//!
//! A single-line text input above the grid. Every edit is published as an
//! [`AppEvent::FilterTextChanged`](crate::events::AppEvent), so the grid and
//! the shuffle pool follow the text as it is typed.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct FilterInput {
    input: Input,
    focused: bool,
}

impl FilterInput {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            focused: false,
        }
    }

    pub(crate) fn focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Replaces the text, used when the filter is changed from the command
    /// line.
    pub(crate) fn set_value(&mut self, text: &str) {
        if self.input.value() != text {
            self.input = Input::new(text.to_string());
        }
    }

    pub(crate) fn as_widget(&self, pool_size: usize) -> FilterBar<'_> {
        FilterBar {
            filter: self,
            pool_size,
        }
    }
}

/// The filter input together with the shuffle button it labels.
pub(crate) struct FilterBar<'a> {
    filter: &'a FilterInput,
    pool_size: usize,
}
