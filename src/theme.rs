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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette. The palette follows
//! the pink and orange of the game's own interface.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) filtered_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) disabled_colour: Color,

    pub(crate) table_mark_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_link_fg: Color,
    pub(crate) table_description_fg: Color,
    pub(crate) table_folder_fg: Color,
    pub(crate) table_date_fg: Color,
    pub(crate) table_client_fg: Color,

    pub(crate) chart_bar_colour: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(33, 24, 38),
            accent_colour: Color::Rgb(255, 153, 51),
            filtered_colour: Color::Rgb(255, 193, 7),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(52, 58, 64),
            commander_colour: Color::Rgb(255, 255, 255),
            disabled_colour: Color::Rgb(108, 117, 125),

            table_mark_fg: Color::Rgb(162, 161, 166),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_link_fg: Color::Rgb(240, 128, 170),
            table_description_fg: Color::Rgb(179, 157, 219),
            table_folder_fg: Color::Rgb(162, 161, 166),
            table_date_fg: Color::Rgb(162, 161, 166),
            table_client_fg: Color::Rgb(255, 215, 0),

            chart_bar_colour: Color::Rgb(240, 128, 170),
        }
    }
}
