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

//! Self-contained UI components.
//!
//! Each component owns its state, turns key events into state changes or
//! [`AppEvent`](crate::events::AppEvent)s, and knows how to draw itself
//! through [`Render`](crate::render::Render).

mod about;
mod filter;
mod stats;
mod track_grid;

pub(crate) use about::AboutView;
pub(crate) use filter::FilterInput;
pub(crate) use stats::StatsView;
pub(crate) use track_grid::{TrackGridAction, TrackGridState};
