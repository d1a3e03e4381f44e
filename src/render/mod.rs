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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event to provide a reactive user interface.

mod commander;
mod header;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
};

use crate::{
    App, MainView,
    components::AboutView,
    render::{commander::draw_commander, header::draw_header, player::draw_player},
    theme::Theme,
};

const BUILD_HASH: &str = match option_env!("MAPLEBGM_BUILD_HASH") {
    Some(hash) => hash,
    None => "Dev",
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the navigation header, the active
/// view, the player panel, the command line and the build footer.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like table scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    match app.main_view {
        MainView::Home => draw_home(f, outer[1], app),
        MainView::Stats => app.stats_view.draw(f, outer[1], &app.theme),
        MainView::About => AboutView.draw(f, outer[1], &app.theme),
    }

    draw_player(f, outer[2], app);
    draw_commander(f, outer[3], app);
    draw_footer(f, outer[4], &app.theme);
}

fn draw_home(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .horizontal_margin(1)
        .split(area);

    app.filter_input
        .as_widget(app.shuffle_pool.len())
        .draw(f, chunks[0], &app.theme);

    let tracks = app.catalog.tracks();
    app.track_grid
        .as_widget(&tracks, app.playback.now_playing())
        .draw(f, chunks[2], &app.theme);
}

fn draw_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(
        Paragraph::new(format!("Build: {}", BUILD_HASH))
            .right_aligned()
            .style(Style::default().fg(theme.disabled_colour)),
        area,
    );
}
