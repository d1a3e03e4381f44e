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

//! Render the navigation header.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, MainView, model::catalog::CatalogStatus};

const TABS: [(MainView, &str); 3] = [
    (MainView::Home, "1 Home"),
    (MainView::Stats, "2 Stats"),
    (MainView::About, "3 About"),
];

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .horizontal_margin(1)
        .split(inner);

    let mut spans = vec![Span::styled(
        "MapleStory Music  ",
        Style::default().fg(app.theme.accent_colour).add_modifier(Modifier::BOLD),
    )];
    for (view, label) in TABS {
        let style = if view == app.main_view {
            Style::default().fg(app.theme.background_colour).bg(app.theme.accent_colour)
        } else {
            Style::default().fg(app.theme.table_title_fg)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    // A failed load only shows as an empty grid; the cause is in the log.
    let status = match app.catalog.status {
        CatalogStatus::Idle | CatalogStatus::Failed => String::new(),
        CatalogStatus::Loading => "Loading catalog...".to_string(),
        CatalogStatus::Loaded => format!("{} songs", app.catalog.len()),
    };
    f.render_widget(
        Paragraph::new(status)
            .right_aligned()
            .style(Style::default().fg(app.theme.disabled_colour)),
        chunks[1],
    );
}
