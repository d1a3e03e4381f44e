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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    analytics::{ACTION_START_PLAYLIST, ACTION_START_PLAYLIST_FILTERED},
    components::filter::FilterBar,
    render::{Render, icons::ICON_SHUFFLE},
    theme::Theme,
};

const PROMPT: &str = "Filter: ";

impl Render for FilterBar<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let filtered = !self.filter.value().trim().is_empty();
        let label = if filtered {
            ACTION_START_PLAYLIST_FILTERED
        } else {
            ACTION_START_PLAYLIST
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(label.len() as u16 + 8),
            ])
            .split(area);

        let input_style = if self.filter.focused() {
            Style::default().fg(theme.commander_colour).bg(theme.gauge_track_colour)
        } else {
            Style::default().fg(theme.commander_colour)
        };

        let line = Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(theme.accent_colour)),
            Span::styled(self.filter.value(), input_style),
        ]);
        f.render_widget(Paragraph::new(line), chunks[0]);

        if self.filter.focused() {
            let cursor_x = chunks[0].x + (PROMPT.len() + self.filter.input.visual_cursor()) as u16;
            f.set_cursor_position((cursor_x.min(chunks[0].right().saturating_sub(1)), chunks[0].y));
        }

        let button_style = if self.pool_size == 0 {
            Style::default().fg(theme.disabled_colour)
        } else if filtered {
            Style::default().fg(theme.filtered_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        };

        let button = Line::from(vec![
            Span::styled(format!("{} ", ICON_SHUFFLE), button_style),
            Span::styled(label, button_style),
            Span::raw(" (x)"),
        ])
        .right_aligned();
        f.render_widget(Paragraph::new(button), chunks[1]);
    }
}
