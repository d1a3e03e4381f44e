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

//! Render the command line.
//!
//! While a command is being typed the line shows the `:` prompt, the text and
//! the cursor; otherwise it shows a short hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::App;

const HINT: &str = ":home :stats :about :shuffle :next :prev :filter <text> :clear :year <n> :q";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let block = Block::default()
        .style(Style::default().bg(app.theme.gauge_track_colour))
        .padding(Padding::horizontal(1));
    let line_area = block.inner(area);
    f.render_widget(block, area);

    let line = if commander.active() {
        Line::from(vec![
            Span::styled(":", Style::default().fg(app.theme.accent_colour)),
            Span::styled(commander.input.value(), Style::default().fg(app.theme.commander_colour)),
        ])
    } else {
        Line::from(Span::styled(HINT, Style::default().fg(app.theme.disabled_colour)))
    };
    f.render_widget(Paragraph::new(line), line_area);

    if commander.active() {
        // One column for the prompt.
        let cursor_x = line_area.x + 1 + commander.input.visual_cursor() as u16;
        f.set_cursor_position((cursor_x.min(line_area.right().saturating_sub(1)), line_area.y));
    }
}
