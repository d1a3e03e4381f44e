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

//! UI rendering logic for the track grid.
//!
//! This module handles the visual representation of the catalog rows,
//! including column layout, the sort indicator, paging summary, and theme
//! application using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::track_grid::{GRID_PAGE_SIZE, TrackGrid},
    model::sort::{SortColumn, SortDirection},
    render::{
        Render,
        icons::{ICON_PLAY, ICON_SORT_ASCENDING, ICON_SORT_DESCENDING},
    },
    theme::Theme,
    util::format::format_page,
};

const COLUMNS: [SortColumn; 5] = [
    SortColumn::Title,
    SortColumn::Description,
    SortColumn::Folder,
    SortColumn::Date,
    SortColumn::Client,
];

impl Render for TrackGrid<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.draw_summary(f, chunks[0], theme);
        self.draw_table(f, chunks[1], theme);
    }
}

impl TrackGrid<'_> {
    fn draw_summary(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let sort = self.state.sort;
        let arrow = match sort.direction {
            SortDirection::Ascending => ICON_SORT_ASCENDING,
            SortDirection::Descending => ICON_SORT_DESCENDING,
        };

        let summary = format_page(self.state.selected(), self.state.rows.len(), GRID_PAGE_SIZE);

        let line = Line::from(vec![
            Span::styled(summary, Style::default().fg(theme.accent_colour)),
            Span::raw("  sorted by "),
            Span::styled(
                format!("{} {}", sort.column.label(), arrow),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour));

        f.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let tracks = self.tracks;
        let now_playing = self.now_playing;

        let rows = self.state.rows.iter().filter_map(|&i| tracks.get(i)).map(|item| {
            let playing = item.video_id().is_some_and(|id| Some(id) == now_playing);
            let indicator = if playing {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            // Playable titles read as links.
            let title_fg = if item.is_playable() {
                theme.table_link_fg
            } else {
                theme.table_title_fg
            };

            Row::new(vec![
                Cell::from(indicator),
                Cell::from(Line::from(item.mark.as_str()).style(Style::default().fg(theme.table_mark_fg))),
                Cell::from(Line::from(item.metadata.title.as_str()).style(Style::default().fg(title_fg))),
                Cell::from(Line::from(item.description.as_str()).style(Style::default().fg(theme.table_description_fg))),
                Cell::from(Line::from(item.source.structure.as_str()).style(Style::default().fg(theme.table_folder_fg))),
                Cell::from(Line::from(item.source.date.as_str()).style(Style::default().fg(theme.table_date_fg))),
                Cell::from(Line::from(item.client_version()).style(Style::default().fg(theme.table_client_fg))),
            ])
        });

        let sort = self.state.sort;
        let mut header = vec![Cell::from(""), Cell::from("Mark")];
        header.extend(COLUMNS.iter().map(|&column| {
            if column == sort.column {
                Cell::from(Line::from(column.label()).style(Style::default().add_modifier(Modifier::UNDERLINED)))
            } else {
                Cell::from(column.label())
            }
        }));

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Percentage(15),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(header)
                .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        // Header row plus its margin.
        self.state.viewport_rows = usize::from(area.height.saturating_sub(2)).max(1);

        f.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}
