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

//! Bar charts for the statistics view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding},
};

use crate::{components::StatsView, model::stats::MONTH_LABELS, render::Render, theme::Theme};

impl Render for StatsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_monthly(f, chunks[0], theme);
        self.draw_yearly(f, chunks[1], theme);
    }
}

impl StatsView {
    fn chart_block<'a>(title: Line<'a>, theme: &Theme) -> Block<'a> {
        Block::default()
            .title(title)
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1))
    }

    fn draw_monthly(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = match self.selected_year() {
            Some(year) => format!(" Songs released per month in {}  (h/l change year) ", year),
            None => " Songs released per month ".to_string(),
        };

        let bars: Vec<Bar> = MONTH_LABELS
            .iter()
            .zip(self.selected_monthly())
            .map(|(label, count)| Bar::default().label(Line::from(*label)).value(count))
            .collect();

        let chart = BarChart::default()
            .block(Self::chart_block(Line::from(title).style(Style::default().add_modifier(Modifier::BOLD)), theme))
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(theme.chart_bar_colour))
            .value_style(Style::default().fg(theme.background_colour).bg(theme.chart_bar_colour));

        f.render_widget(chart, area);
    }

    fn draw_yearly(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let selected = self.selected_year();

        let bars: Vec<Bar> = self
            .yearly
            .iter()
            .map(|&(year, count)| {
                let style = if Some(year) == selected {
                    Style::default().fg(theme.accent_colour)
                } else {
                    Style::default().fg(theme.chart_bar_colour)
                };
                // Two digit labels keep the bars narrow.
                Bar::default()
                    .label(Line::from(format!("{:02}", year % 100)))
                    .value(count)
                    .style(style)
            })
            .collect();

        let chart = BarChart::default()
            .block(Self::chart_block(
                Line::from(" Songs per year ").style(Style::default().add_modifier(Modifier::BOLD)),
                theme,
            ))
            .data(BarGroup::default().bars(&bars))
            .bar_width(3)
            .bar_gap(1)
            .value_style(Style::default().fg(theme.background_colour).bg(theme.chart_bar_colour));

        f.render_widget(chart, area);
    }
}
