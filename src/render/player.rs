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

//! Render the music player interface.
//!
//! This module renders the visual representation of the current song, the
//! playlist controls, the progress bars and so on.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    model::playback::PlaybackState,
    player::PlayerState,
    render::icons::{ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_REPEAT_ONE, ICON_SHUFFLE, ICON_STOP},
    theme::Theme,
    util,
};

const WELCOME: &str = "Welcome to the MapleStory Music database. This site provides a complete \
    listing of the background music (BGM) used in MapleStory. Collectively, the songs are also \
    known as MapleStory's original soundtrack (OST).";

/// Renders the main player widget including song info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    if matches!(app.playback, PlaybackState::Idle) {
        f.render_widget(
            Paragraph::new(WELCOME)
                .fg(app.theme.disabled_colour)
                .wrap(Wrap { trim: true }),
            inner_area,
        );
        return;
    }

    draw_now_playing(f, chunks[0], app);
    draw_playlist_controls(f, chunks[2], app);

    let position = app.player_position.unwrap_or(0.0).clamp(0.0, 1.0);

    let position_gauge = Gauge::default()
        .gauge_style(Style::default()
            .fg(app.theme.accent_colour)
            .bg(app.theme.gauge_track_colour)
        )
        .ratio(position)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}

fn draw_now_playing(f: &mut Frame, area: Rect, app: &App) {
    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(30),
        ])
        .split(area);

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    // Catalog details when the song is known, otherwise whatever MPV reports.
    let track = app
        .playback
        .current_track()
        .or_else(|| app.playback.now_playing().and_then(|id| app.catalog.find_by_video(id)));

    let mut spans = vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
    ];
    match track {
        Some(track) => {
            spans.push(Span::styled(track.metadata.title.clone(), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour));
            if !track.metadata.subtitle.is_empty() {
                spans.push(Span::raw(format!(" ({})", track.metadata.subtitle)));
            }
            if !track.description.is_empty() {
                spans.push(Span::raw(" from "));
                spans.push(Span::styled(track.description.clone(), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.table_description_fg));
            }
            let artist = if track.metadata.artist.is_empty() {
                &track.metadata.album_artist
            } else {
                &track.metadata.artist
            };
            if !artist.is_empty() {
                spans.push(Span::raw(" by "));
                spans.push(Span::styled(artist.clone(), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour));
            }
        }
        None => {
            let title = app.player_track_name.clone().unwrap_or_default();
            spans.push(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), info_chunks[0]);

    let duration = app.player_duration.unwrap_or(0);
    let time = app.player_time.unwrap_or(0);
    let remaining = duration.saturating_sub(time);

    let time_line = Line::from(vec![
        Span::styled(util::format::format_time(time), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(util::format::format_time(duration), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(" (-", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(util::format::format_time(remaining), Style::default().add_modifier(Modifier::BOLD)).fg(app.theme.accent_colour),
        Span::styled(")", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
    ]);

    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);
}

fn draw_playlist_controls(f: &mut Frame, area: Rect, app: &App) {
    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(26),
        ])
        .split(area);

    let controls = match app.playback.position() {
        Some((current, total)) => Line::from(vec![
            Span::styled(format!("{} ", ICON_SHUFFLE), Style::default().fg(app.theme.accent_colour)),
            control_span(&format!("{} prev (p)", ICON_PREV), app.playback.can_previous(), &app.theme),
            Span::styled(
                format!("  {}  ", util::format::format_position(current, total)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            control_span(&format!("next (n) {}", ICON_NEXT), app.playback.can_next(), &app.theme),
        ]),
        None => Line::from(vec![
            Span::styled(format!("{} ", ICON_REPEAT_ONE), Style::default().fg(app.theme.accent_colour)),
            Span::raw("Playing on repeat"),
        ]),
    };
    f.render_widget(Paragraph::new(controls), control_chunks[0]);

    let volume = app.volume.unwrap_or(0);
    let vol_ratio = (volume as f64 / 130.0).clamp(0.0, 1.0);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(control_chunks[1]);

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(app.theme.accent_colour).bg(app.theme.gauge_track_colour))
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[0]);

    let volume_label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[1]);
}

// Controls at the ends of the playlist are shown disabled.
fn control_span(label: &str, enabled: bool, theme: &Theme) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled_colour)
    };
    Span::styled(label.to_string(), style)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::analytics::NoopReporter;

    fn rendered_lines(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 7)).unwrap();
        terminal.draw(|f| draw_player(f, f.area(), app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn idle_player_shows_the_welcome() {
        let (app, _) = App::detached(Box::new(NoopReporter));

        let lines = rendered_lines(&app);

        assert!(lines[1].contains("Welcome to the MapleStory Music database."));
        assert!(lines.iter().any(|l| l.contains("original soundtrack (OST).")));
    }
}
