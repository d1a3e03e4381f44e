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

//! Static information page.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::{render::Render, theme::Theme};

const KEY_BINDINGS: [(&str, &str); 12] = [
    ("1 2 3", "Home, Stats and About pages"),
    ("/", "Focus the quick filter, Enter or Esc to leave it"),
    ("x", "Start a shuffled playlist of the filtered songs"),
    ("n p", "Next and previous playlist song"),
    ("Enter", "Play the highlighted song on repeat"),
    ("o O", "Cycle the sort column, flip the sort direction"),
    ("j k g G", "Move through the song grid"),
    ("space s", "Pause and stop"),
    (", . < >", "Seek backwards and forwards"),
    ("- = _ +", "Volume down and up"),
    ("m", "Mute"),
    (":", "Command line, q to quit"),
];

pub(crate) struct AboutView;

impl Render for AboutView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let heading = Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("MapleStory Music", heading)),
            Line::from(""),
            Line::from(
                "Background music from every MapleStory client, collected by the \
                 maplestory-music project. Songs with a video can be played here, \
                 one at a time on repeat or as a shuffled playlist.",
            ),
            Line::from(""),
            Line::from(Span::styled("Keys", heading)),
        ];

        lines.extend(KEY_BINDINGS.iter().map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{:>10}  ", keys), Style::default().fg(theme.table_client_fg)),
                Span::raw(*description),
            ])
        }));

        let about = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::uniform(1)));

        f.render_widget(about, area);
    }
}
