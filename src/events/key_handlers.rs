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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App, MainView,
    components::TrackGridAction,
    events::{AppEvent, AppEventProcessor},
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 20;

/// Maps keyboard input to application actions and playback commands.
///
/// Keys are offered in focus order: the command line first, then the
/// components of the active view, and finally the global key bindings. The
/// first consumer stops the routing. While the filter input has focus the
/// command line cannot be opened, so `:` can be typed into the filter.
///
/// # Errors
///
/// Returns an error if an event or player command cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if !app.filter_input.focused() && app.commander.process_event(&event, &app.event_tx)? {
        return Ok(());
    }

    match app.main_view {
        MainView::Home => {
            if app.filter_input.process_event(&event, &app.event_tx)? {
                return Ok(());
            }

            let tracks = app.catalog.tracks();
            if let Some(TrackGridAction::Activate(index)) =
                app.track_grid.process_event(&event, &tracks)
            {
                if let Some(track) = tracks.get(index) {
                    if let Some(video_id) = track.video_id() {
                        log::debug!("Selected {}", track.filename);
                        app.event_tx.send(AppEvent::SelectSong(video_id.to_string()))?;
                    }
                }
                return Ok(());
            }
        }
        MainView::Stats => {
            if app.stats_view.process_event(&event, &app.event_tx)? {
                return Ok(());
            }
        }
        MainView::About => {}
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('1'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Home))?,
        (KeyCode::Char('2'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::Stats))?,
        (KeyCode::Char('3'), _) => app.event_tx.send(AppEvent::SetMainView(MainView::About))?,

        (KeyCode::Char('/'), _) => {
            app.event_tx.send(AppEvent::SetMainView(MainView::Home))?;
            app.filter_input.focus();
        }

        // Playlist
        (KeyCode::Char('x'), _) => app.event_tx.send(AppEvent::Shuffle)?,
        (KeyCode::Char('n'), _) => app.event_tx.send(AppEvent::PlaylistNext)?,
        (KeyCode::Char('p'), _) => app.event_tx.send(AppEvent::PlaylistPrevious)?,

        (KeyCode::Char(','), _) => app.audio_player.seek(-FINE_SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.audio_player.seek(FINE_SEEK_DELTA)?,
        (KeyCode::Char('<'), _) => app.audio_player.seek(-SEEK_DELTA)?,
        (KeyCode::Char('>'), _) => app.audio_player.seek(SEEK_DELTA)?,
        (KeyCode::Char(' '), _) => app.audio_player.toggle_pause()?,
        (KeyCode::Char('s'), _) => app.audio_player.stop()?,
        (KeyCode::Char('-'), _) => app.audio_player.adjust_volume(-FINE_VOLUME_DELTA)?,
        (KeyCode::Char('='), _) => app.audio_player.adjust_volume(FINE_VOLUME_DELTA)?,
        (KeyCode::Char('_'), _) => app.audio_player.adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('+'), _) => app.audio_player.adjust_volume(VOLUME_DELTA)?,
        (KeyCode::Char('m'), _) => app.audio_player.toggle_mute()?,

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::analytics::NoopReporter;

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn colon_opens_the_command_line() {
        let (mut app, _) = App::detached(Box::new(NoopReporter));

        press(&mut app, KeyCode::Char(':'));

        assert!(app.commander.active());
        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn focused_filter_takes_a_colon() {
        let (mut app, _) = App::detached(Box::new(NoopReporter));
        app.filter_input.focus();

        press(&mut app, KeyCode::Char(':'));

        assert!(!app.commander.active());
        assert_eq!(app.filter_input.value(), ":");
        assert!(matches!(
            app.event_rx.try_recv(),
            Ok(AppEvent::FilterTextChanged(text)) if text == ":"
        ));
    }
}
