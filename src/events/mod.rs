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

//! Application events and the main event loop.
//!
//! Every state change in the application is driven by an [`AppEvent`]
//! received on a single channel. Helper threads (key input, ticks, the task
//! worker, the MPV worker) only ever send events; the UI thread owns all of
//! the state and processes events serially, redrawing after each one.
//!
//! # Organization
//!
//! * [`handlers`]: One function per event, applying it to the [`App`].
//! * [`key_handlers`]: Routes key presses through the focused component and
//!   then the global key bindings.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, MainView, model::TrackRecord, player::PlayerState, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),

    CatalogLoading,
    CatalogLoaded(Vec<TrackRecord>),
    CatalogFailed,

    FilterTextChanged(String),

    SelectSong(String),
    Shuffle,
    PlaylistNext,
    PlaylistPrevious,

    SelectYear(i32),

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    TrackFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// A component that consumes terminal events.
pub(crate) trait AppEventProcessor {
    /// Returns `true` when the event was consumed and must not be offered to
    /// anything else.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on an [`AppEvent::FatalError`], or if an event cannot be
/// applied or the terminal cannot be drawn.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => {
                log::error!("{}", message);
                return Err(anyhow!(message));
            }

            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::SetMainView(view) => handle_set_main_view(app, view),
            AppEvent::CatalogLoading => handle_catalog_loading(app),
            AppEvent::CatalogLoaded(tracks) => handle_catalog_loaded(app, tracks),
            AppEvent::CatalogFailed => handle_catalog_failed(app),
            AppEvent::FilterTextChanged(text) => handle_filter_text_changed(app, &text),
            AppEvent::SelectSong(video_id) => handle_select_song(app, &video_id)?,
            AppEvent::Shuffle => handle_shuffle(app)?,
            AppEvent::PlaylistNext => handle_playlist_next(app)?,
            AppEvent::PlaylistPrevious => handle_playlist_previous(app)?,
            AppEvent::SelectYear(year) => handle_select_year(app, year),
            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::TitleChanged(title) => handle_title_changed(app, title),
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
            AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
            AppEvent::TrackFinished => handle_track_finished(app)?,
            AppEvent::Error(message) => log::error!("{}", message),
            AppEvent::Tick => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
