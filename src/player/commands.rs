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

//! MPV-backed playback worker and event processing.
//!
//! The worker owns the `libmpv` context. Catalog entries are remote videos,
//! so MPV is configured to resolve URLs through its ytdl hook and, unless
//! video output is disabled, to open its own video window.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`AudioPlayerCommand`]s from the UI to
//!    control playback (play, replay, pause, seek and so on).
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s to notify the UI of state
//!    changes, such as progress, volume updates, and the end of a video.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    events::AppEvent,
    player::{AudioPlayer, PlayerOptions, PlayerState},
};

// How long a single poll for MPV events may block, in seconds.
const EVENT_WAIT_SECS: f64 = 0.05;

#[derive(Debug, PartialEq)]
pub(crate) enum AudioPlayerCommand {
    PlayUrl(String),
    /// Loads `url` again from the start. MPV unloads a file once it reaches
    /// the end, so there is nothing left to seek in.
    Restart(String),
    TogglePause,
    Seek(i32),
    Stop,
    AdjustVolume(i32),
    ToggleMute,
}

/// Spawns the player worker thread to process playback commands.
///
/// If the worker returns an error, it is caught here and broadcast as a fatal
/// application event.
pub(crate) fn spawn_player_worker(
    options: PlayerOptions,
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = player_worker(&options, command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:#}", e)));
        }
    });
}

fn build_handler(options: &PlayerOptions) -> Result<mpv::MpvHandler> {
    let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;

    builder
        .set_option("ytdl", "yes")
        .context("Failed to enable ytdl")?;
    if !options.video_output {
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
    }

    builder.build().context("Failed to build MPV handler")
}

/// The primary execution loop for the playback backend.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the internal
/// command/event loops encounter an unrecoverable failure.
fn player_worker(
    options: &PlayerOptions,
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = build_handler(options)?;

    handler
        .observe_property::<&str>("media-title", 0)
        .context("Failed to observe media-title")?;
    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<f64>("volume", 0)
        .context("Failed to observe volume")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    let mut flags = PlayerFlags {
        is_paused: false,
        is_idle: true,
        state: PlayerState::Stopped,
    };

    loop {
        // A closed command channel means the application has gone away.
        if !process_commands(&mut handler, &command_rx)? {
            return Ok(());
        }
        process_mpv_events(&mut handler, &mut flags, &event_tx)?;
    }
}

struct PlayerFlags {
    is_paused: bool,
    is_idle: bool,
    state: PlayerState,
}

/// Drains and executes all pending commands from the application channel.
///
/// A command MPV rejects, such as seeking while nothing is loaded, is logged
/// and skipped.
///
/// Returns `false` once the command channel has been closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<AudioPlayerCommand>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(mpsc::TryRecvError::Empty) => return Ok(true),
            Err(mpsc::TryRecvError::Disconnected) => return Ok(false),
        };

        if let Err(e) = run_command(handler, &command) {
            log::warn!("MPV rejected {:?}: {:#}", command, e);
        }
    }
}

fn run_command(handler: &mut mpv::MpvHandler, command: &AudioPlayerCommand) -> Result<()> {
    match command {
        AudioPlayerCommand::PlayUrl(url) | AudioPlayerCommand::Restart(url) => {
            handler
                .command(&["loadfile", url, "replace"])
                .with_context(|| format!("Failed to load url: {}", url))?;
            handler.set_property("pause", false)?;
        }
        AudioPlayerCommand::TogglePause => {
            handler.command(&["cycle", "pause"])?;
        }
        AudioPlayerCommand::Seek(delta) => {
            handler.command(&["seek", &delta.to_string(), "relative"])?;
        }
        AudioPlayerCommand::Stop => {
            handler.command(&["stop"])?;
        }
        AudioPlayerCommand::AdjustVolume(delta) => {
            handler.command(&["add", "volume", &delta.to_string()])?;
        }
        AudioPlayerCommand::ToggleMute => {
            handler.command(&["cycle", "mute"])?;
        }
    }

    Ok(())
}

/// Polls for MPV events and synchronizes the application state.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    flags: &mut PlayerFlags,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(EVENT_WAIT_SECS) else {
        return Ok(());
    };

    let app_event = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("media-title", Format::Str(title)) => Some(AppEvent::TitleChanged(title.to_string())),
            ("duration", Format::Double(duration)) => {
                Some(AppEvent::DurationChanged(duration as u64))
            }
            ("pause", Format::Flag(pause)) => {
                flags.is_paused = pause;
                None
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                Some(AppEvent::TimeChanged(seconds))
            }
            ("volume", Format::Double(volume)) => {
                Some(AppEvent::VolumeChanged(volume.round() as u32))
            }
            ("idle-active", Format::Flag(idle_active)) => {
                flags.is_idle = idle_active;
                None
            }
            _ => None,
        },
        mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
            Some(AppEvent::TrackFinished)
        }
        _ => None,
    };

    let new_state = AudioPlayer::player_state(flags.is_paused, flags.is_idle);
    if new_state != flags.state {
        flags.state = new_state;
        event_tx
            .send(AppEvent::PlayerStateChanged(new_state))
            .context("Failed to send player state event")?;
    }

    if let Some(event) = app_event {
        event_tx.send(event).context("Failed to send event")?;
    }

    Ok(())
}
