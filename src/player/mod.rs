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

//! Media playback control and state management.
//!
//! This module provides the high-level [`AudioPlayer`] interface used by the
//! UI to control playback of catalog videos. It manages a background worker
//! thread that interfaces with MPV, which resolves the video URLs itself, so
//! that loading and decoding never block the main application thread.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

pub(crate) use commands::AudioPlayerCommand;

use crate::events::AppEvent;

/// Represents the current playback status of the media engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Options applied when the MPV context is created.
#[derive(Clone, Debug)]
pub(crate) struct PlayerOptions {
    /// Open a video window; when false only the audio track is played.
    pub(crate) video_output: bool,
}

/// A handle to the playback engine.
///
/// This struct acts as a command proxy; it does not perform any media
/// processing itself but instead sends instructions to a background worker
/// thread.
pub(crate) struct AudioPlayer {
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the player worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `options` - MPV options fixed for the lifetime of the worker.
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(options: PlayerOptions, event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(options, command_rx, event_tx);

        Ok(Self { command_tx })
    }

    /// A player handle without a worker, its commands go to `command_tx`.
    #[cfg(test)]
    pub(crate) fn from_sender(command_tx: mpsc::Sender<AudioPlayerCommand>) -> Self {
        Self { command_tx }
    }

    // Maps internal backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Instructs the worker to load and play the media at `url`, replacing
    /// whatever is currently loaded.
    pub(crate) fn play_url(&self, url: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::PlayUrl(url.to_string()))?;
        Ok(())
    }

    /// Plays the media at `url` again from the beginning.
    pub(crate) fn restart(&self, url: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::Restart(url.to_string()))?;
        Ok(())
    }

    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::TogglePause)?;
        Ok(())
    }

    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Stop)?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::ToggleMute)?;
        Ok(())
    }

    /// Seeks forward or backwards, in seconds, relative to the current
    /// position.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Seek(delta))?;
        Ok(())
    }
}
