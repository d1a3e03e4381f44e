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

//! # MapleStory Music TUI.
//!
//! A terminal browser and player for the MapleStory background music
//! catalog.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** download the catalog, play videos through MPV
//!   and post analytics, each on its own thread.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod analytics;
mod commander;
mod components;
mod config;
mod error;
mod events;
mod model;
mod player;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    analytics::Reporter,
    commander::Commander,
    components::{FilterInput, StatsView, TrackGridState},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{TrackRecord, catalog::Catalog, filter::QuickFilter, playback::PlaybackState},
    player::{AudioPlayer, PlayerOptions, PlayerState},
    tasks::AppTask,
    theme::Theme,
    util::term::BackgroundGuard,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Home,
    Stats,
    About,
}

impl MainView {
    /// The page path reported to analytics.
    pub(crate) fn path(self) -> &'static str {
        match self {
            MainView::Home => "/",
            MainView::Stats => "/stats",
            MainView::About => "/about",
        }
    }
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub audio_player: AudioPlayer,
    pub reporter: Box<dyn Reporter>,

    pub catalog: Catalog,
    pub filter: QuickFilter,
    pub shuffle_pool: Vec<TrackRecord>,
    pub playback: PlaybackState,

    pub filter_input: FilterInput,
    pub track_grid: TrackGridState,
    pub stats_view: StatsView,
    pub commander: Commander,

    pub player_state: PlayerState,
    pub player_track_name: Option<String>,
    pub player_duration: Option<u64>,
    pub player_time: Option<u64>,
    pub player_position: Option<f64>,
    pub volume: Option<u32>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player_event_tx = event_tx.clone();
        let player_options = PlayerOptions {
            video_output: config.video_output,
        };

        let reporter = analytics::reporter_for(&config);
        let audio_player = AudioPlayer::new(player_options, audio_player_event_tx)?;

        Ok(Self::assemble(
            config,
            (event_tx, event_rx),
            task_tx,
            audio_player,
            reporter,
        ))
    }

    /// Application state with no player worker or task worker behind it.
    ///
    /// Player commands arrive on the returned receiver.
    #[cfg(test)]
    pub fn detached(reporter: Box<dyn Reporter>) -> (Self, Receiver<player::AudioPlayerCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let (task_tx, _) = mpsc::channel();

        let app = Self::assemble(
            AppConfig::default(),
            mpsc::channel(),
            task_tx,
            AudioPlayer::from_sender(command_tx),
            reporter,
        );

        (app, command_rx)
    }

    fn assemble(
        config: AppConfig,
        (event_tx, event_rx): (Sender<AppEvent>, Receiver<AppEvent>),
        task_tx: Sender<AppTask>,
        audio_player: AudioPlayer,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Home,
            event_tx,
            event_rx,
            task_tx,
            audio_player,
            reporter,
            catalog: Catalog::new(),
            filter: QuickFilter::new(),
            shuffle_pool: vec![],
            playback: PlaybackState::Idle,
            filter_input: FilterInput::new(),
            track_grid: TrackGridState::new(),
            stats_view: StatsView::new(),
            commander: Commander::new(),
            player_state: PlayerState::Stopped,
            player_track_name: None,
            player_duration: None,
            player_time: None,
            player_position: None,
            volume: None,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    util::logging::init_logging(&config.log_file)?;
    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initalise application")?;

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    let _background = BackgroundGuard::paint(app.theme.background_colour)
        .context("Failed to set terminal background")?;

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        log::error!("Application error: {:#}", e);
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is best-effort and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it requests the catalog, reports the initial
/// page view and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(app.config.clone(), task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.task_tx
        .send(AppTask::LoadCatalog)
        .context("Failed to request the catalog")?;

    app.reporter.page_view(app.main_view.path());

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
