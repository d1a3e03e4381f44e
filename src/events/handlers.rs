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

use crate::{
    App, MainView,
    analytics::{ACTION_COMPLETE_PLAYLIST_VIDEO, ACTION_LOOP_VIDEO, AnalyticsEvent, CATEGORY_VIDEO, Reporter},
    model::{
        TrackRecord,
        filter::shuffle_pool,
        playback::{PlaybackState, PlayerAction, Transition},
    },
    player::PlayerState,
};

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    navigate(&mut app.main_view, main_view, app.reporter.as_ref());
}

/// Switches the main view, reporting a page view unless the view is already
/// showing.
fn navigate(current: &mut MainView, target: MainView, reporter: &dyn Reporter) {
    if *current == target {
        return;
    }
    reporter.page_view(target.path());
    *current = target;
}

pub(super) fn handle_catalog_loading(app: &mut App) {
    app.catalog.begin_load();
}

pub(super) fn handle_catalog_loaded(app: &mut App, tracks: Vec<TrackRecord>) {
    app.catalog.finish_load(tracks);
    app.stats_view.refresh(&app.catalog.tracks());
    refresh_rows(app);
}

pub(super) fn handle_catalog_failed(app: &mut App) {
    app.catalog.fail_load();
}

pub(super) fn handle_filter_text_changed(app: &mut App, text: &str) {
    app.filter.set_text(text);
    app.filter_input.set_value(text);
    refresh_rows(app);
    log::debug!(
        "Filter '{}' matches {} rows",
        app.filter.text(),
        app.track_grid.rows().len()
    );
}

// The grid rows and the shuffle pool always follow the filter.
fn refresh_rows(app: &mut App) {
    let tracks = app.catalog.tracks();
    app.track_grid.refresh(&tracks, &app.filter);
    app.shuffle_pool = shuffle_pool(&tracks, app.track_grid.rows());
}

pub(super) fn handle_select_song(app: &mut App, video_id: &str) -> Result<()> {
    if app.playback.is_playlist() {
        log::info!("Leaving shuffled playlist to play {}", video_id);
    }
    apply_transition(app, |state| state.select_song(video_id))?;

    Ok(())
}

pub(super) fn handle_shuffle(app: &mut App) -> Result<()> {
    let pool = std::mem::take(&mut app.shuffle_pool);
    let started = apply_transition(app, |state| state.shuffle(&pool, &mut rand::rng()));
    app.shuffle_pool = pool;

    if started? {
        let filtered = app.filter.is_active();
        log::info!(
            "Started shuffled playlist of {} songs{}",
            app.playback.session().map_or(0, |s| s.tracks().len()),
            if filtered { " (filtered)" } else { "" }
        );
        app.reporter.event(&AnalyticsEvent::shuffle_started(filtered));
    }

    Ok(())
}

pub(super) fn handle_playlist_next(app: &mut App) -> Result<()> {
    apply_transition(app, PlaybackState::next)?;

    Ok(())
}

pub(super) fn handle_playlist_previous(app: &mut App) -> Result<()> {
    apply_transition(app, PlaybackState::previous)?;

    Ok(())
}

pub(super) fn handle_select_year(app: &mut App, year: i32) {
    if !app.stats_view.select_year(year) {
        log::debug!("No songs released in {}", year);
    }
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_title_changed(app: &mut App, title: String) {
    app.player_track_name = Some(title);
}

pub(super) fn handle_duration_changed(app: &mut App, dur: u64) {
    app.player_duration = Some(dur);
}

pub(super) fn handle_volume_changed(app: &mut App, vol: u32) {
    app.volume = Some(vol);
}

pub(super) fn handle_track_finished(app: &mut App) -> Result<()> {
    app.player_time = app.player_duration;
    report_milestone(app.reporter.as_ref(), &app.playback);
    apply_transition(app, PlaybackState::playback_ended)?;

    Ok(())
}

/// Reports the end of the current video: a loop for a single song, a
/// completion for a playlist song.
fn report_milestone(reporter: &dyn Reporter, state: &PlaybackState) {
    let action = match state {
        PlaybackState::SinglePlay { .. } => ACTION_LOOP_VIDEO,
        PlaybackState::Playlist(_) => ACTION_COMPLETE_PLAYLIST_VIDEO,
        PlaybackState::Idle => return,
    };

    if let Some(video_id) = state.now_playing() {
        reporter.event(&AnalyticsEvent::new(CATEGORY_VIDEO, action, video_id));
    }
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

/// Moves the playback state machine one step and carries out the resulting
/// player action.
///
/// Returns `true` if the player was told to do anything.
fn apply_transition(
    app: &mut App,
    step: impl FnOnce(PlaybackState) -> Transition,
) -> Result<bool> {
    let Transition { state, action } = step(std::mem::take(&mut app.playback));
    app.playback = state;

    match action {
        PlayerAction::None => return Ok(false),
        PlayerAction::Load(video_id) => {
            app.player_track_name = None;
            app.player_duration = None;
            app.player_time = None;
            app.player_position = None;
            app.audio_player.play_url(&app.config.video_url(&video_id))?;
        }
        PlayerAction::Restart => {
            if let Some(video_id) = app.playback.now_playing() {
                app.audio_player.restart(&app.config.video_url(video_id))?;
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::Receiver;

    use crate::{
        analytics::recording::RecordingReporter,
        model::fixtures::track,
        player::AudioPlayerCommand,
    };

    fn app_with_reporter() -> (App, Receiver<AudioPlayerCommand>, RecordingReporter) {
        let reporter = RecordingReporter::default();
        let (app, command_rx) = App::detached(Box::new(reporter.clone()));
        (app, command_rx, reporter)
    }

    fn forest_catalog() -> Vec<TrackRecord> {
        vec![
            track("Ellinia", "Forest of Fairies", "ellinia"),
            track("Henesys", "Floral Life", "henesys"),
            track("SleepyWood", "Sleepy Forest", ""),
            track("Kerning", "Bad Guys", "kerning"),
        ]
    }

    #[test]
    fn filtered_shuffle_plays_from_the_matching_songs() {
        let (mut app, command_rx, reporter) = app_with_reporter();
        handle_catalog_loaded(&mut app, forest_catalog());
        assert_eq!(app.shuffle_pool.len(), 3);

        handle_filter_text_changed(&mut app, "forest");
        let pool: Vec<&str> = app.shuffle_pool.iter().map(|t| t.filename.as_str()).collect();
        assert_eq!(pool, ["Ellinia"]);

        handle_shuffle(&mut app).unwrap();

        assert_eq!(app.shuffle_pool.len(), 1);
        assert_eq!(app.playback.position(), Some((1, 1)));
        assert_eq!(
            *reporter.events.borrow(),
            [AnalyticsEvent::shuffle_started(true)]
        );
        assert_eq!(
            command_rx.try_recv().unwrap(),
            AudioPlayerCommand::PlayUrl("https://youtu.be/ellinia".to_string())
        );
    }

    #[test]
    fn shuffle_of_the_whole_catalog_is_unfiltered() {
        let (mut app, command_rx, reporter) = app_with_reporter();
        handle_catalog_loaded(&mut app, forest_catalog());

        handle_shuffle(&mut app).unwrap();

        assert_eq!(app.playback.position(), Some((1, 3)));
        assert_eq!(
            *reporter.events.borrow(),
            [AnalyticsEvent::shuffle_started(false)]
        );
        assert!(matches!(
            command_rx.try_recv(),
            Ok(AudioPlayerCommand::PlayUrl(_))
        ));
    }

    #[test]
    fn shuffle_with_nothing_playable_does_nothing() {
        let (mut app, command_rx, reporter) = app_with_reporter();
        handle_catalog_loaded(&mut app, forest_catalog());
        handle_filter_text_changed(&mut app, "sleepy");
        assert!(app.shuffle_pool.is_empty());

        handle_shuffle(&mut app).unwrap();

        assert_eq!(app.playback, PlaybackState::Idle);
        assert!(reporter.events.borrow().is_empty());
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn single_play_end_reloads_the_same_video() {
        let (mut app, command_rx, reporter) = app_with_reporter();
        handle_select_song(&mut app, "abc").unwrap();
        assert_eq!(
            command_rx.try_recv().unwrap(),
            AudioPlayerCommand::PlayUrl("https://youtu.be/abc".to_string())
        );

        handle_duration_changed(&mut app, 90);
        handle_track_finished(&mut app).unwrap();

        assert_eq!(app.player_time, Some(90));
        assert_eq!(app.playback.now_playing(), Some("abc"));
        assert!(!app.playback.is_playlist());
        assert_eq!(
            *reporter.events.borrow(),
            [AnalyticsEvent::new("Video", "Loop Embedded Video", "abc")]
        );
        assert_eq!(
            command_rx.try_recv().unwrap(),
            AudioPlayerCommand::Restart("https://youtu.be/abc".to_string())
        );
    }

    #[test]
    fn playlist_song_end_reports_completion_then_plays_the_next() {
        let (mut app, command_rx, reporter) = app_with_reporter();
        handle_catalog_loaded(&mut app, forest_catalog());
        handle_filter_text_changed(&mut app, "f");
        assert_eq!(app.shuffle_pool.len(), 2);

        handle_shuffle(&mut app).unwrap();
        let first = app.playback.now_playing().unwrap().to_string();
        command_rx.try_recv().unwrap();

        handle_track_finished(&mut app).unwrap();

        let second = app.playback.now_playing().unwrap().to_string();
        assert_ne!(first, second);
        assert_eq!(app.playback.position(), Some((2, 2)));
        assert_eq!(
            reporter.events.borrow()[1],
            AnalyticsEvent::new("Video", "Complete Playlist Video", &first)
        );
        assert_eq!(
            command_rx.try_recv().unwrap(),
            AudioPlayerCommand::PlayUrl(format!("https://youtu.be/{}", second))
        );
    }

    #[test]
    fn navigating_to_the_current_view_reports_nothing() {
        let reporter = RecordingReporter::default();
        let mut view = MainView::Home;

        navigate(&mut view, MainView::Home, &reporter);
        assert!(reporter.page_views.borrow().is_empty());

        navigate(&mut view, MainView::Stats, &reporter);
        navigate(&mut view, MainView::Stats, &reporter);
        navigate(&mut view, MainView::About, &reporter);
        navigate(&mut view, MainView::Home, &reporter);

        assert_eq!(view, MainView::Home);
        assert_eq!(*reporter.page_views.borrow(), ["/stats", "/about", "/"]);
    }

    #[test]
    fn single_play_end_reports_a_loop() {
        let reporter = RecordingReporter::default();
        let state = PlaybackState::Idle.select_song("abc").state;

        report_milestone(&reporter, &state);

        assert_eq!(
            *reporter.events.borrow(),
            [AnalyticsEvent::new("Video", "Loop Embedded Video", "abc")]
        );
    }

    #[test]
    fn playlist_end_reports_completion_of_current_video() {
        let reporter = RecordingReporter::default();
        let pool = vec![track("a", "Alpha", "vid-a")];
        let state = PlaybackState::Idle.shuffle(&pool, &mut rand::rng()).state;

        report_milestone(&reporter, &state);

        assert_eq!(
            *reporter.events.borrow(),
            [AnalyticsEvent::new("Video", "Complete Playlist Video", "vid-a")]
        );
    }

    #[test]
    fn idle_end_reports_nothing() {
        let reporter = RecordingReporter::default();

        report_milestone(&reporter, &PlaybackState::Idle);

        assert!(reporter.events.borrow().is_empty());
    }
}
