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

//! Playback and shuffled playlist state.
//!
//! [`PlaybackState`] tracks what is playing and, in playlist mode, the
//! position within a shuffled sequence of tracks. Transitions consume the
//! current state and return a [`Transition`] holding the next state and the
//! [`PlayerAction`] the caller must perform on the media player, so the state
//! machine itself never touches the player.
//!
//! Invalid requests (next at the end, previous at the start, shuffling an
//! empty pool) are silent no-ops that hand back the unchanged state.

use rand::{Rng, seq::SliceRandom};

use crate::model::TrackRecord;

/// What the media player has to do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlayerAction {
    None,
    Load(String),
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaylistSession {
    tracks: Vec<TrackRecord>,
    index: usize,
}

impl PlaylistSession {
    pub(crate) fn tracks(&self) -> &[TrackRecord] {
        &self.tracks
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn current(&self) -> &TrackRecord {
        &self.tracks[self.index]
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.tracks.len()
    }

    fn current_action(&self) -> PlayerAction {
        PlayerAction::Load(self.current().youtube.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    #[default]
    Idle,
    SinglePlay {
        video_id: String,
    },
    /// The session is never empty and its index is always in range.
    Playlist(PlaylistSession),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    pub(crate) state: PlaybackState,
    pub(crate) action: PlayerAction,
}

impl Transition {
    fn unchanged(state: PlaybackState) -> Self {
        Self {
            state,
            action: PlayerAction::None,
        }
    }
}

impl PlaybackState {
    /// Plays one song directly, leaving any playlist.
    pub(crate) fn select_song(self, video_id: &str) -> Transition {
        Transition {
            state: PlaybackState::SinglePlay {
                video_id: video_id.to_string(),
            },
            action: PlayerAction::Load(video_id.to_string()),
        }
    }

    /// Starts a new playlist from a uniform random permutation of the
    /// playable tracks in `pool`, discarding any current playlist position.
    pub(crate) fn shuffle<R: Rng + ?Sized>(self, pool: &[TrackRecord], rng: &mut R) -> Transition {
        let mut tracks: Vec<TrackRecord> =
            pool.iter().filter(|t| t.is_playable()).cloned().collect();

        if tracks.is_empty() {
            return Transition::unchanged(self);
        }

        tracks.shuffle(rng);

        let session = PlaylistSession { tracks, index: 0 };
        let action = session.current_action();

        Transition {
            state: PlaybackState::Playlist(session),
            action,
        }
    }

    pub(crate) fn next(self) -> Transition {
        match self {
            PlaybackState::Playlist(mut session) if !session.is_last() => {
                session.index += 1;
                let action = session.current_action();
                Transition {
                    state: PlaybackState::Playlist(session),
                    action,
                }
            }
            state => Transition::unchanged(state),
        }
    }

    pub(crate) fn previous(self) -> Transition {
        match self {
            PlaybackState::Playlist(mut session) if session.index > 0 => {
                session.index -= 1;
                let action = session.current_action();
                Transition {
                    state: PlaybackState::Playlist(session),
                    action,
                }
            }
            state => Transition::unchanged(state),
        }
    }

    /// Single songs loop; playlists advance until the last track, then stop.
    pub(crate) fn playback_ended(self) -> Transition {
        match self {
            PlaybackState::SinglePlay { .. } => Transition {
                state: self,
                action: PlayerAction::Restart,
            },
            PlaybackState::Playlist(_) => self.next(),
            PlaybackState::Idle => Transition::unchanged(self),
        }
    }

    pub(crate) fn now_playing(&self) -> Option<&str> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::SinglePlay { video_id } => Some(video_id.as_str()),
            PlaybackState::Playlist(session) => Some(session.current().youtube.as_str()),
        }
    }

    pub(crate) fn session(&self) -> Option<&PlaylistSession> {
        match self {
            PlaybackState::Playlist(session) => Some(session),
            _ => None,
        }
    }

    pub(crate) fn is_playlist(&self) -> bool {
        matches!(self, PlaybackState::Playlist(_))
    }

    /// One-based position and length of the playlist.
    pub(crate) fn position(&self) -> Option<(usize, usize)> {
        self.session().map(|s| (s.index() + 1, s.tracks().len()))
    }

    pub(crate) fn can_previous(&self) -> bool {
        self.session().is_some_and(|s| s.index > 0)
    }

    pub(crate) fn can_next(&self) -> bool {
        self.session().is_some_and(|s| !s.is_last())
    }

    pub(crate) fn current_track(&self) -> Option<&TrackRecord> {
        self.session().map(PlaylistSession::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::track;
    use proptest::prelude::*;

    fn playlist(ids: &[&str], index: usize) -> PlaybackState {
        let tracks = ids.iter().map(|id| track(id, id, id)).collect();
        PlaybackState::Playlist(PlaylistSession { tracks, index })
    }

    fn sorted_ids(tracks: &[TrackRecord]) -> Vec<String> {
        let mut ids: Vec<String> = tracks.iter().map(|t| t.youtube.clone()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn shuffle_draws_only_playable_tracks() {
        let pool = vec![track("A", "A", ""), track("B", "B", "b1"), track("C", "C", "b2")];

        let t = PlaybackState::Idle.shuffle(&pool, &mut rand::rng());

        let session = t.state.session().unwrap();
        assert_eq!(session.tracks().len(), 2);
        assert_eq!(session.index(), 0);
        assert_eq!(sorted_ids(session.tracks()), vec!["b1", "b2"]);
        assert_eq!(t.action, PlayerAction::Load(session.current().youtube.clone()));
    }

    #[test]
    fn shuffle_with_no_playable_tracks_is_a_no_op() {
        let pool = vec![track("A", "A", "")];
        let before = PlaybackState::SinglePlay {
            video_id: "x".to_string(),
        };

        let t = before.clone().shuffle(&pool, &mut rand::rng());
        assert_eq!(t.state, before);
        assert_eq!(t.action, PlayerAction::None);

        let t = PlaybackState::Idle.shuffle(&[], &mut rand::rng());
        assert_eq!(t.state, PlaybackState::Idle);
        assert_eq!(t.action, PlayerAction::None);
    }

    #[test]
    fn reshuffle_resets_to_first_track() {
        let pool = vec![track("B", "B", "b1"), track("C", "C", "b2")];

        let t = playlist(&["x", "y", "z"], 2).shuffle(&pool, &mut rand::rng());

        assert_eq!(t.state.position(), Some((1, 2)));
    }

    #[test]
    fn playback_ended_at_last_track_stops() {
        let state = playlist(&["s0", "s1", "s2"], 2);

        let t = state.clone().playback_ended();

        assert_eq!(t.state, state);
        assert_eq!(t.action, PlayerAction::None);
    }

    #[test]
    fn playback_ended_advances_playlist() {
        let t = playlist(&["s0", "s1", "s2"], 0).playback_ended();

        assert_eq!(t.state.now_playing(), Some("s1"));
        assert_eq!(t.action, PlayerAction::Load("s1".to_string()));
    }

    #[test]
    fn single_play_loops_on_end() {
        let state = PlaybackState::Idle.select_song("abc").state;

        let t = state.clone().playback_ended();

        assert_eq!(t.state, state);
        assert_eq!(t.action, PlayerAction::Restart);
    }

    #[test]
    fn idle_ignores_navigation() {
        assert_eq!(PlaybackState::Idle.next().action, PlayerAction::None);
        assert_eq!(PlaybackState::Idle.previous().action, PlayerAction::None);
        assert_eq!(PlaybackState::Idle.playback_ended().action, PlayerAction::None);
        assert_eq!(PlaybackState::Idle.now_playing(), None);
    }

    #[test]
    fn navigation_flags_follow_position() {
        let first = playlist(&["s0", "s1"], 0);
        assert!(!first.can_previous());
        assert!(first.can_next());

        let last = playlist(&["s0", "s1"], 1);
        assert!(last.can_previous());
        assert!(!last.can_next());

        let single = PlaybackState::Idle.select_song("abc").state;
        assert!(!single.can_previous());
        assert!(!single.can_next());
        assert_eq!(single.position(), None);
    }

    fn pool_strategy() -> impl Strategy<Value = Vec<TrackRecord>> {
        prop::collection::vec(any::<bool>(), 0..30).prop_map(|playable| {
            playable
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let id = format!("t{i}");
                    let video = if p { format!("v{i}") } else { String::new() };
                    track(&id, &id, &video)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation_of_playable_tracks(pool in pool_strategy()) {
            let playable: Vec<TrackRecord> = pool.iter().filter(|t| t.is_playable()).cloned().collect();

            let t = PlaybackState::Idle.shuffle(&pool, &mut rand::rng());

            if playable.is_empty() {
                prop_assert_eq!(t.state, PlaybackState::Idle);
            } else {
                let session = t.state.session().unwrap();
                prop_assert_eq!(session.index(), 0);
                prop_assert_eq!(session.tracks().len(), playable.len());
                prop_assert_eq!(sorted_ids(session.tracks()), sorted_ids(&playable));
            }
        }

        #[test]
        fn stepping_forth_and_back_returns_to_same_track(len in 2usize..20, seed in 0usize..1000) {
            let ids: Vec<String> = (0..len).map(|i| format!("v{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();

            let inner = playlist(&refs, seed % (len - 1));
            let expected = inner.now_playing().map(str::to_owned);
            let after = inner.next().state.previous().state;
            prop_assert_eq!(after.now_playing().map(str::to_owned), expected);

            let outer = playlist(&refs, 1 + seed % (len - 1));
            let expected = outer.now_playing().map(str::to_owned);
            let after = outer.previous().state.next().state;
            prop_assert_eq!(after.now_playing().map(str::to_owned), expected);
        }

        #[test]
        fn navigation_at_the_ends_is_a_no_op(len in 1usize..20) {
            let ids: Vec<String> = (0..len).map(|i| format!("v{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();

            let last = playlist(&refs, len - 1);
            let t = last.clone().next();
            prop_assert_eq!(t.state, last);
            prop_assert_eq!(t.action, PlayerAction::None);

            let first = playlist(&refs, 0);
            let t = first.clone().previous();
            prop_assert_eq!(t.state, first);
            prop_assert_eq!(t.action, PlayerAction::None);
        }

        #[test]
        fn select_song_always_leaves_playlist(len in 1usize..20, seed in 0usize..1000, pick in "[a-z]{1,8}") {
            let ids: Vec<String> = (0..len).map(|i| format!("v{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();

            let t = playlist(&refs, seed % len).select_song(&pick);

            prop_assert!(!t.state.is_playlist());
            prop_assert!(t.state.session().is_none());
            prop_assert_eq!(t.state.now_playing(), Some(pick.as_str()));
            prop_assert_eq!(t.action, PlayerAction::Load(pick.clone()));
        }
    }
}
