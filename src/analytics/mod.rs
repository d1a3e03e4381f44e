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

//! Usage reporting.
//!
//! Page views and playlist milestones are reported through the [`Reporter`]
//! trait, which is injected into the application rather than initialised as a
//! process-wide singleton. Reporting is best-effort: implementations never
//! fail and never block the UI thread.

mod http;

pub(crate) use http::HttpReporter;

use crate::config::AppConfig;

pub(crate) const CATEGORY_PLAYLIST: &str = "Playlist";
pub(crate) const CATEGORY_VIDEO: &str = "Video";

pub(crate) const ACTION_START_PLAYLIST: &str = "Start Shuffled Playlist";
pub(crate) const ACTION_START_PLAYLIST_FILTERED: &str = "Start Shuffled Playlist (Filtered)";
pub(crate) const ACTION_LOOP_VIDEO: &str = "Loop Embedded Video";
pub(crate) const ACTION_COMPLETE_PLAYLIST_VIDEO: &str = "Complete Playlist Video";

pub(crate) const LABEL_SHUFFLE_BUTTON: &str = "Shuffle Button";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyticsEvent {
    pub(crate) category: String,
    pub(crate) action: String,
    pub(crate) label: String,
}

impl AnalyticsEvent {
    pub(crate) fn new(category: &str, action: &str, label: &str) -> Self {
        Self {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
        }
    }

    pub(crate) fn shuffle_started(filtered: bool) -> Self {
        let action = if filtered {
            ACTION_START_PLAYLIST_FILTERED
        } else {
            ACTION_START_PLAYLIST
        };
        Self::new(CATEGORY_PLAYLIST, action, LABEL_SHUFFLE_BUTTON)
    }
}

pub(crate) trait Reporter {
    fn page_view(&self, path: &str);
    fn event(&self, event: &AnalyticsEvent);
}

/// Writes reports to the application log.
pub(crate) struct LogReporter;

impl Reporter for LogReporter {
    fn page_view(&self, path: &str) {
        log::debug!(target: "analytics", "page view {}", path);
    }

    fn event(&self, event: &AnalyticsEvent) {
        log::debug!(
            target: "analytics",
            "event {} / {} / {}",
            event.category,
            event.action,
            event.label
        );
    }
}

/// Discards every report.
#[cfg(test)]
pub(crate) struct NoopReporter;

#[cfg(test)]
impl Reporter for NoopReporter {
    fn page_view(&self, _path: &str) {}

    fn event(&self, _event: &AnalyticsEvent) {}
}

/// Picks the measurement reporter when an endpoint and token are configured,
/// otherwise reports only to the log.
pub(crate) fn reporter_for(config: &AppConfig) -> Box<dyn Reporter> {
    match (&config.analytics_endpoint, &config.analytics_token) {
        (Some(endpoint), Some(token)) => Box::new(HttpReporter::new(endpoint, token)),
        _ => Box::new(LogReporter),
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::{cell::RefCell, rc::Rc};

    use super::{AnalyticsEvent, Reporter};

    /// Keeps every report so tests can assert on them.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingReporter {
        pub(crate) page_views: Rc<RefCell<Vec<String>>>,
        pub(crate) events: Rc<RefCell<Vec<AnalyticsEvent>>>,
    }

    impl Reporter for RecordingReporter {
        fn page_view(&self, path: &str) {
            self.page_views.borrow_mut().push(path.to_string());
        }

        fn event(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_event_names_filtered_playlists() {
        let event = AnalyticsEvent::shuffle_started(true);
        assert_eq!(event.category, "Playlist");
        assert_eq!(event.action, "Start Shuffled Playlist (Filtered)");
        assert_eq!(event.label, "Shuffle Button");

        let event = AnalyticsEvent::shuffle_started(false);
        assert_eq!(event.action, "Start Shuffled Playlist");
    }

    #[test]
    fn noop_reporter_accepts_everything() {
        let reporter: Box<dyn Reporter> = Box::new(NoopReporter);
        reporter.page_view("/");
        reporter.event(&AnalyticsEvent::shuffle_started(false));
    }
}
