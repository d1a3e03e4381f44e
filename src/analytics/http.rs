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

//! Measurement-protocol reporter.
//!
//! Reports are queued on a channel and posted by a background thread, so a
//! slow or unreachable endpoint never stalls the interface. Failed posts are
//! logged and dropped.

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::analytics::{AnalyticsEvent, Reporter};

const POST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
enum Hit {
    PageView(String),
    Event(AnalyticsEvent),
}

impl Hit {
    fn params(&self, token: &str, client_id: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("v", "1".to_string()),
            ("tid", token.to_string()),
            ("cid", client_id.to_string()),
        ];

        match self {
            Hit::PageView(path) => {
                params.push(("t", "pageview".to_string()));
                params.push(("dp", path.clone()));
            }
            Hit::Event(event) => {
                params.push(("t", "event".to_string()));
                params.push(("ec", event.category.clone()));
                params.push(("ea", event.action.clone()));
                params.push(("el", event.label.clone()));
            }
        }

        params
    }
}

pub(crate) struct HttpReporter {
    hit_tx: Sender<Hit>,
}

impl HttpReporter {
    pub(crate) fn new(endpoint: &str, token: &str) -> Self {
        let (hit_tx, hit_rx) = mpsc::channel();

        let endpoint = endpoint.to_string();
        let token = token.to_string();
        let client_id = format!("{:032x}", rand::random::<u128>());

        thread::spawn(move || send_hits(hit_rx, &endpoint, &token, &client_id));

        Self { hit_tx }
    }
}

impl Reporter for HttpReporter {
    fn page_view(&self, path: &str) {
        self.hit_tx.send(Hit::PageView(path.to_string())).ok();
    }

    fn event(&self, event: &AnalyticsEvent) {
        self.hit_tx.send(Hit::Event(event.clone())).ok();
    }
}

fn send_hits(hit_rx: Receiver<Hit>, endpoint: &str, token: &str, client_id: &str) {
    let client = match reqwest::blocking::Client::builder()
        .timeout(POST_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            log::warn!("Analytics disabled, failed to create HTTP client: {}", e);
            return;
        }
    };

    while let Ok(hit) = hit_rx.recv() {
        let params = hit.params(token, client_id);
        let result = client
            .post(endpoint)
            .form(&params)
            .send()
            .and_then(|r| r.error_for_status());

        if let Err(e) = result {
            log::debug!(target: "analytics", "Dropped {:?}: {}", hit, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_view_params() {
        let params = Hit::PageView("/stats".to_string()).params("UA-1", "abc");

        assert!(params.contains(&("t", "pageview".to_string())));
        assert!(params.contains(&("dp", "/stats".to_string())));
        assert!(params.contains(&("tid", "UA-1".to_string())));
        assert!(params.contains(&("cid", "abc".to_string())));
    }

    #[test]
    fn event_params() {
        let event = AnalyticsEvent::new("Video", "Loop Embedded Video", "xyz");
        let params = Hit::Event(event).params("UA-1", "abc");

        assert!(params.contains(&("t", "event".to_string())));
        assert!(params.contains(&("ec", "Video".to_string())));
        assert!(params.contains(&("ea", "Loop Embedded Video".to_string())));
        assert!(params.contains(&("el", "xyz".to_string())));
    }
}
