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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! such as the catalog download, from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into network
//! operations and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are better
//! suited to events.

mod handlers;

use anyhow::{Context, Result};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{config::AppConfig, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadCatalog,
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread creates its own HTTP client and enters a blocking loop,
/// listening for incoming [`AppTask`]s until the sending side is dropped.
pub(crate) fn spawn_task_worker(
    config: AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let client = match http_client() {
            Ok(client) => client,
            Err(e) => {
                let _ = event_tx.send(AppEvent::FatalError(format!("{:#}", e)));
                return;
            }
        };

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                client: &client,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(format!("{:#}", e)));
            }
        }
    });
}

fn http_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    client: &'a reqwest::blocking::Client,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadCatalog => handlers::load_catalog(ctx),
    }
}
