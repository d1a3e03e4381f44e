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

use crate::{events::AppEvent, model::catalog, tasks::TaskContext};

/// Downloads the catalog.
///
/// A failed download is not an application error: it is logged and reported
/// as [`AppEvent::CatalogFailed`], which leaves the grid empty.
pub(super) fn load_catalog(ctx: &TaskContext) -> Result<()> {
    let url = &ctx.config.catalog_url;

    ctx.event_tx.send(AppEvent::CatalogLoading)?;
    log::info!("Loading catalog from {}", url);

    match catalog::fetch_catalog(ctx.client, url) {
        Ok(tracks) => {
            log::info!("Loaded {} catalog tracks", tracks.len());
            ctx.event_tx.send(AppEvent::CatalogLoaded(tracks))?;
        }
        Err(e) => {
            log::warn!("Failed to load catalog from {}: {}", url, e);
            ctx.event_tx.send(AppEvent::CatalogFailed)?;
        }
    }

    Ok(())
}
