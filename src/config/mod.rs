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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "maplebgm";

const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/maplestory-music/maplebgm-db/prod/bgm.min.json";

const DEFAULT_VIDEO_URL_PREFIX: &str = "https://youtu.be/";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub catalog_url: String,
    pub video_url_prefix: String,
    pub video_output: bool,
    pub log_file: String,
    pub analytics_endpoint: Option<String>,
    pub analytics_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            video_url_prefix: DEFAULT_VIDEO_URL_PREFIX.to_string(),
            video_output: true,
            log_file: "maplebgm.log".to_string(),
            analytics_endpoint: None,
            analytics_token: None,
        }
    }
}

impl AppConfig {
    /// Builds the playable URL for a video identifier.
    pub fn video_url(&self, video_id: &str) -> String {
        format!("{}{}", self.video_url_prefix, video_id)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
