// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

pub const CONFIG_FILE_NAME: &str = "elysian.toml";

/// Collection-level configuration. Every field has a default, so the
/// file is optional and may be partial.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The port the server binds to.
    pub port: u16,
    /// The file the favorites set is persisted to, relative to the
    /// collection directory.
    pub favorites_file: String,
    /// Whether `serve` opens the browser once the server is up.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            favorites_file: "favorites.json".to_string(),
            open_browser: true,
        }
    }
}

impl Config {
    /// Load the configuration from `elysian.toml` in the given
    /// directory, falling back to defaults when the file is absent.
    /// Unlike the favorites file, a malformed config is an error: it is
    /// user-authored input.
    pub fn load(directory: &Path) -> Fallible<Config> {
        let path = directory.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
