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

use std::env::current_dir;
use std::path::PathBuf;

use crate::catalog;
use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::JsonFileStore;
use crate::types::question::Question;

/// Everything the commands need from a collection directory: the
/// configuration, the question catalog, and the favorites store. The
/// directory holds `elysian.toml` (optional) and the favorites file.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub catalog: Vec<Question>,
    pub store: JsonFileStore,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory)?;

        let catalog = catalog::builtin();
        catalog::validate(&catalog)?;

        let store = JsonFileStore::new(directory.join(&config.favorites_file));

        Ok(Self {
            directory,
            config,
            catalog,
            store,
        })
    }
}
