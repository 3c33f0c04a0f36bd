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

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::PathBuf;

use crate::error::Fallible;
use crate::types::question::QuestionId;

/// Capability interface for persisting the favorites set. The deck
/// session takes a store at construction, so the logic can run against
/// an in-memory fake in tests.
pub trait FavoritesStore: Send {
    /// Load the persisted set. Absent or malformed data loads as the
    /// empty set, never as an error.
    fn load(&self) -> HashSet<QuestionId>;

    /// Replace the persisted set with `favorites`.
    fn save(&self, favorites: &HashSet<QuestionId>) -> Fallible<()>;
}

/// Stores the favorites as a JSON array of question ids in a single
/// file. Ids are written sorted, so the file is deterministic for a
/// given membership.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> HashSet<QuestionId> {
        let content = match read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                log::debug!("No favorites file at {:?}, starting empty.", self.path);
                return HashSet::new();
            }
        };
        match serde_json::from_str::<Vec<QuestionId>>(&content) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                log::warn!("Ignoring malformed favorites file {:?}: {e}", self.path);
                HashSet::new()
            }
        }
    }

    fn save(&self, favorites: &HashSet<QuestionId>) -> Fallible<()> {
        let mut ids: Vec<QuestionId> = favorites.iter().copied().collect();
        ids.sort();
        let content = serde_json::to_string(&ids)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store for tests. Clones share one backing cell, so a
/// session built later sees what an earlier session saved.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    saved: std::sync::Arc<std::sync::Mutex<Option<Vec<QuestionId>>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved set, sorted, or `None` if nothing was ever saved.
    pub fn saved(&self) -> Option<Vec<QuestionId>> {
        self.saved.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl FavoritesStore for MemoryStore {
    fn load(&self) -> HashSet<QuestionId> {
        match self.saved.lock().unwrap().as_ref() {
            Some(ids) => ids.iter().copied().collect(),
            None => HashSet::new(),
        }
    }

    fn save(&self, favorites: &HashSet<QuestionId>) -> Fallible<()> {
        let mut ids: Vec<QuestionId> = favorites.iter().copied().collect();
        ids.sort();
        *self.saved.lock().unwrap() = Some(ids);
        Ok(())
    }
}
