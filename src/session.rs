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

use rand::Rng;

use crate::error::Fallible;
use crate::store::FavoritesStore;
use crate::types::question::Question;
use crate::types::question::QuestionId;
use crate::types::theme::ThemeFilter;

/// The ordered catalog indices matching a filter. Catalog order is
/// preserved.
pub fn compute_view(catalog: &[Question], filter: ThemeFilter) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, question)| filter.matches(question.theme()))
        .map(|(index, _)| index)
        .collect()
}

/// A navigable cursor over a filtered view of the catalog, plus the
/// persisted favorites set.
///
/// Invariants: `position < view.len()` whenever the view is non-empty,
/// maintained by resetting the position on every filter change. When
/// the view is empty the position is meaningless and every read goes
/// through [`DeckSession::current_question`].
pub struct DeckSession {
    catalog: Vec<Question>,
    filter: ThemeFilter,
    view: Vec<usize>,
    position: usize,
    favorites: HashSet<QuestionId>,
    store: Box<dyn FavoritesStore>,
}

impl DeckSession {
    /// Build a session over the catalog. Favorites are restored from the
    /// store; the filter and position always start at `(All, 0)`.
    pub fn new(catalog: Vec<Question>, store: Box<dyn FavoritesStore>) -> Self {
        let favorites = store.load();
        let view = compute_view(&catalog, ThemeFilter::All);
        Self {
            catalog,
            filter: ThemeFilter::All,
            view,
            position: 0,
            favorites,
            store,
        }
    }

    /// Set the active filter and reset the position to the top of the
    /// new view.
    pub fn set_filter(&mut self, filter: ThemeFilter) {
        self.filter = filter;
        self.view = compute_view(&self.catalog, filter);
        self.position = 0;
    }

    /// Advance to the next card, wrapping past the end. No-op on an
    /// empty view.
    pub fn next(&mut self) {
        if self.view.is_empty() {
            return;
        }
        if self.position + 1 < self.view.len() {
            self.position += 1;
        } else {
            self.position = 0;
        }
    }

    /// Retreat to the previous card, wrapping past the start. No-op on
    /// an empty view.
    pub fn prev(&mut self) {
        if self.view.is_empty() {
            return;
        }
        if self.position == 0 {
            self.position = self.view.len() - 1;
        } else {
            self.position -= 1;
        }
    }

    /// Jump to a uniformly random card in the view. The draw may land on
    /// the card already shown. No-op on an empty view.
    pub fn shuffle(&mut self) {
        if self.view.is_empty() {
            return;
        }
        self.position = rand::rng().random_range(0..self.view.len());
    }

    /// Flip the favorite status of a question and persist the whole set
    /// immediately. The id need not belong to the current view. Returns
    /// the new membership.
    pub fn toggle_favorite(&mut self, id: QuestionId) -> Fallible<bool> {
        let now_favorite = if self.favorites.contains(&id) {
            self.favorites.remove(&id);
            false
        } else {
            self.favorites.insert(id);
            true
        };
        self.store.save(&self.favorites)?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: QuestionId) -> bool {
        self.favorites.contains(&id)
    }

    /// The card under the cursor, or `None` when the view is empty.
    pub fn current_question(&self) -> Option<&Question> {
        self.view.get(self.position).map(|&index| &self.catalog[index])
    }

    pub fn filter(&self) -> ThemeFilter {
        self.filter
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn deck_len(&self) -> usize {
        self.view.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// The favorited questions, in catalog order.
    pub fn favorite_questions(&self) -> Vec<&Question> {
        self.catalog
            .iter()
            .filter(|question| self.favorites.contains(&question.id()))
            .collect()
    }
}
