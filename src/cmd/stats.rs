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

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::store::FavoritesStore;
use crate::types::theme::Theme;

/// Print catalog and favorites statistics as JSON.
pub fn print_stats(directory: Option<String>) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let stats = gather_stats(&collection);
    let stats_json = serde_json::to_string_pretty(&stats)?;
    println!("{}", stats_json);
    Ok(())
}

fn gather_stats(collection: &Collection) -> Stats {
    let theme_counts = Theme::ALL
        .into_iter()
        .map(|theme| ThemeCount {
            theme: theme.label(),
            question_count: collection
                .catalog
                .iter()
                .filter(|question| question.theme() == theme)
                .count(),
        })
        .collect();
    Stats {
        question_count: collection.catalog.len(),
        theme_counts,
        favorite_count: collection.store.load().len(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    question_count: usize,
    theme_counts: Vec<ThemeCount>,
    favorite_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeCount {
    theme: &'static str,
    question_count: usize,
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_gather_stats() -> Fallible<()> {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("favorites.json"), "[1,3,22]")?;
        let collection = Collection::new(Some(dir.path().display().to_string()))?;
        let stats = gather_stats(&collection);
        assert_eq!(stats.question_count, collection.catalog.len());
        assert_eq!(stats.favorite_count, 3);
        let theme_total: usize = stats.theme_counts.iter().map(|tc| tc.question_count).sum();
        assert_eq!(theme_total, stats.question_count);
        Ok(())
    }

    #[test]
    fn test_print_stats() {
        let dir = tempdir().unwrap();
        assert!(print_stats(Some(dir.path().display().to_string())).is_ok());
    }
}
