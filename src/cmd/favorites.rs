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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::session::DeckSession;

/// Print the favorited questions, in catalog order.
pub fn print_favorites(directory: Option<String>) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let session = DeckSession::new(collection.catalog, Box::new(collection.store));
    let favorites = session.favorite_questions();
    if favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }
    for question in favorites {
        println!(
            "{}. [{}] {}",
            question.id(),
            question.theme().label(),
            question.text()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::print_favorites;

    #[test]
    fn test_non_existent_directory() {
        assert!(print_favorites(Some("./derpherp".to_string())).is_err());
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(print_favorites(Some(dir.path().display().to_string())).is_ok());
    }

    #[test]
    fn test_with_favorites() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("favorites.json"), "[1,3]").unwrap();
        assert!(print_favorites(Some(dir.path().display().to_string())).is_ok());
    }
}
