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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::StatusCode;
    use tempfile::TempDir;
    use tempfile::tempdir;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::catalog;
    use crate::cmd::serve::server::start_server;
    use crate::error::Fallible;
    use crate::types::question::QuestionId;
    use crate::types::theme::Theme;

    /// Start a server over a fresh collection directory on an unused
    /// port, and wait until it accepts connections.
    async fn boot() -> Fallible<(TempDir, u16)> {
        let dir = tempdir()?;
        let port = portpicker::pick_unused_port().unwrap();
        let directory = dir.path().display().to_string();
        spawn(async move { start_server(Some(directory), Some(port), true).await });
        loop {
            if let Ok(stream) = TcpStream::connect(("127.0.0.1", port)).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        Ok((dir, port))
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() -> Fallible<()> {
        let port = portpicker::pick_unused_port().unwrap();
        let result = start_server(Some("./derpherp".to_string()), Some(port), true).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let (dir, port) = boot().await?;
        let base = format!("http://127.0.0.1:{port}/");
        let client = reqwest::Client::new();

        let all_questions = catalog::builtin();
        let total = all_questions.len();
        let fun_count = all_questions
            .iter()
            .filter(|q| q.theme() == Theme::FunAndSilly)
            .count();
        let first_fun = all_questions
            .iter()
            .find(|q| q.theme() == Theme::FunAndSilly)
            .unwrap();

        // Hit the root endpoint: the first card, unfiltered.
        let response = reqwest::get(&base).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains(all_questions[0].text()));
        assert!(html.contains(&format!("1 OF {total}")));

        // Hit 'Next'.
        let response = client
            .post(&base)
            .form(&[("action", "Next")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains(all_questions[1].text()));
        assert!(html.contains(&format!("2 OF {total}")));

        // Filter down to one theme: position resets to the top.
        let response = client
            .post(&base)
            .form(&[("action", "Filter"), ("filter", Theme::FunAndSilly.label())])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains(first_fun.text()));
        assert!(html.contains(&format!("1 OF {fun_count}")));

        // 'Prev' wraps to the end of the filtered view.
        let response = client
            .post(&base)
            .form(&[("action", "Prev")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains(&format!("{fun_count} OF {fun_count}")));

        // 'Shuffle' keeps the cursor inside the view.
        let response = client
            .post(&base)
            .form(&[("action", "Shuffle")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains(&format!("OF {fun_count}")));

        // Back to the top of the view, then favorite the current card.
        let response = client
            .post(&base)
            .form(&[("action", "Filter"), ("filter", Theme::FunAndSilly.label())])
            .send()
            .await?;
        assert!(response.status().is_success());
        let response = client
            .post(&base)
            .form(&[("action", "Favorite")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("★"));

        // The toggle is persisted immediately.
        let favorites_path = dir.path().join("favorites.json");
        let content = std::fs::read_to_string(&favorites_path)?;
        let ids: Vec<QuestionId> = serde_json::from_str(&content)?;
        assert_eq!(ids, vec![first_fun.id()]);

        // Toggling again empties the stored set.
        let response = client
            .post(&base)
            .form(&[("action", "Favorite")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let content = std::fs::read_to_string(&favorites_path)?;
        let ids: Vec<QuestionId> = serde_json::from_str(&content)?;
        assert!(ids.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_favorites_restored_on_restart() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("favorites.json"), "[11]")?;
        let port = portpicker::pick_unused_port().unwrap();
        let directory = dir.path().display().to_string();
        spawn(async move { start_server(Some(directory), Some(port), true).await });
        loop {
            if let Ok(stream) = TcpStream::connect(("127.0.0.1", port)).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        let response = reqwest::get(format!("http://127.0.0.1:{port}/")).await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        // One favorite restored: the count badge shows.
        assert!(html.contains("favorite-count"));
        Ok(())
    }

    #[tokio::test]
    async fn test_static_assets_and_fallback() -> Fallible<()> {
        let (_dir, port) = boot().await?;
        let base = format!("http://127.0.0.1:{port}");

        let response = reqwest::get(format!("{base}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        let response = reqwest::get(format!("{base}/script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
