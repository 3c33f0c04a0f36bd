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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::serve::state::ServerState;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::theme::ThemeFilter;

#[derive(Debug, Deserialize)]
enum Action {
    Next,
    Prev,
    Shuffle,
    Favorite,
    Filter,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    filter: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: ServerState, form: FormData) -> Fallible<()> {
    let mut session = state.mutable.lock().unwrap();
    match form.action {
        Action::Next => {
            session.next();
        }
        Action::Prev => {
            session.prev();
        }
        Action::Shuffle => {
            session.shuffle();
        }
        Action::Favorite => {
            // Favoriting an empty deck is a no-op.
            if let Some(id) = session.current_question().map(|question| question.id()) {
                let now_favorite = session.toggle_favorite(id)?;
                if now_favorite {
                    log::debug!("Favorited question {id}.");
                } else {
                    log::debug!("Unfavorited question {id}.");
                }
            }
        }
        Action::Filter => {
            let label = match form.filter {
                Some(label) => label,
                None => return fail("filter action without a filter value."),
            };
            match ThemeFilter::from_label(&label) {
                Some(filter) => session.set_filter(filter),
                None => {
                    // The selector only submits known labels.
                    log::error!("Unknown theme label: {label}");
                }
            }
        }
    }
    Ok(())
}
