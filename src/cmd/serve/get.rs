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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::template::page_template;
use crate::session::DeckSession;
use crate::types::question::Question;
use crate::types::theme::ThemeFilter;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let session = state.mutable.lock().unwrap();
    let body = render_deck(&session);
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn render_deck(session: &DeckSession) -> Markup {
    let card = match session.current_question() {
        Some(question) => render_card(session, question),
        None => render_empty(),
    };
    html! {
        div.root {
            header.masthead {
                span.brand { "Elysian" }
                h1 { "Date Night " span.accent { "Moments" } }
            }
            (render_theme_selector(session))
            div.deck {
                (card)
            }
            (render_controls())
        }
    }
}

fn render_theme_selector(session: &DeckSession) -> Markup {
    html! {
        form.themes action="/" method="post" {
            input type="hidden" name="action" value="Filter";
            @for filter in ThemeFilter::ALL {
                @let active = filter == session.filter();
                input .pill .pill-active[active] type="submit" name="filter" value=(filter.label());
            }
        }
    }
}

fn render_card(session: &DeckSession, question: &Question) -> Markup {
    let shown = session.position() + 1;
    let total = session.deck_len();
    let percent = (shown * 100) / total;
    let progress_style = format!("width: {percent}%;");
    let is_favorite = session.is_favorite(question.id());
    let favorite_count = session.favorite_count();
    html! {
        div.card {
            div.card-header {
                span.chip.(question.theme().css_class()) { (question.theme().label()) }
                div.progress {
                    span.progress-label { (shown) " OF " (total) }
                    div.progress-bar {
                        div.progress-fill style=(progress_style) {}
                    }
                }
            }
            div.card-body {
                blockquote.question {
                    "\u{201c}" (question.text()) "\u{201d}"
                }
            }
            div.card-footer {
                form.favorite action="/" method="post" {
                    button #favorite .star .starred[is_favorite] type="submit" name="action"
                        value="Favorite" title="Favorite this card. Shortcut: f." {
                        @if is_favorite { "★" } @else { "☆" }
                    }
                    @if favorite_count > 0 {
                        span.favorite-count { (favorite_count) }
                    }
                }
                span.wordmark { "ELYSIAN" }
            }
        }
    }
}

fn render_empty() -> Markup {
    html! {
        div.card.empty {
            p.empty-message { "Your deck is currently empty." }
            form action="/" method="post" {
                input type="hidden" name="action" value="Filter";
                button .reset type="submit" name="filter" value="All" { "Reset view" }
            }
        }
    }
}

fn render_controls() -> Markup {
    html! {
        form.controls action="/" method="post" {
            button #prev .nav type="submit" name="action" value="Prev"
                title="Previous card. Shortcut: left arrow." { "\u{2039}" }
            button #shuffle .shuffle type="submit" name="action" value="Shuffle"
                title="Jump to a random card. Shortcut: s." { "Shuffle" }
            button #next .nav type="submit" name="action" value="Next"
                title="Next card. Shortcut: right arrow." { "\u{203a}" }
        }
    }
}
