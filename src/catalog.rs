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

use crate::error::Fallible;
use crate::error::fail;
use crate::types::question::Question;
use crate::types::question::QuestionId;
use crate::types::theme::Theme;

/// The question table. Ids are stable: the favorites file refers to
/// questions by id, so entries may be appended but never renumbered.
const QUESTIONS: [(u32, Theme, &str); 40] = [
    (
        1,
        Theme::DeepConversation,
        "What is something you believed about love before we met that has changed?",
    ),
    (2, Theme::DeepConversation, "When do you feel most understood by me?"),
    (
        3,
        Theme::DeepConversation,
        "What part of your childhood do you wish I could have seen firsthand?",
    ),
    (4, Theme::DeepConversation, "What fear have you never said out loud?"),
    (
        5,
        Theme::DeepConversation,
        "If you could relive one ordinary day from your past, which would it be?",
    ),
    (6, Theme::DeepConversation, "What does home mean to you, beyond a place?"),
    (
        7,
        Theme::DeepConversation,
        "Which of your family's traits do you hope to carry forward, and which do you want to leave behind?",
    ),
    (
        8,
        Theme::DeepConversation,
        "What is a question you have been afraid to ask me?",
    ),
    (
        9,
        Theme::DeepConversation,
        "When was the last time you changed your mind about something important?",
    ),
    (
        10,
        Theme::DeepConversation,
        "What would you want us to be remembered for as a couple?",
    ),
    (
        11,
        Theme::FunAndSilly,
        "If we were a two-person band, what would we be called and what would we play?",
    ),
    (
        12,
        Theme::FunAndSilly,
        "What completely useless talent of yours deserves an award?",
    ),
    (
        13,
        Theme::FunAndSilly,
        "If animals could talk, which species would be the rudest?",
    ),
    (
        14,
        Theme::FunAndSilly,
        "What movie would be ruined if you were the main character?",
    ),
    (
        15,
        Theme::FunAndSilly,
        "If we had to win a talent show tomorrow, what would our act be?",
    ),
    (
        16,
        Theme::FunAndSilly,
        "What snack do you defend like it is a personality trait?",
    ),
    (
        17,
        Theme::FunAndSilly,
        "Which kitchen appliance best describes you before coffee?",
    ),
    (
        18,
        Theme::FunAndSilly,
        "If your life had a laugh track, which moment this week would have gotten the biggest laugh?",
    ),
    (19, Theme::FunAndSilly, "What conspiracy theory would you start about us?"),
    (
        20,
        Theme::FunAndSilly,
        "If you could swap lives with a houseplant for a day, would it be an upgrade?",
    ),
    (
        21,
        Theme::DreamVacation,
        "If money vanished as a concern for one month, where would we wake up tomorrow?",
    ),
    (22, Theme::DreamVacation, "Mountains at sunrise or ocean at sunset, and why?"),
    (
        23,
        Theme::DreamVacation,
        "What city have you always wanted to get lost in together?",
    ),
    (24, Theme::DreamVacation, "Describe the perfect lazy morning on vacation."),
    (
        25,
        Theme::DreamVacation,
        "What is one food we would travel somewhere just to eat?",
    ),
    (26, Theme::DreamVacation, "Train across a continent or sailboat between islands?"),
    (27, Theme::DreamVacation, "What would our dream road trip playlist open with?"),
    (
        28,
        Theme::DreamVacation,
        "If we moved abroad for a year, where would we go and what would we do?",
    ),
    (
        29,
        Theme::DreamVacation,
        "What is the most beautiful place you have ever seen, and would you take me there?",
    ),
    (
        30,
        Theme::DreamVacation,
        "Camping under the stars or a hotel with room service?",
    ),
    (
        31,
        Theme::RelationshipReflection,
        "What moment this year made you feel closest to me?",
    ),
    (
        32,
        Theme::RelationshipReflection,
        "What is something I do that makes you feel loved, that I might not realize?",
    ),
    (
        33,
        Theme::RelationshipReflection,
        "How have we changed each other since we first met?",
    ),
    (
        34,
        Theme::RelationshipReflection,
        "What small ritual of ours do you hope we never lose?",
    ),
    (35, Theme::RelationshipReflection, "When did you first know this was serious?"),
    (
        36,
        Theme::RelationshipReflection,
        "What disagreement taught us the most about each other?",
    ),
    (
        37,
        Theme::RelationshipReflection,
        "What do you want more of in our relationship this year?",
    ),
    (
        38,
        Theme::RelationshipReflection,
        "Which of my quirks did you find strange at first but love now?",
    ),
    (
        39,
        Theme::RelationshipReflection,
        "What is a memory of us you replay when you miss me?",
    ),
    (40, Theme::RelationshipReflection, "What are you most proud of us for?"),
];

/// The built-in catalog. Order is fixed for the process lifetime: the
/// deck preserves catalog order within every filter.
pub fn builtin() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|(id, theme, text)| Question::new(QuestionId::new(*id), *text, *theme))
        .collect()
}

/// Check catalog integrity: ids must be unique and text non-empty.
pub fn validate(catalog: &[Question]) -> Fallible<()> {
    let mut seen: HashSet<QuestionId> = HashSet::new();
    for question in catalog {
        if question.text().trim().is_empty() {
            return fail("catalog contains a question with empty text.");
        }
        if !seen.insert(question.id()) {
            return fail("catalog contains a duplicate question id.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = builtin();
        assert_eq!(catalog.len(), QUESTIONS.len());
        assert!(validate(&catalog).is_ok());
    }

    #[test]
    fn test_every_theme_is_populated() {
        let catalog = builtin();
        for theme in Theme::ALL {
            let count = catalog.iter().filter(|q| q.theme() == theme).count();
            assert!(count > 0, "no questions for {:?}", theme);
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let catalog = vec![
            Question::new(QuestionId::new(1), "foo", Theme::FunAndSilly),
            Question::new(QuestionId::new(1), "bar", Theme::FunAndSilly),
        ];
        assert!(validate(&catalog).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_text() {
        let catalog = vec![Question::new(QuestionId::new(1), "  ", Theme::FunAndSilly)];
        assert!(validate(&catalog).is_err());
    }
}
