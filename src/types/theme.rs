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

/// The closed set of card categories.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Theme {
    DeepConversation,
    FunAndSilly,
    DreamVacation,
    RelationshipReflection,
}

impl Theme {
    /// Every theme, in catalog order.
    pub const ALL: [Theme; 4] = [
        Theme::DeepConversation,
        Theme::FunAndSilly,
        Theme::DreamVacation,
        Theme::RelationshipReflection,
    ];

    /// The label shown on the card chip and the selector.
    pub fn label(self) -> &'static str {
        match self {
            Theme::DeepConversation => "Deep Conversation Starters",
            Theme::FunAndSilly => "Fun & Silly Questions",
            Theme::DreamVacation => "Dream Vacation Plans",
            Theme::RelationshipReflection => "Relationship Reflections",
        }
    }

    /// The stylesheet class the chip is colored with. The color mapping
    /// itself lives in `style.css`.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::DeepConversation => "theme-deep",
            Theme::FunAndSilly => "theme-silly",
            Theme::DreamVacation => "theme-vacation",
            Theme::RelationshipReflection => "theme-reflection",
        }
    }
}

/// A deck filter: the whole catalog, or a single theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeFilter {
    All,
    Theme(Theme),
}

impl ThemeFilter {
    /// Every filter, in selector order.
    pub const ALL: [ThemeFilter; 5] = [
        ThemeFilter::All,
        ThemeFilter::Theme(Theme::DeepConversation),
        ThemeFilter::Theme(Theme::FunAndSilly),
        ThemeFilter::Theme(Theme::DreamVacation),
        ThemeFilter::Theme(Theme::RelationshipReflection),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemeFilter::All => "All",
            ThemeFilter::Theme(theme) => theme.label(),
        }
    }

    /// Parse a selector label. Returns `None` for labels outside the
    /// fixed set.
    pub fn from_label(label: &str) -> Option<ThemeFilter> {
        Self::ALL.into_iter().find(|filter| filter.label() == label)
    }

    pub fn matches(self, theme: Theme) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Theme(t) => t == theme,
        }
    }
}
