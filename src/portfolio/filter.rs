// SPDX-License-Identifier: MPL-2.0
//! Tag filtering for project cards.
//!
//! # Available Types
//!
//! - [`TagFilter`]: the selected tag, or the reserved `all`
//! - [`ProjectCard`]: a card and the tags it carries
//! - [`FilterBar`]: the filter buttons, the single active one, and the
//!   visibility of every card

use serde::{Deserialize, Serialize};

// =============================================================================
// Tag Filter
// =============================================================================

/// Filter selected by a filter button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// Reserved `all` tag: every card is shown.
    #[default]
    All,
    /// Only cards carrying this tag are shown.
    Tag(String),
}

impl TagFilter {
    /// Reserved tag that matches every card.
    pub const ALL_TAG: &'static str = "all";

    /// Parses a filter button's tag attribute.
    #[must_use]
    pub fn from_attr(tag: &str) -> Self {
        if tag == Self::ALL_TAG {
            Self::All
        } else {
            Self::Tag(tag.to_string())
        }
    }

    /// Returns `true` if a card with `card` tags passes this filter.
    #[must_use]
    pub fn matches(&self, card: &ProjectCard) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => card.has_tag(tag),
        }
    }
}

// =============================================================================
// Project Card
// =============================================================================

/// A project card as declared in the page manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Whitespace-separated tags.
    #[serde(default)]
    pub tags: String,
    /// Indices into the page's trigger list rendered on this card.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previews: Vec<usize>,
}

impl ProjectCard {
    /// Iterates over the card's tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.split_whitespace()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }
}

// =============================================================================
// Filter Bar
// =============================================================================

/// A filter button as declared in the page manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    pub label: String,
    pub tag: String,
    /// Applied once when the page loads.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
}

/// The filter buttons of a page and the visibility they impose on cards.
///
/// At most one button is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
    active: Option<usize>,
    visible: Vec<bool>,
}

impl FilterBar {
    /// Builds the bar for `cards`, applying the first button marked active.
    ///
    /// All cards start visible.
    #[must_use]
    pub fn new(buttons: Vec<FilterButton>, cards: &[ProjectCard]) -> Self {
        let initial = buttons.iter().position(|b| b.active);
        let mut bar = Self {
            buttons,
            active: None,
            visible: vec![true; cards.len()],
        };
        if let Some(index) = initial {
            bar.activate(index, cards);
        }
        bar
    }

    /// Whether filtering can happen at all: the page needs both buttons and
    /// cards.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.buttons.is_empty() && !self.visible.is_empty()
    }

    /// Marks button `index` as the only active one and recomputes which
    /// cards are shown.
    ///
    /// Ignored when the bar is disabled or `index` is out of range.
    pub fn activate(&mut self, index: usize, cards: &[ProjectCard]) {
        if !self.is_enabled() {
            return;
        }
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        let filter = TagFilter::from_attr(&button.tag);
        self.active = Some(index);
        self.visible = cards.iter().map(|card| filter.matches(card)).collect();
        tracing::debug!(tag = %button.tag, shown = self.visible_count(), "filter applied");
    }

    #[must_use]
    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Whether card `index` is currently shown. Unknown cards are shown.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(true)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

// =============================================================================
// Tests
// =============================================================================
