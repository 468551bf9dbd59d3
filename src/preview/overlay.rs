// SPDX-License-Identifier: MPL-2.0
//! The overlay root that every preview is rendered into, and the page
//! scroll lock it holds while open.

use super::item::PreviewItem;
use serde::{Deserialize, Serialize};

/// Which optional parts the page's overlay markup provides.
///
/// The overlay root itself is modelled by the presence of an [`Overlay`];
/// every part inside it may be missing independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayParts {
    pub image: bool,
    pub title: bool,
    pub description: bool,
    /// The info panel wrapping title and description.
    pub body: bool,
    pub previous: bool,
    pub next: bool,
}

impl Default for OverlayParts {
    fn default() -> Self {
        Self {
            image: true,
            title: true,
            description: true,
            body: true,
            previous: true,
            next: true,
        }
    }
}

/// Rendered state of the single shared overlay root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    parts: OverlayParts,
    is_open: bool,
    aria_hidden: bool,
    image_src: String,
    image_alt: String,
    title: String,
    description: String,
    body_hidden: bool,
    nav_visible: bool,
}

impl Overlay {
    #[must_use]
    pub fn new(parts: OverlayParts) -> Self {
        Self {
            parts,
            is_open: false,
            aria_hidden: true,
            image_src: String::new(),
            image_alt: String::new(),
            title: String::new(),
            description: String::new(),
            body_hidden: false,
            nav_visible: true,
        }
    }

    #[must_use]
    pub fn parts(&self) -> OverlayParts {
        self.parts
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.parts.image
    }

    /// Writes `item` into the image, title, description and info panel.
    ///
    /// Parts missing from the markup are skipped. The info panel is hidden
    /// when the item carries no visible title or description.
    pub fn render(&mut self, item: &PreviewItem, fallback_alt: &str) {
        self.image_src.clone_from(&item.image);
        self.image_alt = item.alt_text(fallback_alt).to_string();

        if self.parts.title {
            self.title.clone_from(&item.title);
        }
        if self.parts.description {
            self.description.clone_from(&item.description);
        }
        if self.parts.body {
            self.body_hidden = !item.has_info();
        }
    }

    pub fn show(&mut self) {
        self.is_open = true;
        self.aria_hidden = false;
    }

    pub fn hide(&mut self) {
        self.is_open = false;
        self.aria_hidden = true;
    }

    /// Shows or hides the previous/next controls.
    pub fn set_nav_visible(&mut self, visible: bool) {
        self.nav_visible = visible;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    #[must_use]
    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    #[must_use]
    pub fn image_alt(&self) -> &str {
        &self.image_alt
    }

    /// Title text, or `None` when the markup has no title element.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.parts.title.then_some(self.title.as_str())
    }

    /// Description text, or `None` when the markup has no description element.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.parts
            .description
            .then_some(self.description.as_str())
    }

    /// Whether the info panel is currently shown.
    #[must_use]
    pub fn body_visible(&self) -> bool {
        self.parts.body && !self.body_hidden
    }

    #[must_use]
    pub fn previous_visible(&self) -> bool {
        self.parts.previous && self.nav_visible
    }

    #[must_use]
    pub fn next_visible(&self) -> bool {
        self.parts.next && self.nav_visible
    }
}

/// Page background scrolling, disabled while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackgroundScroll {
    locked: bool,
}

impl BackgroundScroll {
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn restore(&mut self) {
        self.locked = false;
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}
