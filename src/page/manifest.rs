// SPDX-License-Identifier: MPL-2.0
//! Serde schema of a page manifest.
//!
//! The manifest is the page markup: it declares which elements exist and the
//! data attributes they carry. Anything it omits is simply absent from the
//! page, and the features depending on it stay inactive.

use crate::portfolio::{FilterButton, ProjectCard};
use crate::preview::{OverlayParts, PreviewItem, Trigger, TriggerId, TriggerKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navbar: Option<NavbarMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlayMarkup>,
    #[serde(default)]
    pub triggers: Vec<TriggerMarkup>,
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
    #[serde(default)]
    pub filters: Vec<FilterButton>,
}

/// Navbar elements: the toggle, the menu it opens and the menu's links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavbarMarkup {
    /// Element id of the burger toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle: Option<String>,
    /// Element id of the link container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    #[serde(default)]
    pub href: String,
}

/// The overlay root and its parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayMarkup {
    #[serde(flatten)]
    pub parts: OverlayParts,
    /// Ids of elements carrying the close marker (close button, backdrop).
    #[serde(default)]
    pub close_markers: Vec<String>,
}

/// A clickable preview trigger and its data attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TriggerMarkup {
    #[serde(default)]
    pub kind: TriggerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Label of the clickable element itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TriggerMarkup {
    /// Binds this markup as the trigger at document position `index`.
    #[must_use]
    pub fn to_trigger(&self, index: usize) -> Trigger {
        Trigger {
            id: TriggerId(index),
            kind: self.kind,
            item: PreviewItem::from_attrs(
                self.img.as_deref(),
                self.title.as_deref(),
                self.desc.as_deref(),
                self.group.as_deref(),
            ),
        }
    }
}
