// SPDX-License-Identifier: MPL-2.0
//! Preview items and group keys.
//!
//! A [`PreviewItem`] is the descriptor attached to every clickable preview
//! trigger: the image to show, an optional title and description, and the
//! [`GroupKey`] that decides which other items it can be navigated with.

use std::fmt;

/// Key shared by triggers that navigate together.
///
/// A trigger without a group attribute (or with an empty one) is normalized
/// to the reserved [`GroupKey::SINGLE`] key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(String);

impl GroupKey {
    /// Reserved key for triggers that carry no explicit group.
    pub const SINGLE: &'static str = "__single__";

    /// Normalizes a raw group attribute into a key.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self::single(),
        }
    }

    /// The reserved singleton key.
    #[must_use]
    pub fn single() -> Self {
        Self(Self::SINGLE.to_string())
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.0 == Self::SINGLE
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GroupKey {
    fn default() -> Self {
        Self::single()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the overlay needs to render one preview.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewItem {
    /// Image URI or path. Empty is tolerated and renders blank.
    pub image: String,
    /// Display title, empty when absent.
    pub title: String,
    /// Display description, empty when absent.
    pub description: String,
    pub group: GroupKey,
}

impl PreviewItem {
    /// Builds an item from raw trigger attributes, applying the same
    /// defaults the markup does: missing strings become empty and a missing
    /// group becomes [`GroupKey::SINGLE`].
    #[must_use]
    pub fn from_attrs(
        image: Option<&str>,
        title: Option<&str>,
        description: Option<&str>,
        group: Option<&str>,
    ) -> Self {
        Self {
            image: image.unwrap_or_default().to_string(),
            title: title.unwrap_or_default().to_string(),
            description: description.unwrap_or_default().to_string(),
            group: GroupKey::from_attr(group),
        }
    }

    /// Returns `true` when title or description carries visible text.
    #[must_use]
    pub fn has_info(&self) -> bool {
        !self.title.trim().is_empty() || !self.description.trim().is_empty()
    }

    /// Alt text for the rendered image: the title, or `fallback` when the
    /// title is empty.
    #[must_use]
    pub fn alt_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.title.is_empty() {
            fallback
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_group_normalizes_to_single() {
        assert!(GroupKey::from_attr(None).is_single());
        assert!(GroupKey::from_attr(Some("")).is_single());
        assert_eq!(GroupKey::from_attr(None).as_str(), "__single__");
    }

    #[test]
    fn named_group_is_kept_verbatim() {
        let key = GroupKey::from_attr(Some("project-a"));
        assert!(!key.is_single());
        assert_eq!(key.to_string(), "project-a");
    }

    #[test]
    fn from_attrs_defaults_missing_strings_to_empty() {
        let item = PreviewItem::from_attrs(None, None, None, None);
        assert_eq!(item.image, "");
        assert_eq!(item.title, "");
        assert_eq!(item.description, "");
        assert!(item.group.is_single());
    }

    #[test]
    fn has_info_ignores_whitespace() {
        let mut item = PreviewItem::from_attrs(Some("a.jpg"), Some("  "), Some("\t\n"), None);
        assert!(!item.has_info());

        item.description = "Shot on film".into();
        assert!(item.has_info());

        item.description.clear();
        item.title = "A".into();
        assert!(item.has_info());
    }

    #[test]
    fn alt_text_falls_back_only_when_title_is_empty() {
        let item = PreviewItem::from_attrs(Some("a.jpg"), None, None, None);
        assert_eq!(item.alt_text("Preview"), "Preview");

        let titled = PreviewItem::from_attrs(Some("a.jpg"), Some("A"), None, None);
        assert_eq!(titled.alt_text("Preview"), "A");
    }
}
