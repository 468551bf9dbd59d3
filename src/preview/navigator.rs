// SPDX-License-Identifier: MPL-2.0
//! Group-scoped preview navigation.
//!
//! [`PreviewNavigator`] owns the active group and index and is the only
//! thing allowed to mutate them. It renders the active item into the shared
//! [`Overlay`] and holds the page's [`BackgroundScroll`] lock while open.
//!
//! Two index policies coexist on purpose: opening clamps an out-of-range
//! index into the group, while stepping wraps around it.

use super::item::PreviewItem;
use super::overlay::{BackgroundScroll, Overlay};
use super::trigger::{TriggerId, TriggerRegistry};

/// Label used as image alt text when an item has no title.
pub const DEFAULT_FALLBACK_ALT: &str = "Preview";

/// Navigation commands that can be bound to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Close,
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewNavigator {
    overlay: Option<Overlay>,
    scroll: BackgroundScroll,
    active_group: Vec<PreviewItem>,
    active_index: Option<usize>,
    fallback_alt: String,
}

impl PreviewNavigator {
    /// Creates a closed navigator rendering into `overlay`.
    ///
    /// `None` models a page without an overlay root: every operation is then
    /// a silent no-op.
    #[must_use]
    pub fn new(overlay: Option<Overlay>) -> Self {
        Self {
            overlay,
            scroll: BackgroundScroll::default(),
            active_group: Vec::new(),
            active_index: None,
            fallback_alt: DEFAULT_FALLBACK_ALT.to_string(),
        }
    }

    /// Replaces the overlay root, e.g. after a new page was loaded.
    ///
    /// Any open preview is closed first so no state leaks across pages.
    pub fn set_overlay(&mut self, overlay: Option<Overlay>) {
        self.close();
        self.overlay = overlay;
        self.scroll.restore();
        self.active_group.clear();
        self.active_index = None;
    }

    /// Sets the alt text used for untitled items. Applies from the next render.
    pub fn set_fallback_alt(&mut self, label: impl Into<String>) {
        self.fallback_alt = label.into();
    }

    /// Opens the overlay on `group[index]`.
    ///
    /// `index` is clamped into the group, never wrapped. Does nothing when the
    /// group is empty or the overlay root or its image element is missing.
    /// Returns whether the overlay was opened.
    pub fn open_at(&mut self, group: Vec<PreviewItem>, index: isize) -> bool {
        if !self.can_render() || group.is_empty() {
            return false;
        }
        self.active_group = group;
        self.show_at(index);
        true
    }

    /// Resolves the group of the activated trigger and opens it at the
    /// trigger's position.
    pub fn activate(&mut self, registry: &TriggerRegistry, trigger: TriggerId) -> bool {
        match registry.resolve_for(trigger) {
            Some(resolved) => {
                let position = isize::try_from(resolved.position).unwrap_or(isize::MAX);
                self.open_at(resolved.items, position)
            }
            None => false,
        }
    }

    /// Hides the overlay, restores scrolling and forgets the active group.
    ///
    /// Safe to call when already closed.
    pub fn close(&mut self) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        overlay.hide();
        self.scroll.restore();
        self.active_group.clear();
        self.active_index = None;
        tracing::debug!("preview closed");
    }

    /// Steps forward, wrapping from the last item to the first.
    pub fn next(&mut self) {
        let len = self.active_group.len();
        if len <= 1 {
            return;
        }
        let current = self.active_index.unwrap_or(0);
        self.show_at(to_isize((current + 1) % len));
    }

    /// Steps backward, wrapping from the first item to the last.
    pub fn previous(&mut self) {
        let len = self.active_group.len();
        if len <= 1 {
            return;
        }
        let current = self.active_index.unwrap_or(0);
        self.show_at(to_isize((current + len - 1) % len));
    }

    /// Applies a bound command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Close => self.close(),
            Command::Next => self.next(),
            Command::Previous => self.previous(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.as_ref().is_some_and(Overlay::is_open)
    }

    /// Position of the active item, `None` while closed.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Position of the active item with `-1` standing for "closed".
    #[must_use]
    pub fn active_index_raw(&self) -> isize {
        self.active_index.map_or(-1, to_isize)
    }

    #[must_use]
    pub fn active_group(&self) -> &[PreviewItem] {
        &self.active_group
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn background_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    fn can_render(&self) -> bool {
        self.overlay.as_ref().is_some_and(Overlay::has_image)
    }

    /// Renders the clamped `index` of the active group and shows the overlay.
    fn show_at(&mut self, index: isize) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        let Some(last) = self.active_group.len().checked_sub(1) else {
            return;
        };
        let clamped = usize::try_from(index.max(0)).unwrap_or(0).min(last);
        self.active_index = Some(clamped);

        let item = &self.active_group[clamped];
        overlay.render(item, &self.fallback_alt);
        overlay.show();
        overlay.set_nav_visible(self.active_group.len() > 1);
        self.scroll.lock();

        tracing::debug!(
            index = clamped,
            group = %item.group,
            ungrouped = item.group.is_single(),
            len = self.active_group.len(),
            "preview shown"
        );
    }
}

impl Default for PreviewNavigator {
    fn default() -> Self {
        Self::new(None)
    }
}

fn to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::overlay::OverlayParts;
    use crate::preview::trigger::{Trigger, TriggerKind};

    fn item(image: &str, title: &str) -> PreviewItem {
        PreviewItem::from_attrs(Some(image), Some(title), None, Some("g"))
    }

    fn group(n: usize) -> Vec<PreviewItem> {
        (0..n)
            .map(|i| item(&format!("{i}.jpg"), &format!("#{i}")))
            .collect()
    }

    fn navigator() -> PreviewNavigator {
        PreviewNavigator::new(Some(Overlay::new(OverlayParts::default())))
    }

    fn rendered_src(nav: &PreviewNavigator) -> &str {
        nav.overlay().expect("overlay present").image_src()
    }

    #[test]
    fn new_navigator_is_closed() {
        let nav = navigator();
        assert!(!nav.is_open());
        assert_eq!(nav.active_index(), None);
        assert_eq!(nav.active_index_raw(), -1);
        assert!(nav.active_group().is_empty());
        assert!(!nav.background_scroll_locked());
    }

    #[test]
    fn open_at_clamps_out_of_range_indices() {
        for n in 1..=4 {
            let mut nav = navigator();
            assert!(nav.open_at(group(n), -3));
            assert_eq!(nav.active_index(), Some(0));

            assert!(nav.open_at(group(n), n as isize + 5));
            assert_eq!(nav.active_index(), Some(n - 1));

            assert!(nav.open_at(group(n), n as isize - 1));
            assert_eq!(nav.active_index(), Some(n - 1));
        }
    }

    #[test]
    fn open_at_renders_shows_and_locks_scroll() {
        let mut nav = navigator();
        nav.open_at(group(2), 1);

        let overlay = nav.overlay().expect("overlay present");
        assert!(overlay.is_open());
        assert!(!overlay.aria_hidden());
        assert_eq!(overlay.image_src(), "1.jpg");
        assert_eq!(overlay.title(), Some("#1"));
        assert!(nav.background_scroll_locked());
    }

    #[test]
    fn open_at_with_empty_group_stays_closed() {
        let mut nav = navigator();
        assert!(!nav.open_at(Vec::new(), 0));
        assert!(!nav.is_open());
        assert_eq!(nav.active_index(), None);
        assert!(!nav.background_scroll_locked());
    }

    #[test]
    fn next_wraps_through_group() {
        let mut nav = navigator();
        nav.open_at(group(3), 0);
        let mut seen = Vec::new();
        for _ in 0..7 {
            nav.next();
            seen.push(nav.active_index().expect("open"));
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn previous_wraps_in_reverse() {
        let mut nav = navigator();
        nav.open_at(group(3), 0);
        let mut seen = Vec::new();
        for _ in 0..4 {
            nav.previous();
            seen.push(nav.active_index().expect("open"));
        }
        assert_eq!(seen, vec![2, 1, 0, 2]);
    }

    #[test]
    fn single_item_group_ignores_stepping() {
        let mut nav = navigator();
        nav.open_at(group(1), 0);
        let before = nav.overlay().cloned();

        nav.next();
        nav.previous();

        assert_eq!(nav.active_index(), Some(0));
        assert_eq!(nav.overlay().cloned(), before);
        let overlay = nav.overlay().expect("overlay present");
        assert!(!overlay.previous_visible());
        assert!(!overlay.next_visible());
    }

    #[test]
    fn multi_item_group_shows_controls() {
        let mut nav = navigator();
        nav.open_at(group(2), 0);
        let overlay = nav.overlay().expect("overlay present");
        assert!(overlay.previous_visible());
        assert!(overlay.next_visible());
    }

    #[test]
    fn stepping_keeps_the_active_group() {
        let mut nav = navigator();
        let g = group(3);
        nav.open_at(g.clone(), 0);
        nav.next();
        assert_eq!(nav.active_group(), g.as_slice());
    }

    #[test]
    fn close_resets_state_and_is_idempotent() {
        let mut nav = navigator();
        nav.open_at(group(3), 2);

        nav.close();
        let once = nav.clone();
        nav.close();

        assert_eq!(nav, once);
        assert!(!nav.is_open());
        assert!(nav.active_group().is_empty());
        assert_eq!(nav.active_index_raw(), -1);
        assert!(!nav.background_scroll_locked());
        assert!(nav.overlay().expect("overlay present").aria_hidden());
    }

    #[test]
    fn close_on_fresh_navigator_is_harmless() {
        let mut nav = navigator();
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn missing_overlay_makes_everything_a_no_op() {
        let mut nav = PreviewNavigator::new(None);
        assert!(!nav.open_at(group(2), 0));
        nav.next();
        nav.previous();
        nav.close();
        assert!(!nav.is_open());
        assert_eq!(nav.active_index(), None);
        assert!(!nav.background_scroll_locked());
    }

    #[test]
    fn missing_image_element_prevents_opening() {
        let parts = OverlayParts {
            image: false,
            ..OverlayParts::default()
        };
        let mut nav = PreviewNavigator::new(Some(Overlay::new(parts)));
        assert!(!nav.open_at(group(2), 0));
        assert!(!nav.is_open());
    }

    #[test]
    fn two_item_scenario_wraps_back_to_first() {
        let mut nav = navigator();
        nav.open_at(vec![item("a.jpg", "A"), item("b.jpg", "B")], 0);
        assert_eq!(rendered_src(&nav), "a.jpg");
        assert_eq!(nav.overlay().and_then(Overlay::title), Some("A"));

        nav.next();
        assert_eq!(rendered_src(&nav), "b.jpg");
        assert_eq!(nav.overlay().and_then(Overlay::title), Some("B"));

        nav.next();
        assert_eq!(rendered_src(&nav), "a.jpg");
        assert_eq!(nav.overlay().and_then(Overlay::title), Some("A"));
    }

    #[test]
    fn activate_opens_trigger_group_at_its_position() {
        let mut registry = TriggerRegistry::new();
        registry.bind(vec![
            Trigger {
                id: TriggerId(0),
                kind: TriggerKind::Button,
                item: item("a.jpg", "A"),
            },
            Trigger {
                id: TriggerId(1),
                kind: TriggerKind::Generic,
                item: item("x.jpg", "X"),
            },
            Trigger {
                id: TriggerId(2),
                kind: TriggerKind::Button,
                item: item("b.jpg", "B"),
            },
        ]);

        let mut nav = navigator();
        assert!(nav.activate(&registry, TriggerId(2)));
        assert_eq!(nav.active_index(), Some(1));
        assert_eq!(nav.active_group().len(), 2);
        assert_eq!(rendered_src(&nav), "b.jpg");

        assert!(nav.activate(&registry, TriggerId(1)));
        assert_eq!(nav.active_group().len(), 1);
        assert!(!nav.overlay().expect("overlay present").next_visible());
    }

    #[test]
    fn lone_ungrouped_trigger_scenario() {
        let mut registry = TriggerRegistry::new();
        registry.bind(vec![Trigger {
            id: TriggerId(0),
            kind: TriggerKind::Generic,
            item: PreviewItem::from_attrs(Some("solo.jpg"), None, None, None),
        }]);

        let mut nav = navigator();
        assert!(nav.activate(&registry, TriggerId(0)));
        assert_eq!(nav.active_group().len(), 1);

        let overlay = nav.overlay().expect("overlay present");
        assert!(!overlay.previous_visible());
        assert!(!overlay.next_visible());
        assert_eq!(overlay.image_alt(), DEFAULT_FALLBACK_ALT);

        nav.next();
        nav.previous();
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn fallback_alt_is_configurable() {
        let mut nav = navigator();
        nav.set_fallback_alt("Aperçu");
        nav.open_at(vec![PreviewItem::from_attrs(Some("a.jpg"), None, None, None)], 0);
        assert_eq!(nav.overlay().map(Overlay::image_alt), Some("Aperçu"));
    }

    #[test]
    fn set_overlay_closes_open_preview() {
        let mut nav = navigator();
        nav.open_at(group(2), 0);
        nav.set_overlay(None);
        assert!(!nav.is_open());
        assert!(nav.active_group().is_empty());
        assert!(!nav.background_scroll_locked());
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut nav = navigator();
        nav.open_at(group(2), 0);
        nav.apply(Command::Next);
        assert_eq!(nav.active_index(), Some(1));
        nav.apply(Command::Previous);
        assert_eq!(nav.active_index(), Some(0));
        nav.apply(Command::Close);
        assert!(!nav.is_open());
    }
}
