// SPDX-License-Identifier: MPL-2.0
//! Preview triggers and group resolution.
//!
//! A page carries two independent trigger conventions: preview buttons and
//! generic preview elements. Each convention is bound into its own list and
//! groups are only ever resolved within one list, so a button and a generic
//! element sharing a group name never navigate together.

use super::item::{GroupKey, PreviewItem};
use serde::{Deserialize, Serialize};

/// The marker convention a trigger was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerKind {
    /// Class-style marker (`.js-preview`), used by project preview buttons.
    #[default]
    Button,
    /// Boolean data attribute marker (`data-preview="true"`).
    Generic,
}

/// Identity of a trigger in document order across the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub usize);

/// A bound, clickable preview trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub id: TriggerId,
    pub kind: TriggerKind,
    pub item: PreviewItem,
}

/// The group an activated trigger belongs to, resolved at activation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub items: Vec<PreviewItem>,
    /// Position of the activated trigger inside `items`.
    pub position: usize,
}

/// Bound triggers, one list per [`TriggerKind`], each in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerRegistry {
    buttons: Vec<Trigger>,
    generic: Vec<Trigger>,
}

impl TriggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds every trigger, routing each into the list of its kind.
    ///
    /// Replaces whatever was bound before so the registry always mirrors the
    /// current page.
    pub fn bind<I>(&mut self, triggers: I)
    where
        I: IntoIterator<Item = Trigger>,
    {
        self.buttons.clear();
        self.generic.clear();
        for trigger in triggers {
            self.list_mut(trigger.kind).push(trigger);
        }
    }

    /// Returns the bound triggers of one kind.
    #[must_use]
    pub fn triggers(&self, kind: TriggerKind) -> &[Trigger] {
        match kind {
            TriggerKind::Button => &self.buttons,
            TriggerKind::Generic => &self.generic,
        }
    }

    /// Looks a trigger up by id in either list.
    #[must_use]
    pub fn get(&self, id: TriggerId) -> Option<&Trigger> {
        self.buttons
            .iter()
            .chain(self.generic.iter())
            .find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len() + self.generic.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty() && self.generic.is_empty()
    }

    /// Resolves the group of the trigger with the given id and the trigger's
    /// position inside it.
    ///
    /// Returns `None` if the trigger is not bound.
    #[must_use]
    pub fn resolve_for(&self, id: TriggerId) -> Option<ResolvedGroup> {
        let trigger = self.get(id)?;
        let members: Vec<&Trigger> =
            resolve_group(self.triggers(trigger.kind), &trigger.item.group).collect();
        let position = members.iter().position(|t| t.id == id)?;
        Some(ResolvedGroup {
            items: members.into_iter().map(|t| t.item.clone()).collect(),
            position,
        })
    }

    fn list_mut(&mut self, kind: TriggerKind) -> &mut Vec<Trigger> {
        match kind {
            TriggerKind::Button => &mut self.buttons,
            TriggerKind::Generic => &mut self.generic,
        }
    }
}

/// Filters `triggers` down to those carrying `group`, preserving order.
pub fn resolve_group<'a>(
    triggers: &'a [Trigger],
    group: &'a GroupKey,
) -> impl Iterator<Item = &'a Trigger> + 'a {
    triggers.iter().filter(move |t| &t.item.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger(id: usize, kind: TriggerKind, image: &str, group: Option<&str>) -> Trigger {
        Trigger {
            id: TriggerId(id),
            kind,
            item: PreviewItem::from_attrs(Some(image), None, None, group),
        }
    }

    fn images(items: &[PreviewItem]) -> Vec<&str> {
        items.iter().map(|i| i.image.as_str()).collect()
    }

    fn sample_registry() -> TriggerRegistry {
        let mut registry = TriggerRegistry::new();
        registry.bind(vec![
            trigger(0, TriggerKind::Button, "a.jpg", Some("shots")),
            trigger(1, TriggerKind::Button, "b.jpg", Some("other")),
            trigger(2, TriggerKind::Generic, "c.jpg", Some("shots")),
            trigger(3, TriggerKind::Button, "d.jpg", Some("shots")),
            trigger(4, TriggerKind::Button, "e.jpg", None),
        ]);
        registry
    }

    #[test]
    fn bind_routes_triggers_by_kind() {
        let registry = sample_registry();
        assert_eq!(registry.triggers(TriggerKind::Button).len(), 4);
        assert_eq!(registry.triggers(TriggerKind::Generic).len(), 1);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn resolve_group_keeps_document_order() {
        let registry = sample_registry();
        let key = GroupKey::from_attr(Some("shots"));
        let group: Vec<&str> = resolve_group(
            registry.triggers(TriggerKind::Button),
            &key,
        )
        .map(|t| t.item.image.as_str())
        .collect();
        assert_eq!(group, vec!["a.jpg", "d.jpg"]);
    }

    #[test]
    fn kinds_are_never_cross_grouped() {
        let registry = sample_registry();
        let generic = registry.resolve_for(TriggerId(2)).expect("bound trigger");
        assert_eq!(images(&generic.items), vec!["c.jpg"]);
        assert_eq!(generic.position, 0);
    }

    #[test]
    fn resolve_for_reports_position_inside_group() {
        let registry = sample_registry();
        let resolved = registry.resolve_for(TriggerId(3)).expect("bound trigger");
        assert_eq!(images(&resolved.items), vec!["a.jpg", "d.jpg"]);
        assert_eq!(resolved.position, 1);
    }

    #[test]
    fn lone_ungrouped_trigger_resolves_to_group_of_one() {
        let registry = sample_registry();
        let resolved = registry.resolve_for(TriggerId(4)).expect("bound trigger");
        assert_eq!(resolved.items.len(), 1);
        assert_eq!(resolved.position, 0);
        assert!(resolved.items[0].group.is_single());
    }

    #[test]
    fn resolve_for_unknown_trigger_is_none() {
        let registry = sample_registry();
        assert!(registry.resolve_for(TriggerId(99)).is_none());
    }

    #[test]
    fn rebinding_replaces_previous_triggers() {
        let mut registry = sample_registry();
        registry.bind(vec![trigger(9, TriggerKind::Generic, "z.jpg", None)]);
        assert!(registry.triggers(TriggerKind::Button).is_empty());
        assert_eq!(registry.len(), 1);
        assert!(registry.get(TriggerId(0)).is_none());
    }
}
