// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings for the preview overlay.
//!
//! The listener is global and always installed; it checks whether the
//! overlay is open on every key press instead of being attached and detached.

use super::navigator::{Command, PreviewNavigator};
use iced::keyboard::{key::Named, Key};

/// Maps a key to the navigator command bound to it.
#[must_use]
pub fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::Named(Named::Escape) => Some(Command::Close),
        Key::Named(Named::ArrowRight) => Some(Command::Next),
        Key::Named(Named::ArrowLeft) => Some(Command::Previous),
        _ => None,
    }
}

/// Routes a key press to the navigator.
///
/// Returns `true` if the key was consumed.
pub fn handle_key(navigator: &mut PreviewNavigator, key: &Key) -> bool {
    if !navigator.is_open() {
        return false;
    }
    match command_for_key(key) {
        Some(command) => {
            navigator.apply(command);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::item::PreviewItem;
    use crate::preview::overlay::{Overlay, OverlayParts};

    fn open_navigator(n: usize) -> PreviewNavigator {
        let mut nav = PreviewNavigator::new(Some(Overlay::new(OverlayParts::default())));
        let group = (0..n)
            .map(|i| PreviewItem::from_attrs(Some(&format!("{i}.jpg")), None, None, Some("g")))
            .collect();
        nav.open_at(group, 0);
        nav
    }

    #[test]
    fn bound_keys_map_to_commands() {
        assert_eq!(
            command_for_key(&Key::Named(Named::Escape)),
            Some(Command::Close)
        );
        assert_eq!(
            command_for_key(&Key::Named(Named::ArrowRight)),
            Some(Command::Next)
        );
        assert_eq!(
            command_for_key(&Key::Named(Named::ArrowLeft)),
            Some(Command::Previous)
        );
        assert_eq!(command_for_key(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(command_for_key(&Key::Character("n".into())), None);
    }

    #[test]
    fn arrows_step_while_open() {
        let mut nav = open_navigator(3);
        assert!(handle_key(&mut nav, &Key::Named(Named::ArrowRight)));
        assert_eq!(nav.active_index(), Some(1));
        assert!(handle_key(&mut nav, &Key::Named(Named::ArrowLeft)));
        assert!(handle_key(&mut nav, &Key::Named(Named::ArrowLeft)));
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn escape_closes() {
        let mut nav = open_navigator(2);
        assert!(handle_key(&mut nav, &Key::Named(Named::Escape)));
        assert!(!nav.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut nav = open_navigator(2);
        nav.close();
        assert!(!handle_key(&mut nav, &Key::Named(Named::ArrowRight)));
        assert!(!handle_key(&mut nav, &Key::Named(Named::Escape)));
        assert_eq!(nav.active_index(), None);
    }

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut nav = open_navigator(2);
        assert!(!handle_key(&mut nav, &Key::Named(Named::Enter)));
        assert_eq!(nav.active_index(), Some(0));
    }
}
