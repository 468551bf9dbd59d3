// SPDX-License-Identifier: MPL-2.0
//! Modal image preview: items, triggers, the overlay and the navigator
//! that drives it.

pub mod item;
pub mod keyboard;
pub mod navigator;
pub mod overlay;
pub mod trigger;

pub use item::{GroupKey, PreviewItem};
pub use navigator::{Command, PreviewNavigator, DEFAULT_FALLBACK_ALT};
pub use overlay::{BackgroundScroll, Overlay, OverlayParts};
pub use trigger::{ResolvedGroup, Trigger, TriggerId, TriggerKind, TriggerRegistry};
