// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one takes a `ViewContext` borrowing the state it renders and emits its own
//! `Message` type, which the application maps into its top-level message.
//!
//! # Components
//!
//! - [`navbar`] - Top bar with the burger menu toggle
//! - [`projects`] - Project cards and filter buttons
//! - [`gallery`] - Preview triggers outside of project cards
//! - [`preview_modal`] - The preview overlay
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod preview_modal;
pub mod projects;
pub mod styles;
pub mod theming;
