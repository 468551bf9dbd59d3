// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` renders a portfolio page described by a TOML manifest and
//! drives its interactions with the Iced GUI framework.
//!
//! The page logic is independent of the UI: [`preview`] holds the grouped
//! modal preview navigator, [`portfolio`] the tag filter and [`page`] the
//! manifest loader. [`app`] and [`ui`] wire them into a desktop window, with
//! Fluent translations from [`i18n`] and user settings from [`config`].

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
pub mod portfolio;
pub mod preview;
pub mod ui;
