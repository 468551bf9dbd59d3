// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::{gallery, navbar, preview_modal, projects};
use iced::keyboard;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Projects(projects::Message),
    Gallery(gallery::Message),
    Preview(preview_modal::Message),
    /// A key bound to preview navigation was pressed.
    KeyPressed(keyboard::Key),
    /// Trigger the open page dialog.
    OpenPageDialog,
    /// Result from the open page dialog.
    OpenPageDialogResult(Option<PathBuf>),
    /// Result from handing the preview image to the system viewer.
    ImageOpened(Result<(), Error>),
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional page manifest to open on startup.
    pub page_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
