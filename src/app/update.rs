// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the slices of
//! application state it may touch, so the routing in `App::update` stays a
//! flat match.

use super::Message;
use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::page::Page;
use crate::portfolio::FilterBar;
use crate::preview::{keyboard as preview_keyboard, PreviewNavigator, TriggerId, TriggerRegistry};
use crate::ui::navbar::{self, Event as NavbarEvent, NavbarLayout, NavbarState};
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, preview_modal, projects};
use iced::{keyboard, Task};
use std::path::{Path, PathBuf};

/// i18n key of the notice shown when the system viewer cannot be launched.
pub const OPEN_ERROR_NOTICE: &str = "notification-open-error";

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub page: &'a mut Option<Page>,
    pub page_error: &'a mut Option<Error>,
    pub registry: &'a mut TriggerRegistry,
    pub navigator: &'a mut PreviewNavigator,
    pub navbar_layout: &'a mut Option<NavbarLayout>,
    pub navbar: &'a mut NavbarState,
    pub filter: &'a mut FilterBar,
    pub notice: &'a mut Option<String>,
}

impl UpdateContext<'_> {
    fn persist_config(&self) {
        if let Err(err) = config::save(self.config) {
            tracing::warn!(error = %err, "failed to save settings");
        }
    }
}

/// Loads a page manifest from disk and installs it on success.
///
/// On failure the previous page is dropped so the error is shown in place of
/// stale content.
pub fn load_page(ctx: &mut UpdateContext<'_>, path: &Path) {
    match Page::load_from_path(path) {
        Ok(page) => {
            install_page(ctx, page);
            if ctx.config.page.last_page.as_deref() != Some(path) {
                ctx.config.page.last_page = Some(path.to_path_buf());
                ctx.persist_config();
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load page");
            install_empty(ctx);
            *ctx.page_error = Some(err);
        }
    }
}

/// Wires a freshly loaded page into the navigator, navbar and filter bar.
pub fn install_page(ctx: &mut UpdateContext<'_>, page: Page) {
    *ctx.registry = page.registry();
    ctx.navigator.set_overlay(page.overlay());
    *ctx.navbar_layout = NavbarLayout::resolve(page.manifest().navbar.as_ref());
    ctx.navbar.close();
    *ctx.filter = FilterBar::new(page.manifest().filters.clone(), &page.manifest().projects);

    tracing::debug!(
        triggers = ctx.registry.len(),
        overlay = ctx.navigator.overlay().is_some(),
        navbar = ctx.navbar_layout.is_some(),
        filters = ctx.filter.is_enabled(),
        "page installed"
    );

    *ctx.page = Some(page);
    *ctx.page_error = None;
}

fn install_empty(ctx: &mut UpdateContext<'_>) {
    *ctx.registry = TriggerRegistry::default();
    ctx.navigator.set_overlay(None);
    *ctx.navbar_layout = None;
    ctx.navbar.close();
    *ctx.filter = FilterBar::default();
    *ctx.page = None;
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.navbar_layout.as_ref(), ctx.navbar) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::LinkActivated(href) => {
            tracing::debug!(%href, "navbar link activated");
            Task::none()
        }
        NavbarEvent::OpenPage => handle_open_page_dialog(
            ctx.config.page.last_page.clone(),
            ctx.i18n.tr("page-dialog-filter"),
        ),
        NavbarEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            ctx.persist_config();
            Task::none()
        }
    }
}

pub fn handle_projects_message(ctx: &mut UpdateContext<'_>, message: projects::Message) -> Task<Message> {
    match message {
        projects::Message::FilterSelected(index) => {
            if let Some(page) = ctx.page.as_ref() {
                ctx.filter.activate(index, &page.manifest().projects);
            }
        }
        projects::Message::Preview(trigger) => activate_trigger(ctx, trigger),
    }
    Task::none()
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::Preview(trigger) => activate_trigger(ctx, trigger),
    }
    Task::none()
}

fn activate_trigger(ctx: &mut UpdateContext<'_>, trigger: TriggerId) {
    // Pages without an overlay leave triggers inert
    let _ = ctx.navigator.activate(ctx.registry, trigger);
}

pub fn handle_preview_message(
    ctx: &mut UpdateContext<'_>,
    message: preview_modal::Message,
) -> Task<Message> {
    if let Some(command) = message.command() {
        ctx.navigator.apply(command);
        return Task::none();
    }

    match message {
        preview_modal::Message::ImageClicked => open_current_image(ctx),
        _ => Task::none(),
    }
}

/// What a click on the displayed image should open, if anything.
///
/// `None` when the setting is off, the preview is closed or the source is
/// empty. Relative sources resolve against the manifest directory.
pub fn image_open_target(ctx: &UpdateContext<'_>) -> Option<String> {
    if !ctx.config.preview.open_image_externally {
        return None;
    }
    let page = ctx.page.as_ref()?;
    let overlay = ctx.navigator.overlay().filter(|overlay| overlay.is_open())?;
    page.resolve_image(overlay.image_src()).as_open_target()
}

/// Hands the displayed image to the system viewer when enabled in settings.
fn open_current_image(ctx: &UpdateContext<'_>) -> Task<Message> {
    let Some(target) = image_open_target(ctx) else {
        return Task::none();
    };

    tracing::info!(%target, "opening preview image externally");
    Task::perform(
        async move { open::that_detached(&target).map_err(|err| Error::Open(err.to_string())) },
        Message::ImageOpened,
    )
}

pub fn handle_key_pressed(ctx: &mut UpdateContext<'_>, key: &keyboard::Key) -> Task<Message> {
    if preview_keyboard::handle_key(ctx.navigator, key) {
        tracing::trace!(?key, "preview key handled");
    }
    Task::none()
}

/// Opens the page picker, starting from the directory of the last page.
pub fn handle_open_page_dialog(last_page: Option<PathBuf>, filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter(filter_name, &["toml"]);

            if let Some(dir) = last_page.as_deref().and_then(Path::parent) {
                if dir.exists() {
                    dialog = dialog.set_directory(dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenPageDialogResult,
    )
}

pub fn handle_open_page_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_page(ctx, &path);
    Task::none()
}

pub fn handle_image_opened(ctx: &mut UpdateContext<'_>, result: Result<(), Error>) -> Task<Message> {
    if let Err(err) = result {
        tracing::warn!(error = %err, "failed to open preview image");
        *ctx.notice = Some(OPEN_ERROR_NOTICE.to_string());
    }
    Task::none()
}
