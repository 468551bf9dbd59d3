// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the preview
//! navigator and the navbar.
//!
//! The [`App`] struct wires together the domains (page manifest, preview
//! groups, tag filter, navbar) and translates messages into state changes.
//!
//! # Architecture
//!
//! - [`message`] - Message types and runtime flags
//! - [`update`] - Message handlers for each component
//! - [`view`] - View rendering
//! - [`subscription`] - Keyboard subscription
//! - [`paths`] - Config directory resolution

pub mod paths;

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::page::Page;
use crate::portfolio::FilterBar;
use crate::preview::{PreviewNavigator, TriggerRegistry};
use crate::ui::navbar::{NavbarLayout, NavbarState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state for the portfolio page.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    page: Option<Page>,
    /// Error from the last page load; shown in the empty state.
    page_error: Option<Error>,
    registry: TriggerRegistry,
    navigator: PreviewNavigator,
    navbar_layout: Option<NavbarLayout>,
    navbar: NavbarState,
    filter: FilterBar,
    /// i18n key of a dismissible warning.
    notice: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page.as_ref().map(Page::title))
            .field("preview_open", &self.navigator.is_open())
            .field("navbar_open", &self.navbar.is_open())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            theme_mode: ThemeMode::System,
            page: None,
            page_error: None,
            registry: TriggerRegistry::default(),
            navigator: PreviewNavigator::default(),
            navbar_layout: None,
            navbar: NavbarState::default(),
            filter: FilterBar::default(),
            notice: None,
        }
    }
}

impl App {
    /// Initializes application state and loads the page named by the flags,
    /// falling back to the last page that loaded successfully.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut navigator = PreviewNavigator::default();
        navigator.set_fallback_alt(i18n.tr("preview-fallback-alt"));

        let mut app = App {
            theme_mode: config.general.theme_mode,
            i18n,
            config,
            navigator,
            notice: config_warning,
            ..Self::default()
        };

        let startup_page = flags.page_path.map(PathBuf::from).or_else(|| {
            app.config
                .page
                .last_page
                .clone()
                .filter(|path| path.exists())
        });

        if let Some(path) = startup_page {
            update::load_page(&mut app.update_context(), &path);
        }

        (app, Task::none())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            page: &mut self.page,
            page_error: &mut self.page_error,
            registry: &mut self.registry,
            navigator: &mut self.navigator,
            navbar_layout: &mut self.navbar_layout,
            navbar: &mut self.navbar,
            filter: &mut self.filter,
            notice: &mut self.notice,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.page.as_ref().map(Page::title) {
            Some(title) if !title.trim().is_empty() => format!("{title} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_keyboard_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, projects_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message)
            }
            Message::KeyPressed(key) => update::handle_key_pressed(&mut ctx, &key),
            Message::OpenPageDialog => update::handle_open_page_dialog(
                ctx.config.page.last_page.clone(),
                ctx.i18n.tr("page-dialog-filter"),
            ),
            Message::OpenPageDialogResult(path) => {
                update::handle_open_page_dialog_result(&mut ctx, path)
            }
            Message::ImageOpened(result) => update::handle_image_opened(&mut ctx, result),
            Message::DismissNotice => {
                *ctx.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: self.page.as_ref(),
            page_error: self.page_error.as_ref(),
            navbar_layout: self.navbar_layout.as_ref(),
            navbar: self.navbar,
            filter: &self.filter,
            navigator: &self.navigator,
            notice: self.notice.as_deref(),
        })
    }
}
