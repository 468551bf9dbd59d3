// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is laid out as navbar, projects and gallery. While a preview is
//! open the overlay is stacked on top and captures every pointer event, which
//! keeps the page behind it from scrolling.

use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::page::Page;
use crate::portfolio::FilterBar;
use crate::preview::PreviewNavigator;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, NavbarLayout, NavbarState};
use crate::ui::{gallery, preview_modal, projects, styles};
use iced::widget::{button, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: Option<&'a Page>,
    pub page_error: Option<&'a Error>,
    pub navbar_layout: Option<&'a NavbarLayout>,
    pub navbar: NavbarState,
    pub filter: &'a FilterBar,
    pub navigator: &'a PreviewNavigator,
    /// i18n key of a warning to show above the page.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = ctx.page.map(Page::title).unwrap_or_default();
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        title,
        layout: ctx.navbar_layout,
        state: ctx.navbar,
    })
    .map(Message::Navbar);

    let mut column = Column::new().push(navbar_view);
    if let Some(key) = ctx.notice {
        column = column.push(view_notice(ctx.i18n, key));
    }

    let body = match ctx.page {
        Some(page) => view_page(&ctx, page),
        None => view_empty_state(ctx.i18n, ctx.page_error),
    };
    column = column.push(body);

    let base: Element<'_, Message> = column.width(Length::Fill).height(Length::Fill).into();

    let overlay = match (ctx.page, ctx.navigator.overlay()) {
        (Some(page), Some(overlay)) if ctx.navigator.background_scroll_locked() => {
            preview_modal::view(preview_modal::ViewContext {
                i18n: ctx.i18n,
                overlay,
                page,
            })
        }
        _ => None,
    };

    match overlay {
        Some(modal) => Stack::new()
            .push(base)
            .push(modal.map(Message::Preview))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base,
    }
}

fn view_page<'a>(ctx: &ViewContext<'a>, page: &'a Page) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .width(Length::Fill);

    if let Some(section) = projects::view(projects::ViewContext {
        i18n: ctx.i18n,
        page,
        filter: ctx.filter,
    }) {
        content = content.push(section.map(Message::Projects));
    }

    if let Some(section) = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        page,
    }) {
        content = content.push(section.map(Message::Gallery));
    }

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_empty_state<'a>(i18n: &'a I18n, error: Option<&'a Error>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("empty-state-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("empty-state-hint")).size(typography::BODY));

    if let Some(error) = error {
        content = content.push(view_error(i18n, error));
    }

    content = content.push(
        button(Text::new(i18n.tr("open-page-button")))
            .on_press(Message::OpenPageDialog)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_error<'a>(i18n: &'a I18n, error: &'a Error) -> Element<'a, Message> {
    let (headline, details) = match error {
        Error::Page(page_error) => (i18n.tr(page_error.i18n_key()), page_error.to_string()),
        other => (i18n.tr("error-page-unreadable"), other.to_string()),
    };
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(headline).size(typography::BODY))
            .push(
                Text::new(i18n.tr_with_args("error-details", &[("details", details.as_str())]))
                    .size(typography::CAPTION),
            ),
    )
    .padding(spacing::SM)
    .style(styles::container::error_banner)
    .into()
}

fn view_notice<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr(key)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(i18n.tr("preview-close")))
                    .on_press(Message::DismissNotice)
                    .style(styles::button::link),
            ),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(styles::container::error_banner)
    .into()
}
