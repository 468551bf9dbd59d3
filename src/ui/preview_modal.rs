// SPDX-License-Identifier: MPL-2.0
//! The preview overlay: backdrop, image, info panel and navigation controls.
//!
//! Rendering is driven entirely by the [`Overlay`] state the navigator keeps;
//! this module only turns it into widgets and reports clicks back.

use crate::i18n::fluent::I18n;
use crate::page::{ImageSource, Page};
use crate::preview::{Command, Overlay};
use crate::ui::design_tokens::{opacity, palette::WHITE, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, container, mouse_area, opaque, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment::Vertical, Element, Length};

/// Close markers whose id ends with this suffix act on the backdrop.
const BACKDROP_SUFFIX: &str = "backdrop";

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub overlay: &'a Overlay,
    pub page: &'a Page,
}

/// Messages emitted by the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A close marker was clicked.
    CloseMarker(String),
    Previous,
    Next,
    ImageClicked,
}

impl Message {
    /// The navigator command this message maps to, if any.
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        match self {
            Message::CloseMarker(_) => Some(Command::Close),
            Message::Previous => Some(Command::Previous),
            Message::Next => Some(Command::Next),
            Message::ImageClicked => None,
        }
    }
}

/// Splits close markers into the backdrop marker and the close buttons.
fn split_markers(markers: &[String]) -> (Option<&String>, Vec<&String>) {
    let backdrop = markers.iter().find(|id| id.ends_with(BACKDROP_SUFFIX));
    let buttons = markers
        .iter()
        .filter(|id| !id.ends_with(BACKDROP_SUFFIX))
        .collect();
    (backdrop, buttons)
}

/// Render the overlay on top of the page. Returns `None` while closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.overlay.is_open() {
        return None;
    }
    let (backdrop_marker, close_buttons) = split_markers(ctx.page.close_markers());

    let backdrop = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);
    let backdrop: Element<'a, Message> = match backdrop_marker {
        Some(id) => mouse_area(backdrop)
            .on_press(Message::CloseMarker(id.clone()))
            .into(),
        None => backdrop.into(),
    };

    let dialog = Container::new(build_dialog(&ctx, &close_buttons))
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::MD)
        .style(styles::overlay::dialog);

    let centered = Container::new(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    Some(opaque(Stack::new().push(backdrop).push(centered)))
}

fn build_dialog<'a>(ctx: &ViewContext<'a>, close_buttons: &[&'a String]) -> Element<'a, Message> {
    let overlay = ctx.overlay;
    let mut column = Column::new().spacing(spacing::SM).width(Length::Fill);

    if !close_buttons.is_empty() {
        let row = close_buttons.iter().fold(
            Row::new()
                .spacing(spacing::XS)
                .push(Space::new().width(Length::Fill)),
            |row, id| {
                row.push(
                    button(Text::new(ctx.i18n.tr("preview-close")))
                        .on_press(Message::CloseMarker((*id).clone()))
                        .style(styles::button::overlay(
                            WHITE,
                            opacity::OVERLAY_MEDIUM,
                            opacity::OVERLAY_HOVER,
                        )),
                )
            },
        );
        column = column.push(row);
    }

    let mut stage = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    if overlay.previous_visible() {
        stage = stage.push(nav_button(ctx.i18n.tr("preview-previous"), Message::Previous));
    }
    stage = stage.push(build_image(ctx));
    if overlay.next_visible() {
        stage = stage.push(nav_button(ctx.i18n.tr("preview-next"), Message::Next));
    }
    column = column.push(stage);

    if overlay.body_visible() {
        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = overlay.title().filter(|t| !t.is_empty()) {
            body = body.push(Text::new(title).size(typography::TITLE_MD));
        }
        if let Some(description) = overlay.description().filter(|d| !d.is_empty()) {
            body = body.push(Text::new(description).size(typography::BODY));
        }
        column = column.push(
            Container::new(body)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::panel),
        );
    }

    column.into()
}

fn nav_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .height(Length::Fixed(sizing::NAV_ARROW))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .into()
}

fn build_image<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let overlay = ctx.overlay;
    let content: Element<'a, Message> = match ctx.page.resolve_image(overlay.image_src()) {
        ImageSource::Local(path) => Image::new(Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_MAX_HEIGHT))
            .into(),
        ImageSource::Remote(url) => placeholder(
            ctx.i18n
                .tr_with_args("preview-image-remote", &[("url", url.as_str())]),
        ),
        ImageSource::Empty => placeholder(ctx.i18n.tr("preview-image-missing")),
    };

    let clickable = mouse_area(content)
        .on_press(Message::ImageClicked)
        .interaction(iced::mouse::Interaction::Pointer);

    tooltip(
        clickable,
        Container::new(Text::new(overlay.image_alt()).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_IMAGE_MAX_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::MODAL_IMAGE_MAX_HEIGHT))
        .into()
}
