// SPDX-License-Identifier: MPL-2.0
//! Triggers not attached to any project card, shown as thumbnails.

use crate::i18n::fluent::I18n;
use crate::page::{ImageSource, Page};
use crate::preview::TriggerId;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::projects::trigger_label;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Preview(TriggerId),
}

/// Render the loose triggers. Returns `None` when every trigger sits on a card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let loose = ctx.page.loose_triggers();
    if loose.is_empty() {
        return None;
    }
    let triggers = &ctx.page.manifest().triggers;

    let tiles = loose
        .into_iter()
        .filter_map(|index| triggers.get(index).map(|markup| (index, markup)))
        .fold(Row::new().spacing(spacing::SM), |row, (index, markup)| {
            let label = trigger_label(markup, ctx.i18n);
            let src = markup.img.as_deref().unwrap_or_default();
            let tile: Element<'a, Message> = match ctx.page.resolve_image(src) {
                ImageSource::Local(path) => Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Image::new(Handle::from_path(path))
                            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT)),
                    )
                    .push(Text::new(label).size(typography::CAPTION))
                    .into(),
                ImageSource::Remote(_) | ImageSource::Empty => {
                    Text::new(label).size(typography::BODY).into()
                }
            };
            row.push(
                button(tile)
                    .on_press(Message::Preview(TriggerId(index)))
                    .padding(spacing::XS)
                    .style(styles::button::link),
            )
        })
        .wrap();

    Some(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_SM))
            .push(tiles)
            .into(),
    )
}
