// SPDX-License-Identifier: MPL-2.0
//! Project cards and the filter buttons above them.

use crate::i18n::fluent::I18n;
use crate::page::{Page, TriggerMarkup};
use crate::portfolio::{FilterBar, ProjectCard};
use crate::preview::{TriggerId, TriggerKind};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the projects section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub filter: &'a FilterBar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FilterSelected(usize),
    Preview(TriggerId),
}

/// Label shown on a trigger element.
pub(crate) fn trigger_label(markup: &TriggerMarkup, i18n: &I18n) -> String {
    markup
        .label
        .clone()
        .or_else(|| markup.title.clone().filter(|t| !t.trim().is_empty()))
        .unwrap_or_else(|| i18n.tr("preview-open-button"))
}

/// Render the filter bar and the visible cards. Returns `None` for pages
/// without projects.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let projects = &ctx.page.manifest().projects;
    if projects.is_empty() {
        return None;
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("projects-heading")).size(typography::TITLE_SM));

    if !ctx.filter.buttons().is_empty() {
        column = column.push(build_filter_row(ctx.filter));
    }

    let cards = projects
        .iter()
        .enumerate()
        .filter(|(index, _)| ctx.filter.is_visible(*index))
        .fold(Column::new().spacing(spacing::SM), |cards, (_, card)| {
            cards.push(build_card(&ctx, card))
        });
    column = column.push(cards);

    if ctx.filter.visible_count() == 0 {
        column = column.push(Text::new(ctx.i18n.tr("filter-empty")).size(typography::BODY));
    }

    Some(column.into())
}

fn build_filter_row<'a>(filter: &'a FilterBar) -> Element<'a, Message> {
    filter
        .buttons()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, b)| {
            let style = if filter.is_active(index) {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(b.label.as_str()))
                    .on_press(Message::FilterSelected(index))
                    .padding([spacing::XXS, spacing::SM])
                    .style(style),
            )
        })
        .wrap()
        .into()
}

fn build_card<'a>(ctx: &ViewContext<'a>, card: &'a ProjectCard) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(card.title.as_str()).size(typography::TITLE_MD));

    if !card.summary.is_empty() {
        content = content.push(Text::new(card.summary.as_str()).size(typography::BODY));
    }

    let tags: Vec<&str> = card.tags().collect();
    if !tags.is_empty() {
        content = content.push(Text::new(tags.join(" · ")).size(typography::CAPTION));
    }

    let triggers = &ctx.page.manifest().triggers;
    let previews = card
        .previews
        .iter()
        .filter_map(|index| triggers.get(*index).map(|markup| (*index, markup)))
        .fold(Row::new().spacing(spacing::XS), |row, (index, markup)| {
            let style = match markup.kind {
                TriggerKind::Button => styles::button::primary,
                TriggerKind::Generic => styles::button::link,
            };
            row.push(
                button(Text::new(trigger_label(markup, ctx.i18n)))
                    .on_press(Message::Preview(TriggerId(index)))
                    .style(style),
            )
        });
    content = content.push(previews);

    Container::new(content)
        .padding(spacing::MD)
        .max_width(sizing::CARD_WIDTH * 2.0)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        [[triggers]]
        img = "a.jpg"
        title = "Shot A"

        [[triggers]]
        img = "b.jpg"
        label = "Open"

        [[triggers]]
        img = "c.jpg"

        [[projects]]
        title = "Essay"
        tags = "photo"
        previews = [0, 1, 2]

        [[projects]]
        title = "Compiler"
        tags = "code"

        [[filters]]
        label = "Photo"
        tag = "photo"
    "#;

    #[test]
    fn trigger_label_prefers_explicit_label_then_title() {
        let i18n = I18n::default();
        let page = Page::parse(PAGE, "/site").expect("page parses");
        let triggers = &page.manifest().triggers;
        assert_eq!(trigger_label(&triggers[0], &i18n), "Shot A");
        assert_eq!(trigger_label(&triggers[1], &i18n), "Open");
        assert_eq!(
            trigger_label(&triggers[2], &i18n),
            i18n.tr("preview-open-button")
        );
    }

    #[test]
    fn projects_view_renders() {
        let i18n = I18n::default();
        let page = Page::parse(PAGE, "/site").expect("page parses");
        let mut filter = FilterBar::new(page.manifest().filters.clone(), &page.manifest().projects);
        assert!(view(ViewContext {
            i18n: &i18n,
            page: &page,
            filter: &filter,
        })
        .is_some());

        filter.activate(0, &page.manifest().projects);
        assert!(view(ViewContext {
            i18n: &i18n,
            page: &page,
            filter: &filter,
        })
        .is_some());
    }

    #[test]
    fn page_without_projects_renders_nothing() {
        let i18n = I18n::default();
        let page = Page::parse("", "/site").expect("page parses");
        let filter = FilterBar::default();
        assert!(view(ViewContext {
            i18n: &i18n,
            page: &page,
            filter: &filter,
        })
        .is_none());
    }
}
