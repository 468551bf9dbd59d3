// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the burger menu toggle.
//!
//! The page declares its toggle and menu by element id. Two id conventions
//! are recognized, and each element is resolved on its own, so a page may mix
//! them. When either element is missing the menu feature stays inactive and
//! only the fixed actions (open page, theme) are shown.

use crate::i18n::fluent::I18n;
use crate::page::{NavLink, NavbarMarkup};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Toggle ids, most preferred first.
pub const TOGGLE_IDS: [&str; 2] = ["burger", "burger-toggle"];

/// Menu ids, most preferred first.
pub const MENU_IDS: [&str; 2] = ["navLinks", "navbar-links"];

/// The resolved toggle and menu of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarLayout {
    pub toggle: &'static str,
    pub menu: &'static str,
    pub links: Vec<NavLink>,
}

impl NavbarLayout {
    /// Resolves the navbar elements declared by a page.
    ///
    /// Returns `None` when the toggle or the menu cannot be found.
    #[must_use]
    pub fn resolve(markup: Option<&NavbarMarkup>) -> Option<Self> {
        let markup = markup?;
        let toggle = find_element(markup.toggle.as_deref(), TOGGLE_IDS)?;
        let menu = find_element(markup.menu.as_deref(), MENU_IDS)?;
        Some(Self {
            toggle,
            menu,
            links: markup.links.clone(),
        })
    }
}

fn find_element(declared: Option<&str>, candidates: [&'static str; 2]) -> Option<&'static str> {
    let declared = declared?;
    candidates.into_iter().find(|id| *id == declared)
}

/// Open state of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    open: bool,
}

impl NavbarState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Accessibility mirror of the open state.
    #[must_use]
    pub fn aria_expanded(self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub layout: Option<&'a NavbarLayout>,
    pub state: NavbarState,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkActivated(usize),
    OpenPage,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A menu link was followed; carries its `href`.
    LinkActivated(String),
    OpenPage,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
///
/// Menu messages are ignored when the page has no resolvable navbar.
pub fn update(message: Message, layout: Option<&NavbarLayout>, state: &mut NavbarState) -> Event {
    match message {
        Message::ToggleMenu => {
            if layout.is_some() {
                state.open = !state.open;
            }
            Event::None
        }
        Message::LinkActivated(index) => {
            let Some(link) = layout.and_then(|layout| layout.links.get(index)) else {
                return Event::None;
            };
            state.close();
            Event::LinkActivated(link.href.clone())
        }
        Message::OpenPage => {
            state.close();
            Event::OpenPage
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if let Some(layout) = ctx.layout {
        if ctx.state.is_open() {
            content = content.push(build_menu(layout));
        }
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    if ctx.layout.is_some() {
        let toggle_style = if ctx.state.aria_expanded() {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row = row.push(
            button(Text::new(ctx.i18n.tr("navbar-menu-toggle")))
                .on_press(Message::ToggleMenu)
                .padding([spacing::XXS, spacing::SM])
                .style(toggle_style),
        );
    }

    row = row
        .push(Text::new(ctx.title.to_string()).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("theme-toggle")))
                .on_press(Message::ToggleTheme)
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(ctx.i18n.tr("open-page-button")))
                .on_press(Message::OpenPage)
                .style(styles::button::primary),
        );

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

fn build_menu<'a>(layout: &'a NavbarLayout) -> Element<'a, Message> {
    let links = layout
        .links
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XXS), |column, (index, link)| {
            column.push(
                button(Text::new(link.label.as_str()))
                    .on_press(Message::LinkActivated(index))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::link),
            )
        });

    Container::new(links)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn markup(toggle: Option<&str>, menu: Option<&str>) -> NavbarMarkup {
        NavbarMarkup {
            toggle: toggle.map(str::to_string),
            menu: menu.map(str::to_string),
            links: vec![
                NavLink {
                    label: "Projects".into(),
                    href: "#projects".into(),
                },
                NavLink {
                    label: "Contact".into(),
                    href: "#contact".into(),
                },
            ],
        }
    }

    #[test]
    fn primary_ids_resolve() {
        let layout = NavbarLayout::resolve(Some(&markup(Some("burger"), Some("navLinks"))))
            .expect("navbar resolves");
        assert_eq!(layout.toggle, "burger");
        assert_eq!(layout.menu, "navLinks");
    }

    #[test]
    fn fallback_ids_resolve_independently() {
        let layout =
            NavbarLayout::resolve(Some(&markup(Some("burger-toggle"), Some("navLinks"))))
                .expect("mixed ids resolve");
        assert_eq!(layout.toggle, "burger-toggle");
        assert_eq!(layout.menu, "navLinks");
    }

    #[test]
    fn missing_element_disables_navbar() {
        assert!(NavbarLayout::resolve(None).is_none());
        assert!(NavbarLayout::resolve(Some(&markup(Some("burger"), None))).is_none());
        assert!(NavbarLayout::resolve(Some(&markup(Some("menu-btn"), Some("navLinks")))).is_none());
    }

    #[test]
    fn swapped_ids_do_not_resolve() {
        assert!(NavbarLayout::resolve(Some(&markup(Some("navLinks"), Some("burger")))).is_none());
        assert!(
            NavbarLayout::resolve(Some(&markup(Some("navbar-links"), Some("burger-toggle"))))
                .is_none()
        );
    }

    #[test]
    fn toggle_flips_state_and_aria() {
        let layout = NavbarLayout::resolve(Some(&markup(Some("burger"), Some("navLinks"))));
        let mut state = NavbarState::default();
        assert!(!state.aria_expanded());

        let event = update(Message::ToggleMenu, layout.as_ref(), &mut state);
        assert_eq!(event, Event::None);
        assert!(state.is_open());
        assert!(state.aria_expanded());

        update(Message::ToggleMenu, layout.as_ref(), &mut state);
        assert!(!state.is_open());
        assert!(!state.aria_expanded());
    }

    #[test]
    fn link_closes_menu_and_emits_href() {
        let layout = NavbarLayout::resolve(Some(&markup(Some("burger"), Some("navLinks"))));
        let mut state = NavbarState::default();
        update(Message::ToggleMenu, layout.as_ref(), &mut state);

        let event = update(Message::LinkActivated(1), layout.as_ref(), &mut state);
        assert_eq!(event, Event::LinkActivated("#contact".into()));
        assert!(!state.is_open());
        assert!(!state.aria_expanded());
    }

    #[test]
    fn menu_messages_are_ignored_without_navbar() {
        let mut state = NavbarState::default();
        update(Message::ToggleMenu, None, &mut state);
        assert!(!state.is_open());
        assert_eq!(
            update(Message::LinkActivated(0), None, &mut state),
            Event::None
        );
    }

    #[test]
    fn fixed_actions_emit_events() {
        let mut state = NavbarState::default();
        assert_eq!(update(Message::OpenPage, None, &mut state), Event::OpenPage);
        assert_eq!(
            update(Message::ToggleTheme, None, &mut state),
            Event::ToggleTheme
        );
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let layout = NavbarLayout::resolve(Some(&markup(Some("burger"), Some("navLinks"))));
        let mut state = NavbarState::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            title: "Portfolio",
            layout: layout.as_ref(),
            state,
        });

        update(Message::ToggleMenu, layout.as_ref(), &mut state);
        let _element = view(ViewContext {
            i18n: &i18n,
            title: "Portfolio",
            layout: layout.as_ref(),
            state,
        });
    }

    #[test]
    fn navbar_view_renders_without_menu() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            title: "",
            layout: None,
            state: NavbarState::default(),
        });
    }
}
