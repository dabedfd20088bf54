//! Board Component
//!
//! A titled card holding composed children. The list style puts each child
//! on its own bordered line.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::Palette;

#[derive(IntoElement)]
pub struct Board {
    title: Option<SharedString>,
    list: bool,
    children: Vec<AnyElement>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            title: None,
            list: false,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Board {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Board {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let body = if self.list {
            div().flex().flex_col().children(self.children.into_iter().map(|child| {
                div()
                    .px_4()
                    .py_2()
                    .border_b_1()
                    .border_color(Palette::border())
                    .child(child)
            }))
        } else {
            div().p_4().flex().flex_col().gap_3().children(self.children)
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(Palette::content_bg())
            .border_1()
            .border_color(Palette::border())
            .rounded_md()
            .overflow_hidden()
            .when_some(self.title, |board, title| {
                board.child(
                    div()
                        .px_4()
                        .py_2()
                        .bg(Palette::board_title_bg())
                        .border_b_1()
                        .border_color(Palette::border())
                        .text_color(Palette::text_primary())
                        .text_size(px(14.0))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(title),
                )
            })
            .child(body)
    }
}
