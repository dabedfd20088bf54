//! Layout Component
//!
//! Frames composed content with an optional header bar and footer line.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::Palette;

#[derive(IntoElement, Default)]
pub struct Layout {
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    footer: Option<SharedString>,
    actions: Vec<AnyElement>,
    children: Vec<AnyElement>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<SharedString>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Element placed on the right of the header bar
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }
}

impl ParentElement for Layout {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Layout {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let header = self.title.map(|title| {
            div()
                .h(px(48.0))
                .w_full()
                .bg(Palette::header_bg())
                .flex()
                .items_center()
                .justify_between()
                .px_4()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_3()
                        .child(
                            div()
                                .text_color(Palette::text_light())
                                .text_size(px(18.0))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .child(title),
                        )
                        .when_some(self.subtitle, |row, subtitle| {
                            row.child(
                                div()
                                    .text_color(Palette::text_muted())
                                    .text_size(px(12.0))
                                    .child(subtitle),
                            )
                        }),
                )
                .child(div().flex().items_center().gap_2().children(self.actions))
        });

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::background())
            .children(header)
            .child(
                div()
                    .id("layout-body")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .children(self.children),
            )
            .when_some(self.footer, |layout, footer| {
                layout.child(
                    div()
                        .w_full()
                        .px_4()
                        .py_1()
                        .bg(Palette::footer_bg())
                        .text_color(Palette::text_secondary())
                        .text_size(px(11.0))
                        .child(footer),
                )
            })
    }
}
