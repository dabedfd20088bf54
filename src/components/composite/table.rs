//! Table Component
//!
//! Arranges composed children into rows of a fixed number of cells.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::components::node::MAX_COLUMNS;
use crate::theme::colors::Palette;

/// Table component
#[derive(IntoElement)]
pub struct Table {
    headers: Vec<SharedString>,
    columns: usize,
    children: Vec<AnyElement>,
}

impl Table {
    pub fn new(columns: usize) -> Self {
        Self {
            headers: Vec::new(),
            columns: columns.clamp(1, MAX_COLUMNS),
            children: Vec::new(),
        }
    }

    pub fn headers(mut self, headers: impl IntoIterator<Item = impl Into<SharedString>>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    fn render_header(headers: Vec<SharedString>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .bg(Palette::board_title_bg())
            .border_b_1()
            .border_color(Palette::border())
            .children(headers.into_iter().map(|header| {
                div()
                    .flex_1()
                    .px_3()
                    .py_2()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(Palette::text_primary())
                    .child(header)
            }))
    }

    fn render_row(cells: Vec<AnyElement>, columns: usize) -> impl IntoElement {
        let padding = columns.saturating_sub(cells.len());
        div()
            .w_full()
            .flex()
            .items_start()
            .border_b_1()
            .border_color(Palette::border())
            .hover(|s| s.bg(Palette::hover_bg()))
            .children(cells.into_iter().map(|cell| div().flex_1().px_3().py_2().child(cell)))
            .children((0..padding).map(|_| div().flex_1()))
    }
}

impl ParentElement for Table {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Table {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut table = div()
            .w_full()
            .flex()
            .flex_col()
            .bg(Palette::content_bg())
            .border_1()
            .border_color(Palette::border())
            .rounded_md()
            .overflow_hidden();

        if !self.headers.is_empty() {
            table = table.child(Self::render_header(self.headers));
        }

        if self.children.is_empty() {
            return table.child(
                div()
                    .p_4()
                    .flex()
                    .justify_center()
                    .text_color(Palette::text_muted())
                    .text_size(px(13.0))
                    .child("No data"),
            );
        }

        let columns = self.columns;
        let mut rows = Vec::new();
        let mut cells = Vec::new();
        for child in self.children {
            cells.push(child);
            if cells.len() == columns {
                rows.push(std::mem::take(&mut cells));
            }
        }
        if !cells.is_empty() {
            rows.push(cells);
        }

        table.children(rows.into_iter().map(|row| Self::render_row(row, columns)))
    }
}
