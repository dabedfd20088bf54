//! Grid Component

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px,
};

/// Wrapping grid of equally sized cells
#[derive(IntoElement, Default)]
pub struct Grid {
    children: Vec<AnyElement>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentElement for Grid {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Grid {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_row()
            .flex_wrap()
            .gap_4()
            .children(
                self.children
                    .into_iter()
                    .map(|child| div().w(px(260.0)).child(child)),
            )
    }
}
