//! Readonly Component
//!
//! Displays a bound value without offering any way to change it.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px,
};

use crate::binding::Bindable;
use crate::components::TextBinding;
use crate::theme::colors::Palette;

#[derive(IntoElement)]
pub struct Readonly {
    label: SharedString,
    property: TextBinding,
}

impl Readonly {
    pub fn new(label: impl Into<SharedString>, property: TextBinding) -> Self {
        Self {
            label: label.into(),
            property,
        }
    }
}

impl RenderOnce for Readonly {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let value = self.property.get();
        let (text, color) = if value.is_empty() {
            ("-".to_string(), Palette::text_muted())
        } else {
            (value, Palette::text_primary())
        };

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_color(Palette::text_secondary())
                    .text_size(px(12.0))
                    .child(self.label),
            )
            .child(
                div()
                    .px_3()
                    .py_2()
                    .bg(Palette::readonly_bg())
                    .rounded_md()
                    .text_color(color)
                    .text_sm()
                    .min_w(px(150.0))
                    .child(text),
            )
    }
}
