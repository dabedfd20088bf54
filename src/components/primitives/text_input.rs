//! TextInput Component
//!
//! Single and multi line text fields bound to a document value.

use gpui::{
    App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::binding::Bindable;
use crate::components::TextBinding;
use crate::theme::colors::Palette;

/// A text input component
#[derive(IntoElement)]
pub struct TextInput {
    id: ElementId,
    label: SharedString,
    property: TextBinding,
    placeholder: SharedString,
    multiline: bool,
    masked: bool,
}

impl TextInput {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>, property: TextBinding) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            property,
            placeholder: SharedString::default(),
            multiline: false,
            masked: false,
        }
    }

    /// Multi line variant used by the `textarea` kind
    pub fn textarea(id: impl Into<ElementId>, label: impl Into<SharedString>, property: TextBinding) -> Self {
        Self {
            multiline: true,
            ..Self::new(id, label, property)
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Hide the characters of the value
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let value = self.property.get();

        let (display_text, text_color) = if value.is_empty() {
            (self.placeholder, Palette::input_placeholder())
        } else if self.masked {
            (SharedString::from("•".repeat(value.chars().count())), Palette::text_primary())
        } else {
            (SharedString::from(value), Palette::text_primary())
        };

        let field = div()
            .id(self.id)
            .px_3()
            .py_2()
            .bg(Palette::input_bg())
            .border_1()
            .border_color(Palette::input_border())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .when(self.multiline, |field| field.min_h(px(72.0)).overflow_y_scroll())
            .child(display_text);

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
            .child(field)
    }
}
