//! DatePicker Component

use std::sync::Arc;

use chrono::Local;
use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::binding::{Bindable, ComputedProperty};
use crate::components::TextBinding;
use crate::components::primitives::readonly::Readonly;
use crate::theme::colors::Palette;
use crate::utils::format::{date_prefix, format_date};

/// Date field showing the `YYYY-MM-DD` part of its value.
///
/// Clicking an empty field fills in today's date.
#[derive(IntoElement)]
pub struct DatePicker {
    id: ElementId,
    label: SharedString,
    property: TextBinding,
    read_only: bool,
}

impl DatePicker {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>, property: TextBinding) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            property,
            read_only: false,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// Read-only view of a date value in human form
pub fn human_date(property: TextBinding) -> ComputedProperty<String> {
    ComputedProperty::read_only(move || {
        let value = property.get();
        if value.is_empty() { value } else { format_date(&value) }
    })
}

impl RenderOnce for DatePicker {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.read_only {
            return Readonly::new(self.label, Arc::new(human_date(self.property))).into_any_element();
        }

        let value = self.property.get();
        let (display_text, text_color) = if value.is_empty() {
            ("YYYY-MM-DD".to_string(), Palette::input_placeholder())
        } else {
            (date_prefix(&value).to_string(), Palette::text_primary())
        };

        let property = self.property.clone();

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
                    .id(self.id)
                    .px_3()
                    .py_2()
                    .bg(Palette::input_bg())
                    .border_1()
                    .border_color(Palette::input_border())
                    .rounded_md()
                    .text_color(text_color)
                    .text_sm()
                    .min_w(px(150.0))
                    .flex()
                    .items_center()
                    .justify_between()
                    .cursor_pointer()
                    .on_click(move |_event: &ClickEvent, window, _cx| {
                        if property.get().is_empty() {
                            property.set(Local::now().format("%Y-%m-%d").to_string());
                            window.refresh();
                        }
                    })
                    .child(display_text)
                    .child(
                        div()
                            .text_color(Palette::text_muted())
                            .text_size(px(10.0))
                            .child("📅"),
                    ),
            )
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Document, TextProperty};

    #[test]
    fn test_human_date_view() {
        let document = Document::new();
        let property: TextBinding = Arc::new(TextProperty::new(document.field("joined")));
        property.set("2024-03-07T10:00:00Z".to_string());
        let view = human_date(property.clone());
        assert_eq!(view.get(), "7 Mar 2024");

        view.set("2020-01-01".to_string());
        assert_eq!(property.get(), "2024-03-07T10:00:00Z");

        property.set(String::new());
        assert_eq!(view.get(), "");
    }
}
