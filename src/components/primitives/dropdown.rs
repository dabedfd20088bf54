//! Dropdown Component

use std::sync::Arc;

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::binding::{Bindable, ComputedProperty};
use crate::components::TextBinding;
use crate::components::node::Choice;
use crate::components::primitives::readonly::Readonly;
use crate::theme::colors::Palette;

/// A dropdown bound to a document value.
///
/// Clicking selects the next choice. The read-only view shows the label of
/// the current choice.
#[derive(IntoElement)]
pub struct Dropdown {
    id: ElementId,
    label: SharedString,
    property: TextBinding,
    choices: Vec<Choice>,
    placeholder: SharedString,
    read_only: bool,
}

impl Dropdown {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        property: TextBinding,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            property,
            choices,
            placeholder: "Select...".into(),
            read_only: false,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// Label of the choice whose value is `value`
pub fn label_for(choices: &[Choice], value: &str) -> Option<String> {
    choices
        .iter()
        .find(|choice| choice.value == value)
        .map(|choice| choice.label.clone())
}

/// Value following `current`, wrapping around; the first choice when
/// `current` is not one of them
pub fn next_value(choices: &[Choice], current: &str) -> Option<String> {
    let next = match choices.iter().position(|choice| choice.value == current) {
        Some(index) => (index + 1) % choices.len(),
        None => 0,
    };
    choices.get(next).map(|choice| choice.value.clone())
}

/// Read-only view of a choice value as its label; unknown values show as is
pub fn choice_labels(property: TextBinding, choices: Vec<Choice>) -> ComputedProperty<String> {
    ComputedProperty::read_only(move || {
        let value = property.get();
        label_for(&choices, &value).unwrap_or(value)
    })
}

impl RenderOnce for Dropdown {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.read_only {
            let labels = choice_labels(self.property, self.choices);
            return Readonly::new(self.label, Arc::new(labels)).into_any_element();
        }

        let current = self.property.get();
        let selected = label_for(&self.choices, &current);
        let text_color = if selected.is_some() {
            Palette::text_primary()
        } else {
            Palette::input_placeholder()
        };
        let display_text = selected.map(SharedString::from).unwrap_or(self.placeholder);

        let property = self.property.clone();
        let choices = self.choices;

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
                    .hover(|s| s.bg(Palette::hover_bg()))
                    .on_click(move |_event: &ClickEvent, window, _cx| {
                        if let Some(value) = next_value(&choices, &property.get()) {
                            property.set(value);
                            window.refresh();
                        }
                    })
                    .child(display_text)
                    .child(
                        div()
                            .text_color(Palette::text_muted())
                            .text_size(px(10.0))
                            .child("▼"),
                    ),
            )
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<Choice> {
        ["draft", "live"]
            .into_iter()
            .map(|value| Choice {
                value: value.to_string(),
                label: value.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(&choices(), "live").as_deref(), Some("LIVE"));
        assert_eq!(label_for(&choices(), "gone"), None);
    }

    #[test]
    fn test_choice_label_is_read_only() {
        let document = crate::binding::Document::new();
        let property: TextBinding =
            Arc::new(crate::binding::TextProperty::new(document.field("status")));
        property.set("live".to_string());
        let labels = choice_labels(property.clone(), choices());
        assert_eq!(labels.get(), "LIVE");
        labels.set("draft".to_string());
        assert_eq!(property.get(), "live");

        property.set("unknown".to_string());
        assert_eq!(labels.get(), "unknown");
    }

    #[test]
    fn test_next_value_wraps() {
        assert_eq!(next_value(&choices(), "").as_deref(), Some("draft"));
        assert_eq!(next_value(&choices(), "draft").as_deref(), Some("live"));
        assert_eq!(next_value(&choices(), "live").as_deref(), Some("draft"));
        assert_eq!(next_value(&[], "draft"), None);
    }
}
