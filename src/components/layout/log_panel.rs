//! Log Panel Component
//!
//! Collapsible strip at the bottom of the window listing composition
//! outcomes, newest first. It can hide informational records so failures
//! stand out.

use gpui::{
    ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::state::log_state::{LogEntry, LogLevel, LogState};
use crate::theme::colors::Palette;
use crate::utils::format::{format_time_ms, truncate};

/// Records shown when expanded
const VISIBLE_ENTRIES: usize = 50;
/// Longest message shown before truncation
const MESSAGE_CHARS: usize = 240;

const HEADER_HEIGHT: f32 = 32.0;
const EXPANDED_HEIGHT: f32 = 160.0;

pub struct LogPanel {
    logs: Entity<LogState>,
    expanded: bool,
    problems_only: bool,
}

impl LogPanel {
    pub fn new(logs: Entity<LogState>, cx: &mut Context<Self>) -> Self {
        cx.observe(&logs, |_this, _, cx| cx.notify()).detach();

        Self {
            logs,
            expanded: true,
            problems_only: false,
        }
    }

    fn min_level(&self) -> LogLevel {
        if self.problems_only {
            LogLevel::Warn
        } else {
            LogLevel::Info
        }
    }

    fn header_button(
        id: &'static str,
        label: impl Into<SharedString>,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> impl IntoElement {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(Palette::text_muted())
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
            .on_click(on_click)
            .child(label.into())
    }

    fn render_entry(entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .text_size(px(11.0))
            .child(
                div()
                    .min_w(px(85.0))
                    .text_color(Palette::text_muted())
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .min_w(px(45.0))
                    .text_color(entry.level.color())
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .flex_1()
                    .text_size(px(12.0))
                    .text_color(Palette::text_light())
                    .child(truncate(&entry.message, MESSAGE_CHARS)),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.logs.read(cx);
        let errors = logs.count(LogLevel::Error);
        let summary = if errors > 0 {
            format!("{} records, {errors} failed", logs.len())
        } else {
            format!("{} records", logs.len())
        };
        let entries: Vec<LogEntry> = if self.expanded {
            logs.newest(self.min_level()).take(VISIBLE_ENTRIES).cloned().collect()
        } else {
            Vec::new()
        };

        let clear = {
            let logs = self.logs.clone();
            Self::header_button("log-clear", "Clear", move |_event, _window, cx| {
                logs.update(cx, |logs, cx| {
                    logs.clear();
                    cx.notify();
                });
            })
        };
        let filter = Self::header_button(
            "log-filter",
            if self.problems_only { "All" } else { "Problems" },
            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.problems_only = !this.problems_only;
                cx.notify();
            }),
        );
        let toggle = Self::header_button(
            "log-toggle",
            if self.expanded { "▼" } else { "▲" },
            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.expanded = !this.expanded;
                cx.notify();
            }),
        );

        let height = if self.expanded { EXPANDED_HEIGHT } else { HEADER_HEIGHT };

        div()
            .h(px(height))
            .w_full()
            .flex()
            .flex_col()
            .bg(Palette::log_panel_bg())
            .child(
                div()
                    .h(px(HEADER_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(Palette::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child("Composition log"),
                            )
                            .child(
                                div()
                                    .text_color(Palette::text_muted())
                                    .text_size(px(11.0))
                                    .child(summary),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(filter)
                            .child(clear)
                            .child(toggle),
                    ),
            )
            .when(self.expanded, |panel| {
                panel.child(
                    div()
                        .id("log-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .children(entries.iter().map(Self::render_entry)),
                )
            })
    }
}
