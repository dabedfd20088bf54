//! Render - Turning Composed Nodes into Elements
//!
//! Containers do not hold their children. Each one names the section it
//! composes, and the children are looked up in the [`PageState`] by that
//! section's key. Sections that have never been requested are collected so
//! the workspace can compose them after the frame.

use std::sync::Arc;

use gpui::{AnyElement, IntoElement, ParentElement, Styled, div, prelude::*, px};

use crate::binding::TextProperty;
use crate::components::composite::{board::Board, grid::Grid, table::Table};
use crate::components::layout::page_layout::Layout;
use crate::components::node::{Kind, Node};
use crate::components::primitives::{
    date_picker::DatePicker, dropdown::Dropdown, readonly::Readonly, text_input::TextInput,
};
use crate::components::{TextBinding, element_id};
use crate::state::page_state::{Loadable, PageState, SectionRequest};
use crate::theme::colors::Palette;

/// State of one section during a render pass
#[derive(Debug, PartialEq)]
pub enum SectionView<'a> {
    Nodes(&'a [Node]),
    Empty,
    Failed(&'a str),
    Loading,
}

/// One render pass over the page
pub struct RenderScope<'a> {
    page: &'a PageState,
    pending: Vec<SectionRequest>,
}

impl<'a> RenderScope<'a> {
    pub fn new(page: &'a PageState) -> Self {
        Self {
            page,
            pending: Vec::new(),
        }
    }

    /// Sections that were missing during this pass
    pub fn into_pending(self) -> Vec<SectionRequest> {
        self.pending
    }

    /// What the requested section currently holds, queueing the request
    /// the first time it is seen
    pub fn section_view(&mut self, request: SectionRequest) -> SectionView<'a> {
        let page = self.page;
        match page.section(&request.key) {
            Some(Loadable::Ready(nodes)) if nodes.is_empty() => SectionView::Empty,
            Some(Loadable::Ready(nodes)) => SectionView::Nodes(nodes),
            Some(Loadable::Failed(message)) => SectionView::Failed(message),
            Some(Loadable::Loading) => SectionView::Loading,
            None => {
                self.pending.push(request);
                SectionView::Loading
            }
        }
    }

    /// Children composed for `request`
    pub fn render_section(&mut self, request: SectionRequest) -> Vec<AnyElement> {
        let key = request.key.clone();
        match self.section_view(request) {
            SectionView::Nodes(nodes) => nodes.iter().map(|node| self.render_node(node)).collect(),
            SectionView::Empty => vec![status("Nothing here", Palette::text_muted())],
            SectionView::Failed(message) => {
                vec![status(format!("Could not load {key}: {message}"), Palette::danger())]
            }
            SectionView::Loading => vec![status("Loading...", Palette::text_muted())],
        }
    }

    fn render_children(&mut self, node: &Node) -> Vec<AnyElement> {
        match node.section() {
            Some(request) => self.render_section(request),
            None => Vec::new(),
        }
    }

    pub fn render_node(&mut self, node: &Node) -> AnyElement {
        let path = node.path();
        match node.kind {
            Kind::Text | Kind::Textarea => {
                let property = self.binding(node);
                let id = element_id(node.kind.name(), path);
                if node.read_only() {
                    return Readonly::new(node.label(), property).into_any_element();
                }
                let input = if node.kind == Kind::Textarea {
                    TextInput::textarea(id, node.label(), property)
                } else {
                    TextInput::new(id, node.label(), property)
                        .masked(node.props.str("type") == Some("password"))
                };
                input
                    .placeholder(node.placeholder().unwrap_or_default().to_string())
                    .into_any_element()
            }
            Kind::Dropdown => {
                let mut dropdown = Dropdown::new(
                    element_id("dropdown", path),
                    node.label(),
                    self.binding(node),
                    node.choices(),
                )
                .read_only(node.read_only());
                if let Some(placeholder) = node.placeholder() {
                    dropdown = dropdown.placeholder(placeholder.to_string());
                }
                dropdown.into_any_element()
            }
            Kind::DatePicker => DatePicker::new(element_id("datepicker", path), node.label(), self.binding(node))
                .read_only(node.read_only())
                .into_any_element(),
            Kind::Readonly => Readonly::new(node.label(), self.binding(node)).into_any_element(),
            Kind::Table => {
                let children = self.render_children(node);
                Table::new(node.columns())
                    .headers(node.headers())
                    .children(children)
                    .into_any_element()
            }
            Kind::Grid => {
                let children = self.render_children(node);
                Grid::new().children(children).into_any_element()
            }
            Kind::Board => {
                let children = self.render_children(node);
                let mut board = Board::new().list(node.props.str("style") == Some("list"));
                if let Some(title) = node.props.str("title") {
                    board = board.title(title.to_string());
                }
                board.children(children).into_any_element()
            }
            Kind::Layout => {
                let children = self.render_children(node);
                let mut layout = Layout::new();
                if let Some(title) = node.props.str("title") {
                    layout = layout.title(title.to_string());
                }
                if let Some(footer) = node.props.str("footer") {
                    layout = layout.footer(footer.to_string());
                }
                div()
                    .w_full()
                    .min_h(px(120.0))
                    .child(layout.children(children))
                    .into_any_element()
            }
        }
    }

    fn binding(&self, node: &Node) -> TextBinding {
        Arc::new(TextProperty::new(self.page.document().field(node.field())))
    }
}

fn status(message: impl Into<gpui::SharedString>, color: gpui::Rgba) -> AnyElement {
    div()
        .py_2()
        .text_color(color)
        .text_size(px(13.0))
        .child(message.into())
        .into_any_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Props;

    use crate::state::page_state::SectionKey;

    fn board(path: &str) -> Node {
        Node::new(Kind::Board, Props::new().with_path(path))
    }

    fn request(path: &str) -> SectionRequest {
        SectionRequest::new(path, None)
    }

    #[test]
    fn test_missing_section_is_requested() {
        let page = PageState::default();
        let mut scope = RenderScope::new(&page);
        let widgets = SectionRequest::new("pages/", Some("widget"));
        assert_eq!(scope.section_view(widgets.clone()), SectionView::Loading);
        assert_eq!(scope.into_pending(), vec![widgets]);
    }

    #[test]
    fn test_known_sections_are_not_requested() {
        let mut page = PageState::default();
        for path in ["loading/", "broken/", "empty/", "pages/"] {
            page.begin(&SectionKey::new(path, None));
        }
        page.finish(&SectionKey::new("broken/", None), 0, Err("404".to_string()));
        page.finish(&SectionKey::new("empty/", None), 0, Ok(Vec::new()));
        page.finish(&SectionKey::new("pages/", None), 0, Ok(vec![board("pages/news/")]));

        let mut scope = RenderScope::new(&page);
        assert_eq!(scope.section_view(request("loading/")), SectionView::Loading);
        assert_eq!(scope.section_view(request("broken/")), SectionView::Failed("404"));
        assert_eq!(scope.section_view(request("empty/")), SectionView::Empty);
        assert_eq!(
            scope.section_view(request("pages/")),
            SectionView::Nodes(&[board("pages/news/")])
        );
        assert!(scope.into_pending().is_empty());
    }

    #[test]
    fn test_same_directory_with_another_filter_is_requested() {
        let mut page = PageState::default();
        page.begin(&SectionKey::new("pages/", None));

        let mut scope = RenderScope::new(&page);
        let panels = SectionRequest::new("pages/", Some("panel"));
        assert_eq!(scope.section_view(panels.clone()), SectionView::Loading);
        assert_eq!(scope.into_pending(), vec![panels]);
    }
}
