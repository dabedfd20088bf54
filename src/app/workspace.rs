//! Workspace - Composes the Page and Hosts the Log Panel
//!
//! The workspace renders the root section inside the page layout. Every
//! section that is missing after a frame is composed on the foreground
//! executor, and the outcome is written back to the page state and the log.
//! The page document is loaded from the root's `data.json` and saved back
//! on request.

use std::rc::Rc;

use gpui::{
    ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::binding::{load_data, save_document};
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::page_layout::Layout;
use crate::components::node::Node;
use crate::components::render::RenderScope;
use crate::composition::{Composer, ManifestLoader};
use crate::domain::config::PageConfig;
use crate::services::ContentBackend;
use crate::state::log_state::LogLevel;
use crate::state::page_state::SectionRequest;
use crate::theme::colors::Palette;

/// Composer used by the desktop shell
pub type PageComposer = Composer<ContentBackend, ManifestLoader<ContentBackend, Node>, Node>;

/// Main workspace containing the page and the log panel
pub struct Workspace {
    entities: AppEntities,
    composer: Rc<PageComposer>,
    page_config: PageConfig,
    origin: String,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        composer: Rc<PageComposer>,
        page_config: PageConfig,
        origin: String,
        cx: &mut Context<Self>,
    ) -> Self {
        let log_panel = cx.new(|cx| LogPanel::new(entities.logs.clone(), cx));

        cx.observe(&entities.page, |_this, _, cx| cx.notify()).detach();

        let mut workspace = Self {
            entities,
            composer,
            page_config,
            origin,
            log_panel,
        };
        workspace.load_document(cx);
        workspace
    }

    fn log(&self, level: LogLevel, message: String, cx: &mut Context<Self>) {
        self.entities.logs.update(cx, |logs, cx| {
            logs.push_now(level, message);
            cx.notify();
        });
    }

    /// Fetch the page data and swap it into the document
    fn load_document(&mut self, cx: &mut Context<Self>) {
        let composer = self.composer.clone();
        let root = self.page_config.root.clone();
        let page = self.entities.page.clone();
        let logs = self.entities.logs.clone();
        let generation = page.read(cx).generation();

        cx.spawn(async move |_this, cx| {
            let result = load_data(composer.source(), &root).await;
            let _ = cx.update(|cx| match result {
                Ok(values) => {
                    tracing::info!("Loaded {} fields for {}", values.len(), root);
                    page.update(cx, |page, cx| {
                        if page.generation() == generation {
                            page.document().replace(values);
                            cx.notify();
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!("Loading data for {} failed: {}", root, e);
                    logs.update(cx, |logs, cx| {
                        logs.push_now(LogLevel::Error, format!("Loading data for {root} failed: {e}"));
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    /// Write the page document back to the root's `data.json`
    fn save(&mut self, cx: &mut Context<Self>) {
        let composer = self.composer.clone();
        let root = self.page_config.root.clone();
        let document = self.entities.page.read(cx).document().clone();
        let page = self.entities.page.clone();
        let logs = self.entities.logs.clone();

        cx.spawn(async move |_this, cx| {
            let result = save_document(composer.source(), &root, &document).await;
            let (level, message) = match result {
                Ok(revision) => {
                    tracing::info!("Saved data for {} at revision {}", root, revision);
                    (LogLevel::Info, format!("Saved data for {root}"))
                }
                Err(e) => {
                    tracing::warn!("Saving data for {} failed: {}", root, e);
                    (LogLevel::Error, format!("Saving data for {root} failed: {e}"))
                }
            };
            let _ = cx.update(|cx| {
                logs.update(cx, |logs, cx| {
                    logs.push_now(level, message);
                    cx.notify();
                });
                page.update(cx, |_page, cx| cx.notify());
            });
        })
        .detach();
    }

    /// Compose the section named by `request` unless it is already known
    fn request(&mut self, request: SectionRequest, cx: &mut Context<Self>) {
        let generation = self
            .entities
            .page
            .update(cx, |page, _cx| page.begin(&request.key).then_some(page.generation()));
        let Some(generation) = generation else {
            return;
        };
        tracing::debug!("Composing section {}", request.key);

        let composer = self.composer.clone();
        let concurrent = self.page_config.concurrent;
        let page = self.entities.page.clone();
        let logs = self.entities.logs.clone();

        cx.spawn(async move |_this, cx| {
            let SectionRequest { key, options } = request;
            let filter = key.filter.as_deref();
            let result = if concurrent {
                composer
                    .load_components_concurrent(&key.path, &options, filter)
                    .await
            } else {
                composer.load_components(&key.path, &options, filter).await
            };

            let (level, message) = match &result {
                Ok(nodes) => {
                    tracing::info!("Composed {} components from {}", nodes.len(), key);
                    (
                        LogLevel::Info,
                        format!("Composed {} components from {key}", nodes.len()),
                    )
                }
                Err(e) => {
                    tracing::warn!("Composing {} failed: {}", key, e);
                    (LogLevel::Error, format!("Composing {key} failed: {e}"))
                }
            };
            let outcome = result.map_err(|e| e.to_string());

            let _ = cx.update(|cx| {
                logs.update(cx, |logs, cx| {
                    logs.push_now(level, message);
                    cx.notify();
                });
                page.update(cx, |page, cx| {
                    if page.finish(&key, generation, outcome) {
                        cx.notify();
                    }
                });
            });
        })
        .detach();
    }

    /// Drop every composed section and the loaded data, then start again
    /// from the root. Unsaved edits are discarded.
    fn reload(&mut self, cx: &mut Context<Self>) {
        tracing::info!("Reloading page {}", self.page_config.root);
        self.entities.page.update(cx, |page, cx| {
            page.reload();
            cx.notify();
        });
        self.log(LogLevel::Warn, format!("Reloading {}", self.page_config.root), cx);
        self.load_document(cx);
    }

    fn header_button(
        id: &'static str,
        label: impl Into<SharedString>,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> impl IntoElement {
        div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .bg(gpui::rgba(0xffffff22))
            .text_color(Palette::text_light())
            .text_size(px(13.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
            .on_click(on_click)
            .child(label.into())
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let root = SectionRequest::new(
            self.page_config.root.clone(),
            self.page_config.filter.as_deref(),
        );
        let (children, pending, dirty) = {
            let page = self.entities.page.read(cx);
            let mut scope = RenderScope::new(page);
            let children = scope.render_section(root);
            (children, scope.into_pending(), page.document().is_dirty())
        };
        for request in pending {
            self.request(request, cx);
        }

        let save = Self::header_button(
            "save-page",
            if dirty { "Save*" } else { "Save" },
            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.save(cx);
            }),
        );
        let reload = Self::header_button(
            "reload-page",
            "Reload",
            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.reload(cx);
            }),
        );

        let layout = Layout::new()
            .title(self.page_config.title.clone())
            .subtitle(self.origin.clone())
            .action(save)
            .action(reload)
            .footer(format!("minee-ui {}", env!("CARGO_PKG_VERSION")))
            .children(children);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::background())
            .child(div().flex_1().overflow_hidden().child(layout))
            .child(self.log_panel.clone())
    }
}
