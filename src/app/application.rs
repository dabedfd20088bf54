//! Application - App Initialization and Window Management

use std::rc::Rc;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::components::catalog::builtin_kinds;
use crate::composition::{Composer, ManifestLoader};
use crate::domain::config::AppConfig;
use crate::services::ContentBackend;

actions!(minee, [Quit]);

/// Open the window and compose the configured page from `backend`
pub fn run_app(config: AppConfig, backend: ContentBackend) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        let loader = ManifestLoader::new(backend.clone(), builtin_kinds());
        tracing::debug!("Component kinds: {:?}", loader.kinds().keys());
        let composer = Rc::new(
            Composer::new(backend.clone(), loader).with_missing_type(config.composition.missing_type),
        );
        let origin = backend.describe();
        let page_config = config.page.clone();

        let bounds = Bounds::centered(None, gpui::size(px(1200.0), px(860.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(config.page.title.clone())),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities, composer, page_config, origin, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {e}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
