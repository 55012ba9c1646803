//! porter-ui: GUI for Porter
//!
//! GPUI-based dashboard with the project selector sidebar.

use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use porter_core::config::PorterConfig;
use porter_core::{HttpApiClient, ProjectsApi, events, init_logging};

mod actions;
mod state;
mod views;

use views::MainView;

fn load_config_with_warning() -> PorterConfig {
    match PorterConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                event = "ui.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PorterConfig::default()
        }
    }
}

fn main() {
    init_logging(false);
    events::log_app_startup("porter-ui");

    let config = load_config_with_warning();
    let api: Arc<dyn ProjectsApi> = match HttpApiClient::new(&config.api) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ {}", e);
            events::log_app_error(&e);
            std::process::exit(1);
        }
    };
    let user_id = config.user.id;

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(960.0), px(640.0)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("Porter")),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| MainView::new(api, user_id, cx)),
        )
        .expect("Failed to open window");
    });

    events::log_app_shutdown("porter-ui");
}
