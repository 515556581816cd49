use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::ui::app_context::AppContext;
use crate::ui::components::toast_context::ToastContext;
use crate::ui::components::{Account, Dashboard, Navbar, ToastHost};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Dashboard {},
    #[route("/account")]
    Account {},
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("atelier")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let app_context = use_hook(AppContext::new);
    let session = app_context.session.clone();
    use_context_provider(move || app_context);
    use_context_provider(ToastContext::new);

    // One profile refresh at startup so the plan label is ready by the
    // time the dashboard settles.
    use_effect(move || {
        let session = session.clone();
        spawn(async move {
            if let Err(e) = session.refresh_profile().await {
                warn!("profile refresh failed: {}", e);
            }
        });
    });

    rsx! {
        ToastHost {}
        Router::<Route> {}
    }
}
