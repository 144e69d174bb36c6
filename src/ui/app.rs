use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use crate::ui::browse_context::BrowseContextProvider;
use crate::ui::components::ProductBrowser;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        BrowseContextProvider {
            ProductBrowser {}
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("vitrine")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
