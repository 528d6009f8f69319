use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod domain;
pub mod global_state;
pub mod infrastructure;

/// Wire the diagnostic channel and mount the widget.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(app::UiLogger::new_development()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Rate converter starting");

    leptos::mount_to_body(app::App);
}
