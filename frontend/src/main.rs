//! Entry point for the WASM application

use leptos::*;
use shush_frontend::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(shush_frontend::config::LOG_LEVEL);

    log::info!("🦀 SHUSH.CASH - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
