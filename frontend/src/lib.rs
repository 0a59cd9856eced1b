//! SHUSH.CASH - Frontend Rust/Leptos Application
//!
//! A WebAssembly front end that embeds the live trading dashboard and
//! walks new customers through a four-step deploy wizard ending at checkout.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (LIVE indicator, title, Deploy button)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DashboardEmbed (iframe + loading overlay)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  WizardModal (overlay, when open)                            │
//! │  ├── SelectionStep → CredentialsStep → InfrastructureStep    │
//! │  └── ConfirmStep ──POST──▶ relay ──redirect──▶ checkout      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Deployed site configuration
//! - [`types`] - Browser-side errors
//! - [`components`] - UI components (Header, DashboardEmbed, WizardModal, steps)
//! - [`services`] - Relay transport, notices and navigation
//!
//! All decisions (steps, validation, payload, lifecycles) live in
//! [`shush_core`].

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::site_config;
pub use types::{AppError, AppResult};
pub use components::*;
pub use services::*;

use shush_core::{Shell, SiteConfig, Wizard};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(config::LOG_LEVEL);

    log::info!("🦀 SHUSH.CASH - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(site_config());

    view! {
        <Title text={config::PRODUCT_NAME}/>
        <Router>
            <Routes>
                <Route path="/" view=ShellPage/>
            </Routes>
        </Router>
    }
}

/// Header, dashboard and (optionally) the wizard overlay.
#[component]
fn ShellPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let shell = create_rw_signal(Shell::new(config.layout));
    let wizard = create_rw_signal(Wizard::new(config.schema));

    let open_wizard = Callback::new(move |_| {
        shell.update(|s| {
            if !s.open_wizard() {
                log::warn!("⚠️ This layout has no wizard");
            }
        });
    });

    let close_wizard = Callback::new(move |_| {
        let mut next_shell = shell.get_untracked();
        let mut next_wizard = wizard.get_untracked();
        match next_shell.close_wizard(&mut next_wizard) {
            Ok(()) => {
                wizard.set(next_wizard);
                shell.set(next_shell);
            }
            Err(e) => log::warn!("⚠️ Close refused: {}", e),
        }
    });

    let on_deploy = shell.with_untracked(|s| s.has_deploy_action()).then_some(open_wizard);

    view! {
        <div class="page">
            <Header on_deploy=on_deploy/>
            <DashboardEmbed/>
            <Show
                when=move || shell.with(|s| s.is_wizard_open())
                fallback=|| view! { }
            >
                <WizardModal wizard=wizard on_close=close_wizard/>
            </Show>
        </div>
    }
}
