//! Embedded trading dashboard.
//!
//! Shows a spinner overlay until the frame fires `load`. If that takes longer
//! than the configured timeout the overlay says so and offers a reload.

use gloo_timers::callback::Timeout;
use leptos::*;
use shush_core::{EmbedFrame, EmbedStatus, SiteConfig};

use crate::services::reload_page;

#[component]
pub fn DashboardEmbed() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let frame = EmbedFrame::from_config(&config);
    let status = create_rw_signal(EmbedStatus::Loading);

    let timeout_ms = config.embed_timeout_ms;
    let timer = Timeout::new(timeout_ms, move || {
        status.update(|s| {
            if s.on_timeout() {
                log::warn!("⚠️ Dashboard did not load within {} ms", timeout_ms);
            }
        });
    });
    // Dropping the timer cancels it.
    on_cleanup(move || drop(timer));

    let on_load = move |_| {
        status.update(|s| {
            if s.on_load() {
                log::info!("📡 Dashboard loaded");
            }
        });
    };

    let on_reload = move |_| {
        if let Err(e) = reload_page() {
            log::error!("❌ {}", e);
        }
    };

    view! {
        <main class="dashboard">
            <Show
                when=move || status.with(EmbedStatus::shows_overlay)
                fallback=|| view! { }
            >
                <div class="embed-overlay">
                    <div class="spinner"></div>
                    <p class="embed-status">
                        {move || status.with(|s| s.message().unwrap_or_default())}
                    </p>
                    <Show
                        when=move || status.get() == EmbedStatus::Stalled
                        fallback=|| view! { }
                    >
                        <button class="btn btn-secondary" on:click=on_reload>"Reload"</button>
                    </Show>
                </div>
            </Show>

            <iframe
                class="dashboard-frame"
                src=frame.src
                title=frame.title
                allow=frame.allow
                on:load=on_load
            ></iframe>
        </main>
    }
}
