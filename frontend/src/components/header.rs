use leptos::*;
use shush_core::SiteConfig;

#[component]
pub fn Header(
    /// Opens the wizard. No button when absent.
    #[prop(optional_no_strip)]
    on_deploy: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <header>
            <div class="header-left">
                <span class="live-dot pulse-live"></span>
                <span class="live-label">"LIVE"</span>
            </div>
            <h1 class="logo">{config.product_name}</h1>
            <div class="header-right">
                {on_deploy.map(|on_deploy| view! {
                    <button
                        class="btn btn-primary deploy-button"
                        on:click=move |_| {
                            log::info!("🚀 Opening deploy wizard");
                            on_deploy.call(());
                        }
                    >
                        "Deploy"
                    </button>
                })}
            </div>
        </header>
    }
}
