//! Onboarding wizard overlay.
//!
//! The [`Wizard`] value lives in a signal owned by the page, so closing the
//! overlay goes through the page (which resets it). This component renders
//! the current step and drives the submission.

use leptos::*;
use shush_core::{Relay, SiteConfig, Step, Wizard};

use crate::components::{ConfirmStep, CredentialsStep, InfrastructureStep, SelectionStep};
use crate::services::{deliver_outcome, FormRelay};

#[component]
pub fn WizardModal(
    wizard: RwSignal<Wizard>,
    /// Asks the page to close (and reset) the wizard.
    on_close: Callback<()>,
) -> impl IntoView {
    let config = store_value(use_context::<SiteConfig>().unwrap_or_default());

    // Memos so typing in a field does not rebuild the step view.
    let step = create_memo(move |_| wizard.with(|w| w.step()));
    let busy = create_memo(move |_| wizard.with(|w| w.is_busy()));

    let on_next = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.next() {
                log::debug!("Next refused: {}", e);
            }
        });
    };

    let on_back = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.back() {
                log::debug!("Back refused: {}", e);
            }
        });
    };

    let on_submit = Callback::new(move |_| submit(wizard, config.get_value()));

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">"DEPLOY PROTOCOL"</h2>
                        <p class="modal-caption">{move || step.get().caption()}</p>
                    </div>
                    <button
                        class="modal-close"
                        disabled=move || busy.get()
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>
                </div>

                <div class="modal-body">
                    {move || match step.get() {
                        Step::Selection => view! { <SelectionStep wizard=wizard/> }.into_view(),
                        Step::Credentials => view! { <CredentialsStep wizard=wizard/> }.into_view(),
                        Step::Infrastructure => view! { <InfrastructureStep wizard=wizard/> }.into_view(),
                        Step::ConfirmAndPay => {
                            view! { <ConfirmStep wizard=wizard on_submit=on_submit/> }.into_view()
                        }
                    }}
                </div>

                <div class="modal-footer">
                    {move || {
                        if step.get().prev().is_some() {
                            view! {
                                <button
                                    class="btn btn-secondary"
                                    disabled=move || busy.get()
                                    on:click=on_back
                                >
                                    "Back"
                                </button>
                            }
                            .into_view()
                        } else {
                            view! { <div></div> }.into_view()
                        }
                    }}
                    <Show
                        when=move || step.get().next().is_some()
                        fallback=|| view! { }
                    >
                        <button class="btn btn-primary" on:click=on_next>"Next ›"</button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Lock the wizard, post its payload and act on the relay's answer.
fn submit(wizard: RwSignal<Wizard>, config: SiteConfig) {
    let payload = match wizard.try_update(|w| w.begin_submit(&config)) {
        Some(Ok(payload)) => payload,
        Some(Err(e)) => {
            log::warn!("⚠️ Submit refused: {}", e);
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let relay = FormRelay::new(config.relay_endpoint.as_str());
        let result = relay.post(&payload).await;

        match wizard.try_update(|w| w.complete_submit(result, &config)) {
            Some(Ok(outcome)) => {
                if let Err(e) = deliver_outcome(&outcome) {
                    log::error!("❌ {}", e);
                    if outcome.redirect_url().is_some() {
                        wizard.update(|w| {
                            if let Err(e) = w.navigation_failed(e.to_string()) {
                                log::warn!("⚠️ {}", e);
                            }
                        });
                    }
                }
            }
            Some(Err(e)) => log::warn!("⚠️ Relay answer ignored: {}", e),
            None => log::warn!("⚠️ Wizard disposed before the relay answered"),
        }
    });
}
