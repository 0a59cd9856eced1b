//! Bodies of the four wizard steps.

use leptos::*;
use shush_core::schema::Reliability;
use shush_core::{
    Field, IdentityFields, Location, Platform, SelectionMode, SiteConfig, UseCase, Wizard,
};

fn set_field(wizard: RwSignal<Wizard>, field: Field, value: &str) {
    wizard.update(|w| {
        if let Err(e) = w.update_field(field, value) {
            log::warn!("⚠️ {}", e);
        }
    });
}

/// Labelled text input bound to one wizard field.
///
/// A `secret` input is write-only: the browser keeps what was typed and the
/// stored value is never read back into the page.
#[component]
fn TextField(
    wizard: RwSignal<Wizard>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] secret: bool,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| set_field(wizard, field, &event_target_value(&ev));

    let input = if secret {
        let hint = move || {
            if wizard.with(|w| w.form().is_blank(field)) {
                placeholder
            } else {
                "•••••••• (saved)"
            }
        };
        view! { <input type=input_type class="field-input" placeholder=hint on:input=on_input/> }
    } else {
        view! {
            <input
                type=input_type
                class="field-input"
                placeholder=placeholder
                prop:value=move || wizard.with(|w| w.form().text(field).unwrap_or_default())
                on:input=on_input
            />
        }
    };

    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            {input}
        </div>
    }
}

// =============================================================================
// Step 1: Selection
// =============================================================================

#[component]
pub fn SelectionStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let heading = match wizard.with_untracked(|w| w.schema().selection) {
        SelectionMode::Multiple => "SELECT MODULES (REQUIRED)",
        SelectionMode::Single => "SELECT USE CASE",
    };

    view! {
        <div class="step step-selection">
            <label class="field-label">{heading}</label>
            <div class="option-list">
                {UseCase::ALL
                    .into_iter()
                    .map(|use_case| {
                        let selected = move || wizard.with(|w| w.form().selection.contains(use_case));
                        view! {
                            <div
                                class="option"
                                class:selected=selected
                                on:click=move |_| {
                                    wizard.update(|w| {
                                        if let Err(e) = w.toggle_use_case(use_case) {
                                            log::warn!("⚠️ {}", e);
                                        }
                                    })
                                }
                            >
                                <span>{use_case.label()}</span>
                                <Show when=selected fallback=|| view! { }>
                                    <span class="check">"✓"</span>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <label class="field-label">"PLATFORM"</label>
            <div class="platform-list">
                {Platform::ALL
                    .into_iter()
                    .map(|platform| {
                        view! {
                            <div
                                class="platform"
                                class:selected=move || wizard.with(|w| w.form().platform == platform)
                                on:click=move |_| set_field(wizard, Field::Platform, platform.code())
                            >
                                {platform.code()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

// =============================================================================
// Step 2: Credentials
// =============================================================================

#[component]
pub fn CredentialsStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let identity = match wizard.with_untracked(|w| w.schema().identity) {
        IdentityFields::AccountName => view! {
            <TextField
                wizard=wizard
                field=Field::AccountName
                label="Account Name (For Dashboard)"
                placeholder="e.g. My Prop Firm Account"
            />
        }
        .into_view(),
        IdentityFields::Contact => view! {
            <TextField wizard=wizard field=Field::FullName label="Full Name" placeholder="e.g. Jane Doe"/>
            <TextField
                wizard=wizard
                field=Field::Email
                label="Email"
                placeholder="you@example.com"
                input_type="email"
            />
        }
        .into_view(),
    };

    view! {
        <div class="step step-credentials">
            <div class="notice-banner">
                "Credentials are sent securely via SSL. We do not store them after provisioning."
            </div>
            {identity}
            <TextField
                wizard=wizard
                field=Field::ServerName
                label="Broker Server Name (Exact Match)"
                placeholder="e.g. ICMarkets-Server01"
            />
            <div class="field-row">
                <TextField wizard=wizard field=Field::Login label="MetaTrader Login" placeholder="12345678"/>
                <TextField
                    wizard=wizard
                    field=Field::Password
                    label="MetaTrader Password"
                    placeholder="••••••••"
                    input_type="password"
                    secret=true
                />
            </div>
        </div>
    }
}

// =============================================================================
// Step 3: Infrastructure
// =============================================================================

#[component]
pub fn InfrastructureStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let tier = Reliability::default();

    view! {
        <div class="step step-infrastructure">
            <div class="field">
                <label class="field-label">"Geographical Location"</label>
                <select
                    class="field-input"
                    on:change=move |ev| set_field(wizard, Field::Location, &event_target_value(&ev))
                >
                    {Location::ALL
                        .into_iter()
                        .map(|location| {
                            view! {
                                <option
                                    value=location.code()
                                    prop:selected=move || wizard.with(|w| w.form().location == location)
                                >
                                    {location.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="field">
                <label class="field-label">"Reliability Tier"</label>
                <div class="tier-card selected">
                    <div>
                        <span class="tier-name">{tier.label()}</span>
                        <span class="tier-description">{tier.description()}</span>
                    </div>
                    <span class="check">"✓"</span>
                </div>
            </div>
        </div>
    }
}

// =============================================================================
// Step 4: Confirm & Pay
// =============================================================================

#[component]
pub fn ConfirmStep(wizard: RwSignal<Wizard>, on_submit: Callback<()>) -> impl IntoView {
    let config = store_value(use_context::<SiteConfig>().unwrap_or_default());
    let summary = move || config.with_value(|c| wizard.with(|w| w.summary(c)));
    let submitting = move || wizard.with(|w| w.is_submitting());

    let missing = move || {
        wizard.with(|w| {
            w.missing_required()
                .iter()
                .map(|field| field.key())
                .collect::<Vec<_>>()
                .join(", ")
        })
    };

    view! {
        <div class="step step-confirm">
            <div class="summary">
                {move || {
                    summary()
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <div class="summary-row">
                                    <span class="summary-label">{row.label}</span>
                                    <span class="summary-value" class:uppercase={row.label == "Region"}>
                                        {row.value}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <div class="summary-row summary-fee">
                    <span class="summary-label">"One-time Fee"</span>
                    <span class="fee">{move || summary().fee_label}</span>
                </div>
            </div>

            <button
                class="btn btn-pay"
                disabled=move || !wizard.with(|w| w.can_submit())
                on:click=move |_| on_submit.call(())
            >
                {move || {
                    if submitting() {
                        "PROCESSING...".to_string()
                    } else {
                        config.with_value(|c| c.pay_label())
                    }
                }}
            </button>

            <Show when=move || !missing().is_empty() fallback=|| view! { }>
                <p class="field-hint">"Required: " {missing}</p>
            </Show>
            <p class="footnote">"Secure checkout via Stripe. Provisioning within 24h."</p>
        </div>
    }
}
