//! Claim card: the form while ready/submitting, a confirmation once registered.

use leptos::prelude::*;

use crate::components::header::alert_provider_missing;
use crate::error::WalletError;
use crate::state::claim::{ClaimForm, ClaimOutcome, ClaimPhase};

#[component]
pub fn ClaimCard(form: ClaimForm) -> impl IntoView {
    let on_claim = move |_| {
        leptos::task::spawn_local(async move {
            if let ClaimOutcome::ConnectRequested(Err(WalletError::ProviderMissing)) = form.claim().await {
                alert_provider_missing();
            }
        });
    };

    view! {
        <div class="claim-card">
            <Show
                when=move || form.phase() == ClaimPhase::Registered
                fallback=move || view! {
                    <div class="claim-form">
                        <span class="badge badge-live">"Live"</span>
                        <h2 class="claim-title">"Free Mint Claim"</h2>
                        <p class="claim-subtitle">"Connect your wallet and claim your free mint."</p>

                        {move || form.wallet().address().map(|address| view! {
                            <div class="connected-address">
                                <span class="label">"Connected: "</span>
                                <span class="mono">{shared::utils::format_address(&address, 8, 8)}</span>
                            </div>
                        })}

                        {move || form.error().map(|message| view! {
                            <div class="error-box">{message}</div>
                        })}

                        <button
                            class="btn btn-primary btn-claim"
                            disabled=move || form.is_submitting()
                            on:click=on_claim
                        >
                            {move || if form.is_submitting() { "Processing..." } else { "Claim Free Mint" }}
                        </button>

                        <p class="fee-note">"Only a small network fee applies when your mint is sent."</p>
                    </div>
                }
            >
                <div class="claim-success">
                    <span class="badge badge-success">"Registered"</span>
                    <h2 class="claim-title">"Successfully Registered!"</h2>
                    <p class="claim-subtitle">"Your wallet is on the list. Your NFT will be sent soon."</p>
                    <button class="btn btn-secondary" on:click=move |_| form.reset()>
                        "Submit another entry"
                    </button>
                </div>
            </Show>
        </div>
    }
}
