//! Top navigation bar with the wallet connect button.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::error::WalletError;
use crate::state::wallet::WalletSession;
use crate::utils::constants::BRAND_NAME;

/// Browser alert for the one wallet failure the user is told about directly.
pub fn alert_provider_missing() {
    let message = WalletError::ProviderMissing.to_string();
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(&message).is_err() {
            log::warn!("Could not show alert: {}", message);
        }
    }
}

/// Start a connect request in the background. Only a missing provider is
/// surfaced to the user; rejections are already logged by the session.
pub fn connect_with_alert(session: WalletSession) {
    leptos::task::spawn_local(async move {
        if let Err(WalletError::ProviderMissing) = session.connect().await {
            alert_provider_missing();
        }
    });
}

#[component]
pub fn Header(session: WalletSession) -> impl IntoView {
    let label = move || {
        let state = session.state();
        match state.address {
            _ if state.connecting => "Connecting...".to_string(),
            Some(address) => shared::utils::truncate_address(&address),
            None => "Connect Wallet".to_string(),
        }
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <A href="/" attr:class="brand">
                    <span class="brand-mark"></span>
                    <span class="brand-name">{BRAND_NAME}</span>
                </A>
                <nav class="header-nav">
                    <a href="#about" class="nav-link">"About"</a>
                    <a href="#roadmap" class="nav-link">"Roadmap"</a>
                    <a href="#faq" class="nav-link">"FAQ"</a>
                </nav>
                <button
                    class="btn btn-connect"
                    class:connected=move || session.is_connected()
                    disabled=move || session.is_connected() || session.is_connecting()
                    on:click=move |_| connect_with_alert(session)
                >
                    {label}
                </button>
            </div>
        </header>
    }
}
