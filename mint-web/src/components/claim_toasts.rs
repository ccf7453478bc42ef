//! Stack of synthetic "just claimed" toasts.

use leptos::prelude::*;
use rand::rngs::SmallRng;

use crate::services::scheduler::{browser_rng, drive_timeline, BrowserClock, Cadence, Clock};
use crate::state::ticker::NotificationTicker;
use crate::utils::constants::TOAST_CADENCE_MS;

#[component]
pub fn ClaimToasts() -> impl IntoView {
    let ticker: RwSignal<NotificationTicker<SmallRng>> = RwSignal::new(NotificationTicker::start(
        Cadence::new(browser_rng(), TOAST_CADENCE_MS),
        BrowserClock.now_ms(),
    ));
    drive_timeline(ticker, BrowserClock);

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || ticker.with(|t| t.visible().to_vec())
                key=|n| n.id
                children=|n| view! {
                    <div class="toast">
                        <span class="toast-dot"></span>
                        <div class="toast-body">
                            <span class="toast-title">{format!("Claimed {} SOL", n.amount)}</span>
                            <span class="toast-wallet mono">{shared::utils::format_address(&n.wallet, 8, 8)}</span>
                        </div>
                    </div>
                }
            />
        </div>
    }
}
