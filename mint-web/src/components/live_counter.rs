//! Live claims progress card.

use leptos::prelude::*;

use crate::services::scheduler::{browser_rng, drive_timeline, BrowserClock, Cadence, Clock};
use crate::state::counter::{CounterTimeline, LiveCounter};
use crate::utils::constants::COUNTER_CADENCE_MS;

#[component]
pub fn LiveCounterCard() -> impl IntoView {
    let timeline = RwSignal::new(CounterTimeline::start(
        LiveCounter::default(),
        Cadence::new(browser_rng(), COUNTER_CADENCE_MS),
        BrowserClock.now_ms(),
    ));
    drive_timeline(timeline, BrowserClock);

    let counter = move || timeline.with(|t| *t.counter());

    view! {
        <div class="counter-card">
            <div class="counter-row">
                <span class="counter-label">"Claimed"</span>
                <span class="counter-value">
                    {move || counter().claimed()} " / " {move || counter().total()}
                </span>
            </div>
            <div class="progress">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", counter().percentage())
                ></div>
            </div>
            <span class="counter-percentage">{move || format!("{}% claimed", counter().percentage())}</span>
        </div>
    }
}
