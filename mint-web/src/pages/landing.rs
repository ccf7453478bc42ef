//! Landing page: hero, live counter and the claim card.

use leptos::prelude::*;

use crate::components::{Backdrop, ClaimCard, ClaimToasts, Header, LiveCounterCard};
use crate::state::claim::ClaimForm;
use crate::state::wallet::WalletSession;

#[component]
pub fn LandingPage(session: WalletSession, form: ClaimForm) -> impl IntoView {
    view! {
        <div class="landing">
            <Backdrop/>
            <ClaimToasts/>
            <Header session=session/>

            <main class="hero">
                <section class="hero-copy">
                    <h1 class="hero-title">
                        "The New Standard"
                        <br/>
                        <span class="accent">"for your NFT drop"</span>
                    </h1>
                    <p class="hero-tagline">
                        "Connect your Solana wallet and claim a free mint from the collection. No cost, no catch."
                    </p>
                    <div class="live-pill">
                        <span class="pulse"></span>
                        "Mint is live now"
                    </div>
                    <LiveCounterCard/>
                </section>

                <section class="hero-claim">
                    <ClaimCard form=form/>
                </section>
            </main>
        </div>
    }
}
