//! App shell: builds the shared sessions once and routes between the landing
//! page and the operator dashboard.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::config;
use crate::pages::{AdminPage, LandingPage};
use crate::services::store::{RegistrationStore, SupabaseStore};
use crate::state::claim::ClaimForm;
use crate::state::dashboard::Dashboard;
use crate::state::wallet::WalletSession;

#[component]
pub fn App() -> impl IntoView {
    let session = WalletSession::detect();
    if !session.has_provider() {
        log::info!("No Solana wallet detected");
    }

    let store: Rc<dyn RegistrationStore> = Rc::new(SupabaseStore::from_config(config::store_config()));
    let form = ClaimForm::new(session, Rc::clone(&store));
    let dashboard = Dashboard::new(store);

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=move || view! { <LandingPage session=session form=form/> }/>
                    <Route path=path!("/admin") view=move || view! { <AdminPage dashboard=dashboard/> }/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn btn-primary">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
