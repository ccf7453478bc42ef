//! Claim form state.
//!
//! A claim while disconnected only asks the wallet to connect; the user clicks
//! again once connected. A claim while connected inserts exactly one
//! registration. Duplicate submissions are left to the store's unique
//! constraint.

use std::rc::Rc;

use leptos::prelude::*;
use shared::dto::registration::NewRegistration;

use crate::error::{StoreError, WalletError};
use crate::services::store::RegistrationStore;
use crate::state::wallet::WalletSession;

pub const ALREADY_REGISTERED_MESSAGE: &str = "This wallet address has already been registered";
pub const REGISTER_FAILED_MESSAGE: &str = "Failed to register wallet. Please try again.";
pub const CLAIM_FAILED_MESSAGE: &str = "Failed to claim. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClaimPhase {
    #[default]
    Ready,
    Submitting,
    Registered,
}

/// What a single `claim()` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Not connected: a connection was requested instead of a claim.
    ConnectRequested(Result<(), WalletError>),
    Registered,
    AlreadyRegistered,
    Failed,
}

/// User-facing message for a failed insert.
pub fn failure_message(error: &StoreError) -> &'static str {
    if error.is_conflict() {
        ALREADY_REGISTERED_MESSAGE
    } else if error.is_transport() {
        CLAIM_FAILED_MESSAGE
    } else {
        REGISTER_FAILED_MESSAGE
    }
}

#[derive(Clone, Copy)]
pub struct ClaimForm {
    wallet: WalletSession,
    store: StoredValue<Rc<dyn RegistrationStore>, LocalStorage>,
    phase: RwSignal<ClaimPhase>,
    error: RwSignal<Option<String>>,
}

impl ClaimForm {
    pub fn new(wallet: WalletSession, store: Rc<dyn RegistrationStore>) -> Self {
        Self {
            wallet,
            store: StoredValue::new_local(store),
            phase: RwSignal::new(ClaimPhase::Ready),
            error: RwSignal::new(None),
        }
    }

    pub fn wallet(&self) -> WalletSession {
        self.wallet
    }

    pub fn phase(&self) -> ClaimPhase {
        self.phase.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.get() == ClaimPhase::Submitting
    }

    pub async fn claim(&self) -> ClaimOutcome {
        let Some(address) = self.wallet.address_untracked() else {
            return ClaimOutcome::ConnectRequested(self.wallet.connect().await);
        };

        self.phase.set(ClaimPhase::Submitting);
        self.error.set(None);

        let store = self.store.get_value();
        let result = store.insert(&NewRegistration::for_wallet(address.as_str())).await;

        let outcome = match result {
            Ok(()) => {
                log::info!("Registered wallet {}", shared::utils::truncate_address(&address));
                ClaimOutcome::Registered
            }
            Err(e) => {
                if e.is_conflict() {
                    log::info!("Wallet {} already registered", shared::utils::truncate_address(&address));
                } else {
                    log::warn!("Registration failed: {}", e);
                }
                self.error.try_set(Some(failure_message(&e).to_string()));
                if e.is_conflict() {
                    ClaimOutcome::AlreadyRegistered
                } else {
                    ClaimOutcome::Failed
                }
            }
        };

        let next = if outcome == ClaimOutcome::Registered {
            ClaimPhase::Registered
        } else {
            ClaimPhase::Ready
        };
        self.phase.try_set(next);
        outcome
    }

    /// Back to the form from the confirmation card.
    pub fn reset(&self) {
        self.phase.set(ClaimPhase::Ready);
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{MockStore, MockWallet};

    fn form(wallet: Rc<MockWallet>, store: Rc<MockStore>) -> ClaimForm {
        ClaimForm::new(WalletSession::new(Some(wallet)), store)
    }

    #[tokio::test]
    async fn test_claim_while_disconnected_only_connects() {
        let wallet = MockWallet::approving("ABC123");
        let store = MockStore::new();
        let form = form(wallet.clone(), store.clone());

        let outcome = form.claim().await;

        assert_eq!(outcome, ClaimOutcome::ConnectRequested(Ok(())));
        assert_eq!(wallet.connect_calls.get(), 1);
        assert!(store.inserts.borrow().is_empty());
        assert_eq!(form.phase(), ClaimPhase::Ready);
        assert!(form.wallet().is_connected());
    }

    #[tokio::test]
    async fn test_claim_without_provider() {
        let store = MockStore::new();
        let form = ClaimForm::new(WalletSession::new(None), store.clone());

        assert_eq!(
            form.claim().await,
            ClaimOutcome::ConnectRequested(Err(WalletError::ProviderMissing))
        );
        assert!(store.inserts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_claim_while_connected_inserts_once() {
        let store = MockStore::new();
        let form = form(MockWallet::already_connected("ABC123"), store.clone());

        assert_eq!(form.claim().await, ClaimOutcome::Registered);
        assert_eq!(
            *store.inserts.borrow(),
            vec![NewRegistration {
                wallet_address: "ABC123".to_string(),
                email: None,
                twitter_handle: None,
            }]
        );

        // Each call issues its own insert; duplicates are the store's problem
        form.reset();
        form.claim().await;
        assert_eq!(store.inserts.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_registered_then_reset() {
        let form = form(MockWallet::already_connected("ABC123"), MockStore::new());

        form.claim().await;
        assert_eq!(form.phase(), ClaimPhase::Registered);
        assert_eq!(form.error(), None);

        form.reset();
        assert_eq!(form.phase(), ClaimPhase::Ready);
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn test_duplicate_shows_specific_message() {
        let store = MockStore::failing_inserts(StoreError::Conflict);
        let form = form(MockWallet::already_connected("ABC123"), store);

        assert_eq!(form.claim().await, ClaimOutcome::AlreadyRegistered);
        assert_eq!(form.error().as_deref(), Some(ALREADY_REGISTERED_MESSAGE));
        assert_eq!(form.phase(), ClaimPhase::Ready);
    }

    #[tokio::test]
    async fn test_store_rejection_shows_generic_message() {
        let store = MockStore::failing_inserts(StoreError::Rejected {
            status: 401,
            message: "Invalid API key".to_string(),
        });
        let form = form(MockWallet::already_connected("ABC123"), store);

        assert_eq!(form.claim().await, ClaimOutcome::Failed);
        assert_eq!(form.error().as_deref(), Some(REGISTER_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let store = MockStore::failing_inserts(StoreError::Network("Failed to fetch".to_string()));
        let form = form(MockWallet::already_connected("ABC123"), store);

        assert_eq!(form.claim().await, ClaimOutcome::Failed);
        assert_eq!(form.error().as_deref(), Some(CLAIM_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_retry_clears_previous_error() {
        let store = MockStore::failing_inserts(StoreError::Conflict);
        let form = form(MockWallet::already_connected("ABC123"), store.clone());
        form.claim().await;
        assert!(form.error().is_some());

        *store.insert_result.borrow_mut() = Ok(());
        assert_eq!(form.claim().await, ClaimOutcome::Registered);
        assert_eq!(form.error(), None);
    }
}
