//! Wallet session state
//!
//! [`WalletSession`] is created once by the app shell and handed to the
//! components that need it as a prop. It is `Copy`, so views and event handlers
//! capture it freely.

use std::rc::Rc;

use leptos::prelude::*;

use crate::error::WalletError;
use crate::services::wallet::{PhantomWallet, WalletProvider};

/// Connection state as seen by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    pub address: Option<String>,
    /// True only while a connect request is in flight
    pub connecting: bool,
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

#[derive(Clone, Copy)]
pub struct WalletSession {
    state: RwSignal<WalletState>,
    provider: StoredValue<Option<Rc<dyn WalletProvider>>, LocalStorage>,
}

impl WalletSession {
    /// Wrap an (optional) provider and subscribe to its account changes.
    pub fn new(provider: Option<Rc<dyn WalletProvider>>) -> Self {
        let state = RwSignal::new(WalletState {
            address: provider.as_ref().and_then(|p| p.current_address()),
            connecting: false,
        });

        if let Some(provider) = &provider {
            provider.subscribe_account_changed(Box::new(move |address| {
                log::info!("Wallet account changed: connected={}", address.is_some());
                state.try_update(|s| s.address = address);
            }));
        }

        Self {
            state,
            provider: StoredValue::new_local(provider),
        }
    }

    /// Session over the injected browser wallet, if there is one.
    pub fn detect() -> Self {
        let provider = PhantomWallet::detect().map(|p| Rc::new(p) as Rc<dyn WalletProvider>);
        Self::new(provider)
    }

    pub fn state(&self) -> WalletState {
        self.state.get()
    }

    pub fn address(&self) -> Option<String> {
        self.state.with(|s| s.address.clone())
    }

    pub fn address_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.address.clone())
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|s| s.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.state.with(|s| s.connecting)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.with_value(|p| p.is_some())
    }

    /// Request a connection from the provider.
    ///
    /// Without a provider this returns [`WalletError::ProviderMissing`] and
    /// leaves state untouched. A rejected request is logged and returned; the
    /// session stays disconnected.
    pub async fn connect(&self) -> Result<(), WalletError> {
        let Some(provider) = self.provider.get_value() else {
            log::warn!("Connect requested but no wallet provider is installed");
            return Err(WalletError::ProviderMissing);
        };

        self.state.update(|s| s.connecting = true);
        let result = provider.connect().await;

        match result {
            Ok(address) => {
                log::info!(
                    "{} connected: {}",
                    provider.name(),
                    shared::utils::truncate_address(&address)
                );
                self.state.try_update(|s| {
                    s.address = Some(address);
                    s.connecting = false;
                });
                Ok(())
            }
            Err(e) => {
                log::error!("Error connecting wallet: {}", e);
                self.state.try_update(|s| s.connecting = false);
                Err(e)
            }
        }
    }

    /// Disconnect and clear the address. A no-op without a provider.
    pub async fn disconnect(&self) -> Result<(), WalletError> {
        let Some(provider) = self.provider.get_value() else {
            return Ok(());
        };

        if let Err(e) = provider.disconnect().await {
            log::warn!("{}", e);
            return Err(e);
        }
        self.state.try_update(|s| s.address = None);
        Ok(())
    }
}
