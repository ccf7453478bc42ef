//! Browser Wallet Integration via wasm-bindgen
//!
//! Thin bindings to the provider object that Phantom (and compatible Solana
//! wallets) inject as `window.solana`. Connection state lives in
//! [`crate::state::wallet::WalletSession`]; this module only talks to the
//! extension.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::error::WalletError;

/// Capabilities the page needs from an injected wallet.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Display name of the wallet
    fn name(&self) -> &'static str;

    /// Address the provider currently exposes, if any (trusted reconnect)
    fn current_address(&self) -> Option<String>;

    /// Ask the user to approve a connection; resolves to the wallet address.
    async fn connect(&self) -> Result<String, WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Register a handler for account switches inside the extension.
    ///
    /// The handler receives the new address, or `None` when the extension no
    /// longer exposes one.
    fn subscribe_account_changed(&self, handler: Box<dyn Fn(Option<String>)>);
}

// ============================================================================
// INJECTED PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasSolanaProvider() {
    return typeof window !== 'undefined' && !!window.solana;
}

export function isPhantomProvider() {
    return !!(window.solana && window.solana.isPhantom);
}

export function solanaAddress() {
    if (window.solana && window.solana.publicKey) {
        return window.solana.publicKey.toString();
    }
    return null;
}

export async function connectSolana() {
    const response = await window.solana.connect();
    return response.publicKey.toString();
}

export async function disconnectSolana() {
    await window.solana.disconnect();
}

export function onSolanaAccountChanged(handler) {
    window.solana.on('accountChanged', () => handler(solanaAddress()));
}
")]
extern "C" {
    #[wasm_bindgen(js_name = hasSolanaProvider)]
    fn has_solana_provider() -> bool;

    #[wasm_bindgen(js_name = isPhantomProvider)]
    fn is_phantom_provider() -> bool;

    #[wasm_bindgen(js_name = solanaAddress)]
    fn solana_address() -> Option<String>;

    #[wasm_bindgen(js_name = connectSolana, catch)]
    async fn connect_solana() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = disconnectSolana, catch)]
    async fn disconnect_solana() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = onSolanaAccountChanged)]
    fn on_solana_account_changed(handler: &Closure<dyn FnMut(Option<String>)>);
}

/// Extract a readable message from a thrown JS value.
fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

// ============================================================================
// PHANTOM PROVIDER
// ============================================================================

/// The `window.solana` provider.
#[derive(Clone, Copy, Debug)]
pub struct PhantomWallet {
    is_phantom: bool,
}

impl PhantomWallet {
    /// Feature-detect the injected provider.
    pub fn detect() -> Option<Self> {
        if !has_solana_provider() {
            log::info!("No injected Solana wallet provider found");
            return None;
        }
        Some(Self {
            is_phantom: is_phantom_provider(),
        })
    }
}

#[async_trait(?Send)]
impl WalletProvider for PhantomWallet {
    fn name(&self) -> &'static str {
        if self.is_phantom {
            "Phantom"
        } else {
            "Solana wallet"
        }
    }

    fn current_address(&self) -> Option<String> {
        solana_address()
    }

    async fn connect(&self) -> Result<String, WalletError> {
        let value = connect_solana()
            .await
            .map_err(|e| WalletError::Rejected(js_error_message(&e)))?;

        value
            .as_string()
            .ok_or_else(|| WalletError::Rejected("Provider returned no public key".to_string()))
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        disconnect_solana()
            .await
            .map(|_| ())
            .map_err(|e| WalletError::Disconnect(js_error_message(&e)))
    }

    fn subscribe_account_changed(&self, handler: Box<dyn Fn(Option<String>)>) {
        let closure = Closure::<dyn FnMut(Option<String>)>::new(move |address| handler(address));
        on_solana_account_changed(&closure);
        // The provider keeps the listener for the lifetime of the page
        closure.forget();
    }
}
