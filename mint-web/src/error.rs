//! # Error Types
//!
//! Every user action catches its error at the action boundary and turns it into
//! local UI state. These types carry enough context to log for operators; the
//! end user only ever sees the fixed messages in [`crate::state::claim`].
//!
//! ## Error Categories
//!
//! - [`WalletError`]: browser wallet provider absent, rejected, or failing
//! - [`StoreError`]: record store insert/fetch failures, including the duplicate
//!   wallet conflict
//! - [`ConfigError`]: build-time store configuration missing or malformed
//! - [`DownloadError`]: the browser refused to build or save the CSV file

use thiserror::Error;

/// Browser wallet provider failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No injected provider on the page.
    #[error("Please install Phantom wallet to continue")]
    ProviderMissing,

    /// The user declined the request or the extension failed it.
    #[error("Wallet connection failed: {0}")]
    Rejected(String),

    #[error("Wallet disconnect failed: {0}")]
    Disconnect(String),
}

/// Record store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Record store is not configured: {0}")]
    NotConfigured(#[from] ConfigError),

    /// The wallet is already registered (unique constraint on `wallet_address`).
    #[error("Wallet address already registered")]
    Conflict,

    /// The store answered with a non-success status.
    #[error("Record store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode record store response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict)
    }

    /// True when the request failed before the store could answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Network(_))
    }
}

/// Build-time configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set at build time")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Download failed: {0}")]
pub struct DownloadError(pub String);
