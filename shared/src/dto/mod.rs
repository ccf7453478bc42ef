//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the hosted record store.
//!
//! ## Module Organization
//!
//! - [`registration`] - Giveaway registration rows, inserts, and status tallies
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /rest/v1/nft_entries
//! Prefer: return=minimal
//!
//! [{ "wallet_address": "8W6Q...", "email": null, "twitter_handle": null }]
//! ```
//!
//! ```text
//! HTTP/1.1 409 Conflict
//!
//! {
//!   "code": "23505",
//!   "message": "duplicate key value violates unique constraint \"nft_entries_wallet_address_key\"",
//!   "details": "Key (wallet_address)=(8W6Q...) already exists.",
//!   "hint": null
//! }
//! ```

pub mod registration;

pub use registration::*;
