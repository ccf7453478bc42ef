//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the giveaway front end and the hosted
//! record store. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for record store communication
//!   - **[`dto::registration`]**: Registration entries, claim inserts, status tallies
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The record store speaks PostgREST JSON:
//! - Field names are **snake_case** in Rust and in JSON
//! - Nullable columns map to `Option<T>` and are sent as explicit `null` on insert
//! - Timestamps are RFC 3339 strings and deserialize into `chrono::DateTime<Utc>`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::registration::{EntryStats, NewRegistration};
//! use shared::utils::truncate_address;
//!
//! let insert = NewRegistration::for_wallet("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL");
//! assert_eq!(truncate_address(&insert.wallet_address), "8W6Q...JKAL");
//!
//! let stats = EntryStats::tally(&[]);
//! assert_eq!(stats.total, 0);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
