//! # Shared Utility Functions
//!
//! Address shortening used by the header button, the claim form, the claim
//! toasts and the dashboard table.
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 8, 6), "8W6Qgink...KuJKAL");
//! ```

/// Show the first `prefix_len` and last `suffix_len` characters of an address.
///
/// Addresses too short to shorten are returned as-is. Slicing is done on
/// character boundaries, so non-ASCII input never panics.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address(addr, 8, 8), "8W6Qgink...fSKuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();
    format!("{}...{}", prefix, suffix)
}

/// Four-and-four shortening used on compact controls.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"), "8W6Q...JKAL");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
