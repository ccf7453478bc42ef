//! Application constants

pub const BRAND_NAME: &str = "YourBrand";

// Record store
pub const ENTRIES_TABLE: &str = "nft_entries";

// Live counter
pub const CLAIM_TOTAL: u32 = 150;
pub const CLAIM_START: u32 = 20;
pub const COUNTER_CADENCE_MS: (u64, u64) = (2_000, 5_000);

// Claim toasts
pub const TOAST_CADENCE_MS: (u64, u64) = (3_000, 7_000);
pub const TOAST_LIFETIME_MS: u64 = 5_000;
pub const TOAST_AMOUNT_SOL: u32 = 4;
pub const PSEUDO_WALLET_LEN: usize = 44;
/// Base58 characters; `0`, `I`, `O` and `l` never appear.
pub const PSEUDO_WALLET_ALPHABET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz123456789";

// Background animation
pub const PHASE_STEP: f64 = 0.005;

// CSV export
pub const CSV_FILE_PREFIX: &str = "nft-entries";
pub const CSV_MIME: &str = "text/csv";
