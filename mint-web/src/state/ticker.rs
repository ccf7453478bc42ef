//! Synthetic "someone just claimed" toasts.
//!
//! Cosmetic only: wallets are random base58-looking strings, unrelated to any
//! stored registration.

use rand::Rng;

use crate::services::scheduler::{Cadence, Timeline};
use crate::utils::constants::{
    PSEUDO_WALLET_ALPHABET, PSEUDO_WALLET_LEN, TOAST_AMOUNT_SOL, TOAST_LIFETIME_MS,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimNotification {
    pub id: u64,
    pub wallet: String,
    pub amount: u32,
    pub created_at: u64,
}

impl ClaimNotification {
    pub fn expires_at(&self) -> u64 {
        self.created_at + TOAST_LIFETIME_MS
    }
}

/// A random 44-character string over the base58 alphabet.
pub fn pseudo_wallet<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..PSEUDO_WALLET_LEN)
        .map(|_| char::from(PSEUDO_WALLET_ALPHABET[rng.random_range(0..PSEUDO_WALLET_ALPHABET.len())]))
        .collect()
}

/// Emits a toast immediately on start, then one every period (drawn once from
/// the cadence); each toast disappears exactly [`TOAST_LIFETIME_MS`] after it
/// was emitted.
#[derive(Clone, Debug)]
pub struct NotificationTicker<R> {
    cadence: Cadence<R>,
    period: u64,
    visible: Vec<ClaimNotification>,
    next_id: u64,
    next_emit_at: u64,
}

impl<R: Rng> NotificationTicker<R> {
    pub fn start(mut cadence: Cadence<R>, now_ms: u64) -> Self {
        let period = cadence.next_delay();
        let mut ticker = Self {
            cadence,
            period,
            visible: Vec::new(),
            next_id: 0,
            next_emit_at: now_ms,
        };
        ticker.emit(now_ms);
        ticker
    }

    /// Milliseconds between toasts.
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Toasts on screen, oldest first.
    pub fn visible(&self) -> &[ClaimNotification] {
        &self.visible
    }

    fn emit(&mut self, at: u64) {
        let wallet = pseudo_wallet(self.cadence.rng_mut());
        self.visible.push(ClaimNotification {
            id: self.next_id,
            wallet,
            amount: TOAST_AMOUNT_SOL,
            created_at: at,
        });
        self.next_id += 1;
        self.next_emit_at = at + self.period;
    }

    fn next_expiry(&self) -> Option<u64> {
        // Fixed lifetime, so the oldest toast always expires first
        self.visible.first().map(ClaimNotification::expires_at)
    }
}

impl<R: Rng> Timeline for NotificationTicker<R> {
    fn next_deadline(&self) -> Option<u64> {
        Some(
            self.next_expiry()
                .map_or(self.next_emit_at, |expiry| expiry.min(self.next_emit_at)),
        )
    }

    fn advance(&mut self, now_ms: u64) {
        loop {
            match self.next_expiry() {
                Some(expiry) if expiry <= now_ms && expiry <= self.next_emit_at => {
                    self.visible.remove(0);
                }
                _ if self.next_emit_at <= now_ms => {
                    self.emit(self.next_emit_at);
                }
                _ => break,
            }
        }
    }
}
