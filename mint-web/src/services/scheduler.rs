//! Deadline scheduling for the simulated live widgets.
//!
//! The counter and the claim toasts are plain models implementing [`Timeline`]:
//! they report their next deadline and are advanced to a given instant. The
//! browser drives them with [`drive_timeline`]; tests advance them in virtual
//! time with [`Timeline::run_until`].

use std::future::Future;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Millisecond wall clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// A model whose state changes at known instants.
pub trait Timeline {
    /// Next instant at which [`Timeline::advance`] has work, or `None` when idle for good.
    fn next_deadline(&self) -> Option<u64>;

    /// Apply every event due at or before `now_ms`.
    fn advance(&mut self, now_ms: u64);

    /// Step through each deadline up to and including `until_ms`.
    fn run_until(&mut self, until_ms: u64) {
        while let Some(deadline) = self.next_deadline() {
            if deadline > until_ms {
                break;
            }
            self.advance(deadline);
        }
    }
}

/// Uniformly random delays drawn from a half-open millisecond range.
#[derive(Clone, Debug)]
pub struct Cadence<R> {
    rng: R,
    range: Range<u64>,
}

impl<R: Rng> Cadence<R> {
    /// `bounds` is `(min, max)`, `max` exclusive. Degenerate ranges collapse to `min`.
    pub fn new(rng: R, bounds: (u64, u64)) -> Self {
        let (min, max) = bounds;
        let min = min.max(1);
        Self {
            rng,
            range: min..max.max(min + 1),
        }
    }

    pub fn next_delay(&mut self) -> u64 {
        self.rng.random_range(self.range.clone())
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

/// Small PRNG seeded from `Math.random()`.
pub fn browser_rng() -> SmallRng {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    SmallRng::seed_from_u64((hi << 32) | lo)
}

/// Drive `model` against `clock` until it goes idle or the calling component
/// is cleaned up.
pub fn drive_timeline<T, C>(model: RwSignal<T>, clock: C)
where
    T: Timeline + Send + Sync + 'static,
    C: Clock + 'static,
{
    let alive = Arc::new(AtomicBool::new(true));
    let guard = Arc::clone(&alive);
    on_cleanup(move || guard.store(false, Ordering::Relaxed));

    leptos::task::spawn_local(run_timeline(model, clock, alive, |wait_ms| {
        TimeoutFuture::new(u32::try_from(wait_ms).unwrap_or(u32::MAX))
    }));
}

/// Sleep-advance loop behind [`drive_timeline`].
///
/// Stops when the model has no further deadline, when `alive` is cleared while
/// sleeping, or when the signal has been disposed. `sleep` resolves after the
/// given number of milliseconds.
pub async fn run_timeline<T, C, S, F>(model: RwSignal<T>, clock: C, alive: Arc<AtomicBool>, sleep: S)
where
    T: Timeline + Send + Sync + 'static,
    C: Clock,
    S: Fn(u64) -> F,
    F: Future<Output = ()>,
{
    while let Some(deadline) = model.try_with_untracked(|m| m.next_deadline()).flatten() {
        sleep(deadline.saturating_sub(clock.now_ms())).await;

        if !alive.load(Ordering::Relaxed) {
            break;
        }
        let now = clock.now_ms();
        if model.try_update(|m| m.advance(now)).is_none() {
            break;
        }
    }
    log::debug!("Timeline stopped");
}
