//! Simulated "live claims" progress.
//!
//! Purely local: never reconciled with the store and reset on reload.

use rand::Rng;

use crate::services::scheduler::{Cadence, Timeline};
use crate::utils::constants::{CLAIM_START, CLAIM_TOTAL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveCounter {
    claimed: u32,
    total: u32,
}

impl Default for LiveCounter {
    fn default() -> Self {
        Self::new(CLAIM_START, CLAIM_TOTAL)
    }
}

impl LiveCounter {
    pub fn new(start: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            claimed: start.min(total),
            total,
        }
    }

    pub fn claimed(&self) -> u32 {
        self.claimed
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_full(&self) -> bool {
        self.claimed >= self.total
    }

    /// One more claim, up to the total. Returns whether the count moved.
    pub fn tick(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.claimed += 1;
        true
    }

    /// `claimed / total` as a whole percentage, rounded half up.
    pub fn percentage(&self) -> u32 {
        (f64::from(self.claimed) / f64::from(self.total) * 100.0).round() as u32
    }
}

/// [`LiveCounter`] ticking on a fixed period, picked at random once on start.
#[derive(Clone, Copy, Debug)]
pub struct CounterTimeline {
    counter: LiveCounter,
    period: u64,
    next_tick_at: u64,
}

impl CounterTimeline {
    pub fn start<R: Rng>(counter: LiveCounter, mut cadence: Cadence<R>, now_ms: u64) -> Self {
        let period = cadence.next_delay();
        Self {
            counter,
            period,
            next_tick_at: now_ms + period,
        }
    }

    pub fn counter(&self) -> &LiveCounter {
        &self.counter
    }

    /// Milliseconds between ticks.
    pub fn period(&self) -> u64 {
        self.period
    }
}

impl Timeline for CounterTimeline {
    fn next_deadline(&self) -> Option<u64> {
        (!self.counter.is_full()).then_some(self.next_tick_at)
    }

    fn advance(&mut self, now_ms: u64) {
        while !self.counter.is_full() && self.next_tick_at <= now_ms {
            self.counter.tick();
            self.next_tick_at += self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn timeline(seed: u64) -> CounterTimeline {
        CounterTimeline::start(
            LiveCounter::default(),
            Cadence::new(SmallRng::seed_from_u64(seed), (2_000, 5_000)),
            0,
        )
    }

    #[test]
    fn test_starts_at_twenty_of_one_fifty() {
        let counter = LiveCounter::default();
        assert_eq!(counter.claimed(), 20);
        assert_eq!(counter.total(), 150);
        assert_eq!(counter.percentage(), 13);
    }

    #[test]
    fn test_tick_clamps_at_total() {
        let mut counter = LiveCounter::new(149, 150);
        assert!(counter.tick());
        assert_eq!(counter.claimed(), 150);
        assert_eq!(counter.percentage(), 100);

        assert!(!counter.tick());
        assert_eq!(counter.claimed(), 150);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(LiveCounter::new(1, 200).percentage(), 1); // 0.5 rounds up
        assert_eq!(LiveCounter::new(1, 3).percentage(), 33);
        assert_eq!(LiveCounter::new(2, 3).percentage(), 67);
    }

    #[test]
    fn test_non_decreasing_and_bounded_over_time() {
        for seed in 0..20 {
            let mut t = timeline(seed);
            let mut previous = t.counter().claimed();
            for now in (0..1_000_000).step_by(250) {
                t.advance(now);
                let claimed = t.counter().claimed();
                assert!(claimed >= previous);
                assert!(claimed <= 150);
                previous = claimed;
            }
            assert!(t.counter().is_full());
        }
    }

    #[test]
    fn test_ticks_on_one_fixed_period() {
        let mut t = timeline(9);
        let period = t.period();
        assert!((2_000..5_000).contains(&period));

        let mut ticks = vec![];
        let mut last = t.counter().claimed();
        while let Some(deadline) = t.next_deadline() {
            t.advance(deadline);
            assert_eq!(t.counter().claimed(), last + 1);
            last += 1;
            ticks.push(deadline);
        }
        assert_eq!(ticks.len(), 130);
        assert_eq!(ticks[0], period);
        for pair in ticks.windows(2) {
            assert_eq!(pair[1] - pair[0], period);
        }
    }

    #[test]
    fn test_period_varies_between_starts() {
        let periods: std::collections::HashSet<u64> = (0..20).map(|seed| timeline(seed).period()).collect();
        assert!(periods.len() > 1);
        assert!(periods.iter().all(|p| (2_000..5_000).contains(p)));
    }

    #[test]
    fn test_idle_once_full() {
        let mut t = CounterTimeline::start(
            LiveCounter::new(150, 150),
            Cadence::new(SmallRng::seed_from_u64(3), (2_000, 5_000)),
            0,
        );
        assert_eq!(t.next_deadline(), None);
        t.advance(u64::MAX / 2);
        assert_eq!(t.counter().claimed(), 150);
    }
}
