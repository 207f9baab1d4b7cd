//! Event-rate meter with 1/5/15 minute moving averages.
//!
//! Rates are exponentially weighted moving averages updated every
//! `TICK_INTERVAL`. There is no background ticker: the meter catches up on
//! elapsed intervals whenever it is marked or read.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::Metric;

const TICK_INTERVAL: Duration = Duration::from_secs(5);

// After an hour of idle ticks every average has decayed to noise.
const MAX_CATCH_UP_TICKS: u128 = 720;

struct Ewma {
    alpha: f64,
    rate: f64,
    initialized: bool,
}

impl Ewma {
    fn with_minutes(minutes: f64) -> Self {
        Self {
            alpha: 1.0 - (-TICK_INTERVAL.as_secs_f64() / 60.0 / minutes).exp(),
            rate: 0.0,
            initialized: false,
        }
    }

    fn tick(&mut self, events: u64) {
        let instant_rate = events as f64 / TICK_INTERVAL.as_secs_f64();
        if self.initialized {
            self.rate += self.alpha * (instant_rate - self.rate);
        } else {
            self.rate = instant_rate;
            self.initialized = true;
        }
    }
}

struct Rates {
    m1: Ewma,
    m5: Ewma,
    m15: Ewma,
    last_tick: Instant,
}

impl Rates {
    fn tick(&mut self, events: u64) {
        self.m1.tick(events);
        self.m5.tick(events);
        self.m15.tick(events);
    }
}

/// Point-in-time view of a [`Meter`]. Rates are events per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterSnapshot {
    #[serde(rename = "15m.rate")]
    pub rate15: f64,
    #[serde(rename = "1m.rate")]
    pub rate1: f64,
    #[serde(rename = "5m.rate")]
    pub rate5: f64,
    pub count: u64,
    #[serde(rename = "mean.rate")]
    pub rate_mean: f64,
}

/// Monotonic event meter, safe to mark from many tasks at once.
pub struct Meter {
    count: AtomicU64,
    uncounted: AtomicU64,
    start: Instant,
    rates: Mutex<Rates>,
}

impl Default for Meter {
    fn default() -> Self {
        Self::new()
    }
}

impl Meter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(start: Instant) -> Self {
        Self {
            count: AtomicU64::new(0),
            uncounted: AtomicU64::new(0),
            start,
            rates: Mutex::new(Rates {
                m1: Ewma::with_minutes(1.0),
                m5: Ewma::with_minutes(5.0),
                m15: Ewma::with_minutes(15.0),
                last_tick: start,
            }),
        }
    }

    /// Record `n` events.
    pub fn mark(&self, n: u64) {
        self.mark_at(n, Instant::now());
    }

    /// Total events recorded since creation.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MeterSnapshot {
        self.snapshot_at(Instant::now())
    }

    fn mark_at(&self, n: u64, now: Instant) {
        self.tick_to(now);
        self.count.fetch_add(n, Ordering::Relaxed);
        self.uncounted.fetch_add(n, Ordering::Relaxed);
    }

    fn snapshot_at(&self, now: Instant) -> MeterSnapshot {
        self.tick_to(now);
        let rates = self.rates.lock().unwrap_or_else(PoisonError::into_inner);
        let count = self.count();
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        MeterSnapshot {
            rate15: rates.m15.rate,
            rate1: rates.m1.rate,
            rate5: rates.m5.rate,
            count,
            rate_mean: if elapsed > 0.0 { count as f64 / elapsed } else { 0.0 },
        }
    }

    /// Apply every whole tick interval that elapsed since the last tick.
    fn tick_to(&self, now: Instant) {
        let mut rates = self.rates.lock().unwrap_or_else(PoisonError::into_inner);
        let elapsed = now.saturating_duration_since(rates.last_tick).as_nanos();
        let interval = TICK_INTERVAL.as_nanos();
        let ticks = elapsed / interval;
        if ticks == 0 {
            return;
        }

        // Keep the sub-interval remainder so ticks stay aligned to the grid.
        let remainder = Duration::from_nanos((elapsed % interval) as u64);
        rates.last_tick = now - remainder;

        // Events marked before this call belong to the first elapsed interval.
        let events = self.uncounted.swap(0, Ordering::AcqRel);
        rates.tick(events);
        for _ in 1..ticks.min(MAX_CATCH_UP_TICKS) {
            rates.tick(0);
        }
    }
}

impl Metric for Meter {
    fn kind(&self) -> &'static str {
        "meter"
    }

    fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.snapshot())
    }
}
