//! Monotonic clock built on an injectable counter source

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use tickwork_core::{Result, TickworkError};

/// A monotonic hardware-style counter with a fixed frequency
///
/// One implementation per platform or host. The counter must never decrease
/// while the source is alive.
pub trait MonotonicClockSource {
    /// Counter ticks per second
    fn frequency(&self) -> Result<u64>;

    /// Current counter value
    fn counter(&self) -> Result<u64>;
}

/// Nanosecond counter backed by `std::time::Instant`
///
/// std picks the platform primitive at build time (QueryPerformanceCounter on
/// Windows, `CLOCK_MONOTONIC` on Unix). The counter starts at zero when the
/// source is created.
#[derive(Debug, Clone, Copy)]
pub struct InstantSource {
    origin: Instant,
}

impl InstantSource {
    pub const FREQUENCY: u64 = 1_000_000_000;

    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClockSource for InstantSource {
    fn frequency(&self) -> Result<u64> {
        Ok(Self::FREQUENCY)
    }

    fn counter(&self) -> Result<u64> {
        let nanos = self.origin.elapsed().as_nanos();
        u64::try_from(nanos).map_err(|_| {
            TickworkError::ClockUnavailable(format!("counter overflowed u64: {nanos} ns"))
        })
    }
}

/// Counter driven by the host instead of hardware
///
/// Clones share the same counter, so a test can keep one handle and give the
/// other to a `Clock`. Intended for deterministic replay and tests.
#[derive(Debug, Clone)]
pub struct ManualClockSource {
    frequency: u64,
    counter: Rc<Cell<u64>>,
}

impl ManualClockSource {
    pub fn new(frequency: u64) -> Self {
        Self {
            frequency,
            counter: Rc::new(Cell::new(0)),
        }
    }

    /// Set the counter. Going backwards breaks the monotonic contract.
    pub fn set(&self, counter: u64) {
        debug_assert!(counter >= self.counter.get(), "manual clock moved backwards");
        self.counter.set(counter);
    }

    /// Move the counter forward by `ticks`
    pub fn advance(&self, ticks: u64) {
        self.counter.set(self.counter.get().saturating_add(ticks));
    }

    /// Move the counter forward by (approximately) `seconds`
    pub fn advance_seconds(&self, seconds: f64) {
        self.advance((seconds * self.frequency as f64).round() as u64);
    }

    pub fn get(&self) -> u64 {
        self.counter.get()
    }
}

impl MonotonicClockSource for ManualClockSource {
    fn frequency(&self) -> Result<u64> {
        Ok(self.frequency)
    }

    fn counter(&self) -> Result<u64> {
        Ok(self.counter.get())
    }
}

/// Converts counter readings into seconds
///
/// The frequency is read lazily on the first reading and kept for the life of
/// the clock.
#[derive(Debug)]
pub struct Clock<S = InstantSource> {
    source: S,
    /// Seconds per counter tick; `None` until initialized, positive after
    reciprocal_frequency: Option<f64>,
}

impl Clock<InstantSource> {
    /// Clock over the platform monotonic counter
    pub fn system() -> Self {
        Self::new(InstantSource::new())
    }
}

impl<S: MonotonicClockSource> Clock<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            reciprocal_frequency: None,
        }
    }

    /// Read the counter frequency. Safe to call again; the frequency is re-read.
    pub fn initialize(&mut self) -> Result<()> {
        self.read_frequency().map(|_| ())
    }

    /// Current counter reading in seconds, initializing on first use
    pub fn now_seconds(&mut self) -> Result<f64> {
        let reciprocal = match self.reciprocal_frequency {
            Some(r) => r,
            None => self.read_frequency()?,
        };

        let counter = self.source.counter()?;
        Ok(counter as f64 * reciprocal)
    }

    fn read_frequency(&mut self) -> Result<f64> {
        let frequency = self.source.frequency()?;
        if frequency == 0 {
            return Err(TickworkError::ClockUnavailable(
                "counter reports a frequency of zero".into(),
            ));
        }

        let reciprocal = 1.0 / frequency as f64;
        self.reciprocal_frequency = Some(reciprocal);
        log::debug!("clock initialized: {frequency} Hz ({reciprocal:e} s/tick)");
        Ok(reciprocal)
    }

    pub fn is_initialized(&self) -> bool {
        self.reciprocal_frequency.is_some()
    }

    /// Seconds per counter tick, once initialized
    pub fn reciprocal_frequency(&self) -> Option<f64> {
        self.reciprocal_frequency
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
