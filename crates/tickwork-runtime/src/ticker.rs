//! Fixed-timestep frame ticker
//!
//! Call [`Ticker::tick`] once per host iteration. The ticker measures wall time
//! since the previous call, adds it to a backlog, and pays the backlog off in
//! fixed quanta through [`FrameHandler::on_simulation_step`] before rendering
//! once through [`FrameHandler::on_render_frame`].

use crate::clock::{Clock, InstantSource, MonotonicClockSource};
use crate::config::TickerConfig;
use tickwork_core::Result;

/// Default simulation quantum (60 Hz)
pub const STEP_SECONDS: f64 = 1.0 / 60.0;

/// Default backlog ceiling, in quanta
pub const MAX_BACKLOG_STEPS: u32 = 10;

/// Default backlog ceiling in seconds
pub const MAX_BACKLOG: f64 = MAX_BACKLOG_STEPS as f64 * STEP_SECONDS;

/// Callbacks invoked by the ticker. Owned by the host.
pub trait FrameHandler {
    /// Advance the simulation by one fixed quantum.
    ///
    /// May run zero or many times per frame.
    fn on_simulation_step(&mut self, delta_seconds: f64);

    /// Draw the current state. Runs exactly once per tick.
    fn on_render_frame(&mut self);
}

/// Adapts a pair of closures to [`FrameHandler`]
pub struct FnHandler<S, R> {
    pub step: S,
    pub render: R,
}

impl<S, R> FrameHandler for FnHandler<S, R>
where
    S: FnMut(f64),
    R: FnMut(),
{
    fn on_simulation_step(&mut self, delta_seconds: f64) {
        (self.step)(delta_seconds)
    }

    fn on_render_frame(&mut self) {
        (self.render)()
    }
}

/// Lifecycle of a ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    /// The clock has not been read yet
    Uninitialized,
    Running,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Index of this tick, starting at zero
    pub frame_index: u64,
    /// Wall time since the previous sample in seconds. On the first tick this
    /// is the whole counter reading, measured from the source's epoch.
    pub delta_seconds: f64,
    /// Simulation steps dispatched
    pub steps: u32,
    /// Backlog discarded by the clamp, in seconds
    pub dropped_seconds: f64,
}

/// Fixed-timestep accumulator driving a [`FrameHandler`]
///
/// The backlog is capped at `max_backlog` so that a long stall (debugger,
/// suspend) costs simulation time instead of a burst of catch-up steps.
/// Stepping uses a strict `>` comparison: when the backlog lands exactly on a
/// quantum boundary, one quantum stays pending until the next tick.
///
/// The previous sample starts at zero, the epoch of the clock source, so the
/// first tick owes all time since that epoch (clamped like any other backlog).
/// `InstantSource` counts from its creation, which keeps that debt small when
/// the source is made just before the loop starts.
#[derive(Debug)]
pub struct Ticker<S = InstantSource> {
    clock: Clock<S>,
    config: TickerConfig,
    step_seconds: f64,
    max_backlog: f64,
    state: TickerState,
    /// Previous clock reading in seconds; zero before the first tick
    last_sample_time: f64,
    /// Seconds owed to the simulation
    accumulated_time: f64,
    frame_index: u64,
}

impl Ticker<InstantSource> {
    /// Ticker over the platform monotonic clock with default timing
    pub fn system() -> Self {
        Self::new(InstantSource::new())
    }
}

impl<S: MonotonicClockSource> Ticker<S> {
    /// Create a ticker with the default 60 Hz timestep
    pub fn new(source: S) -> Self {
        Self::from_parts(Clock::new(source), TickerConfig::default())
    }

    /// Create a ticker with a custom timestep, rejecting invalid configs
    pub fn with_config(source: S, config: TickerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(Clock::new(source), config))
    }

    fn from_parts(clock: Clock<S>, config: TickerConfig) -> Self {
        Self {
            clock,
            step_seconds: config.step_seconds(),
            max_backlog: config.max_backlog(),
            config,
            state: TickerState::Uninitialized,
            last_sample_time: 0.0,
            accumulated_time: 0.0,
            frame_index: 0,
        }
    }

    /// Run one frame. Call once per host iteration.
    ///
    /// A clock failure is returned before any state changes or callbacks run.
    pub fn tick<H>(&mut self, handler: &mut H) -> Result<TickReport>
    where
        H: FrameHandler + ?Sized,
    {
        let current = self.clock.now_seconds()?;

        if self.state == TickerState::Uninitialized {
            self.state = TickerState::Running;
            log::debug!("ticker started at {current:.6}s");
        }

        let delta = current - self.last_sample_time;
        self.last_sample_time = current;
        self.accumulated_time += delta;

        let mut dropped_seconds = 0.0;
        if self.accumulated_time > self.max_backlog {
            dropped_seconds = self.accumulated_time - self.max_backlog;
            self.accumulated_time = self.max_backlog;
            log::debug!(
                "frame {}: backlog clamped to {:.4}s, dropped {:.4}s",
                self.frame_index,
                self.max_backlog,
                dropped_seconds
            );
        }

        let mut steps = 0;
        while self.accumulated_time > self.step_seconds {
            self.accumulated_time -= self.step_seconds;
            handler.on_simulation_step(self.step_seconds);
            steps += 1;
        }

        handler.on_render_frame();

        let report = TickReport {
            frame_index: self.frame_index,
            delta_seconds: delta,
            steps,
            dropped_seconds,
        };
        log::trace!(
            "frame {}: dt={:.6}s steps={} backlog={:.6}s",
            report.frame_index,
            delta,
            steps,
            self.accumulated_time
        );

        self.frame_index = self.frame_index.wrapping_add(1);
        Ok(report)
    }

    /// [`tick`](Self::tick) with closures instead of a handler
    pub fn tick_with<F, G>(&mut self, step: F, render: G) -> Result<TickReport>
    where
        F: FnMut(f64),
        G: FnMut(),
    {
        self.tick(&mut FnHandler { step, render })
    }

    /// Re-baseline on the current clock reading and drop pending backlog.
    ///
    /// Use after the host resumes from suspension so the time spent away is
    /// not owed to the simulation. Fails like `tick` if the clock does.
    pub fn reset(&mut self) -> Result<()> {
        self.last_sample_time = self.clock.now_seconds()?;
        self.accumulated_time = 0.0;
        self.state = TickerState::Running;
        Ok(())
    }

    /// Pending backlog in quanta, for interpolating between states.
    ///
    /// In `[0, 1]` after a tick; exactly `1.0` when the backlog landed on a
    /// quantum boundary and the strict comparison held it back.
    pub fn interpolation_alpha(&self) -> f64 {
        self.accumulated_time / self.step_seconds
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn accumulated_time(&self) -> f64 {
        self.accumulated_time
    }

    /// Number of ticks completed so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }

    pub fn clock(&self) -> &Clock<S> {
        &self.clock
    }
}
