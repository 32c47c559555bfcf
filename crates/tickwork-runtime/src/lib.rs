//! tickwork Runtime - Frame timing building blocks
//!
//! Provides the pieces a host frame loop needs:
//! - `Clock` / `MonotonicClockSource` - counter-to-seconds conversion over an injectable source
//! - `Ticker` - fixed-timestep accumulator dispatching to a `FrameHandler`
//! - `TickerConfig` - timestep parameters loaded from TOML
//! - `sleep_milliseconds` - thread sleep for frame pacing
//! - `init_logging` - one-shot `env_logger` setup for hosts

mod clock;
mod config;
mod logging;
mod sleep;
mod ticker;

pub use clock::{Clock, InstantSource, ManualClockSource, MonotonicClockSource};
pub use config::TickerConfig;
pub use logging::{init_logging, LoggingConfig};
pub use sleep::sleep_milliseconds;
pub use ticker::{
    FnHandler, FrameHandler, TickReport, Ticker, TickerState, MAX_BACKLOG, MAX_BACKLOG_STEPS,
    STEP_SECONDS,
};
