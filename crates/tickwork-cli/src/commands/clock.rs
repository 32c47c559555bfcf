//! Clock command - samples the monotonic clock and reports its resolution

use anyhow::{Context, Result};
use tickwork_core::formatted;
use tickwork_runtime::Clock;

pub fn run(samples: u32) -> Result<()> {
    let mut clock = Clock::system();
    clock.initialize().context("Monotonic clock unavailable")?;

    if let Some(reciprocal) = clock.reciprocal_frequency() {
        println!("{}", formatted!("Counter period:   {:e}s", reciprocal));
    }

    let mut previous = clock.now_seconds()?;
    let mut finest: Option<f64> = None;
    for _ in 0..samples {
        let now = clock.now_seconds()?;
        let step = now - previous;
        if step > 0.0 && finest.map_or(true, |f| step < f) {
            finest = Some(step);
        }
        log::debug!("sample {:.9}s (+{:e}s)", now, step);
        previous = now;
    }

    match finest {
        Some(resolution) => println!("{}", formatted!("Observed step:    {:e}s", resolution)),
        None => println!("Observed step:    none (clock did not advance)"),
    }

    Ok(())
}
