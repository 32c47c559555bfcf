//! Run command - drives the fixed-timestep loop against the system clock

use anyhow::{Context, Result};
use std::path::Path;
use tickwork_core::{formatted, int_to_string, padded_left};
use tickwork_runtime::{sleep_milliseconds, FrameHandler, InstantSource, Ticker, TickerConfig};

pub struct RunArgs {
    pub frames: u32,
    pub sleep_ms: u32,
    pub config: Option<String>,
}

/// Stand-in for a game's simulation and renderer
#[derive(Default)]
struct FrameStats {
    steps: u64,
    renders: u64,
    simulated_seconds: f64,
}

impl FrameHandler for FrameStats {
    fn on_simulation_step(&mut self, delta_seconds: f64) {
        self.steps += 1;
        self.simulated_seconds += delta_seconds;
    }

    fn on_render_frame(&mut self) {
        self.renders += 1;
    }
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => TickerConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load ticker config: {}", path))?,
        None => TickerConfig::default(),
    };

    log::info!(
        "running {} frames at {} Hz, sleeping {} ms per frame",
        args.frames,
        config.step_hz,
        args.sleep_ms
    );

    let mut ticker = Ticker::with_config(InstantSource::new(), config)
        .context("Invalid ticker config")?;
    let mut stats = FrameStats::default();
    let mut dropped = 0.0;
    let width = int_to_string(i64::from(args.frames)).len();

    for _ in 0..args.frames {
        let report = ticker
            .tick(&mut stats)
            .with_context(|| format!("Frame {} failed", ticker.frame_index()))?;
        dropped += report.dropped_seconds;

        log::debug!(
            "frame {}: {} steps, alpha {:.2}",
            padded_left(&report.frame_index.to_string(), width, '0'),
            report.steps,
            ticker.interpolation_alpha()
        );

        sleep_milliseconds(args.sleep_ms);
    }

    println!("{}", formatted!("Render frames:    {}", stats.renders));
    println!("{}", formatted!("Simulation steps: {}", stats.steps));
    println!(
        "{}",
        formatted!("Simulated time:   {:.3}s", stats.simulated_seconds)
    );
    println!("{}", formatted!("Dropped backlog:  {:.3}s", dropped));

    Ok(())
}
