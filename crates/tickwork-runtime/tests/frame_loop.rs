//! End-to-end frame loop driven through the public API

use tickwork_core::{padded_left, TickworkError};
use tickwork_runtime::{
    FrameHandler, ManualClockSource, Ticker, TickerConfig, TickerState, MAX_BACKLOG_STEPS,
    STEP_SECONDS,
};

/// Integrates a constant velocity and snapshots it on every render
struct Body {
    position: f64,
    velocity: f64,
    simulated: f64,
    frames: Vec<String>,
}

impl Body {
    fn new(velocity: f64) -> Self {
        Self {
            position: 0.0,
            velocity,
            simulated: 0.0,
            frames: Vec::new(),
        }
    }
}

impl FrameHandler for Body {
    fn on_simulation_step(&mut self, delta_seconds: f64) {
        self.position += self.velocity * delta_seconds;
        self.simulated += delta_seconds;
    }

    fn on_render_frame(&mut self) {
        let label = padded_left(&self.frames.len().to_string(), 4, '0');
        self.frames.push(label);
    }
}

#[test]
fn steady_sixty_hz_host() {
    // Microsecond counter, host frames of ~16.7ms
    let source = ManualClockSource::new(1_000_000);
    let mut ticker = Ticker::new(source.clone());
    let mut body = Body::new(2.0);

    ticker.tick(&mut body).unwrap();
    let mut steps = 0;
    for _ in 0..120 {
        source.advance(16_667);
        steps += ticker.tick(&mut body).unwrap().steps;
    }

    assert_eq!(body.frames.len(), 121);
    assert_eq!(body.frames[7], "0007");
    // ~2 seconds elapsed; one quantum at most stays pending
    assert!((119..=120).contains(&steps), "ran {steps} steps");
    assert!((body.simulated - steps as f64 * STEP_SECONDS).abs() < 1e-9);
    assert!((body.position - 2.0 * body.simulated).abs() < 1e-9);
    assert_eq!(ticker.state(), TickerState::Running);
}

#[test]
fn slow_host_catches_up_in_bursts() {
    let source = ManualClockSource::new(1_000_000);
    let mut ticker = Ticker::new(source.clone());
    let mut body = Body::new(1.0);

    ticker.tick(&mut body).unwrap();
    source.advance(50_000); // 50ms frame, three quanta
    let report = ticker.tick(&mut body).unwrap();

    assert!((2..=3).contains(&report.steps));
    assert_eq!(report.dropped_seconds, 0.0);
    assert_eq!(body.frames.len(), 2);
}

#[test]
fn stall_is_bounded() {
    let source = ManualClockSource::new(1_000_000);
    let mut ticker = Ticker::new(source.clone());
    let mut body = Body::new(1.0);

    ticker.tick(&mut body).unwrap();
    source.advance_seconds(5.0);
    let report = ticker.tick(&mut body).unwrap();

    assert!(report.steps <= MAX_BACKLOG_STEPS);
    assert!(report.dropped_seconds > 4.8);
    assert!(body.simulated <= MAX_BACKLOG_STEPS as f64 * STEP_SECONDS + 1e-9);
}

#[test]
fn configured_rate_from_toml() {
    let config = TickerConfig::from_toml_str("step_hz = 10.0\nmax_backlog_steps = 3").unwrap();
    let source = ManualClockSource::new(1000);
    let mut ticker = Ticker::with_config(source.clone(), config).unwrap();
    let mut body = Body::new(1.0);

    ticker.tick(&mut body).unwrap();
    source.advance(250);
    let report = ticker.tick(&mut body).unwrap();
    assert_eq!(report.steps, 2);
    assert!((ticker.step_seconds() - 0.1).abs() < 1e-12);

    source.advance(10_000);
    let report = ticker.tick(&mut body).unwrap();
    assert!(report.steps <= 3);
}

#[test]
fn bad_config_is_rejected() {
    let err = TickerConfig::from_toml_str("max_backlog_steps = 0").unwrap_err();
    assert!(matches!(err, TickworkError::InvalidArgument(_)));
}
