//! Strike a drum head on a realtime clock, then render the last frame.
//!
//! Run with `RUST_LOG=debug` to see rejected strikes and clock lifecycle.

use std::time::Duration;

use membrane::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let engine = RealtimeMembrane::new(MembraneConfig::default(), EngineConfig::default())?;
    let viewport = Viewport::new(400.0, 400.0)?;

    // Pointer presses: center, off-center, and a corner that misses the drum.
    for (px, py) in [(200.0, 200.0), (120.0, 260.0), (8.0, 8.0)] {
        let point = viewport.to_grid(px, py, engine.grid_size());
        engine.strike(point)?;
        std::thread::sleep(Duration::from_millis(150));
        let m = engine.metrics();
        tracing::info!(
            frame = %m.frame,
            applied = m.strikes_applied,
            rejected = m.strikes_rejected,
            advance_us = m.advance_us,
            "struck {point}"
        );
    }

    if let Some(snap) = engine.latest() {
        let frame = GrayFrame::rasterize(&*snap, 100, 100, ToneCurve::default())?;
        let lit = frame.pixels().iter().filter(|&&g| g != 191 && g != 0).count();
        tracing::info!(
            frame = %snap.frame(),
            peak = snap.peak_amplitude(),
            lit_pixels = lit,
            "rendered latest frame"
        );
    }

    let sim = engine.shutdown()?;
    tracing::info!(frames = sim.frame().0, finite = sim.is_finite(), "done");
    Ok(())
}
