//! Headless wander demo -- the companion falls onto a fake desktop of two
//! windows and wanders for a few seconds of simulated time, printing a
//! trace instead of painting an overlay.
//!
//! Run with:
//!   cargo run --example headless_wander -p perch-engine
//!
//! Set RUST_LOG=debug to watch behavior transitions.

use anyhow::Result;
use perch_engine::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Two overlapping "application windows" to land on and climb over.
    let terrain = StaticTerrain::new(vec![
        Rect::new(200.0, 420.0, 1100.0, 900.0),
        Rect::new(900.0, 650.0, 1800.0, 1000.0),
    ]);

    let recorder = RecordingRenderer::new();
    let mut tick_loop = TickLoop::new(
        SimConfig::default(),
        TickConfig {
            headless: true,
            ..Default::default()
        },
        AnimationTable::default(),
        BehaviorMachine::from_entropy(),
        Box::new(terrain),
        Box::new(recorder.clone()),
        &FixedSizeAssets::new(96, 128),
    )?;

    for _ in 0..10 {
        tick_loop.run_ticks(100);
        let agent = tick_loop.agent();
        println!(
            "tick {:>5}  {:<20}  pos ({:7.1}, {:7.1})  grounded {}",
            tick_loop.tick_count(),
            agent.behavior,
            agent.x,
            agent.y,
            agent.grounded,
        );
    }

    println!(
        "presented {} frames over {:?} of simulated time",
        recorder.len(),
        tick_loop.sim_time(),
    );
    Ok(())
}
