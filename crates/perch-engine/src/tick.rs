//! Fixed-period tick loop.
//!
//! The [`TickLoop`] drives the companion forward. Each tick, in a fixed
//! order:
//!
//! 1. The terrain provider is queried for the current window rectangles.
//!    A failed query is logged and treated as an empty desktop -- it never
//!    crashes the loop.
//! 2. The physics step integrates gravity and drift.
//! 3. The collision resolver decides grounded/airborne against the
//!    terrain and the synthetic floor.
//! 4. The behavior machine evaluates its transition table.
//! 5. The animation selector picks a frame, which is presented to the
//!    renderer.
//!
//! Everything runs on one logical thread with no preemption inside a tick,
//! so the shared [`AgentState`] needs no locking: pointer events and tick
//! stages are simply ordered. Because the only randomness is the machine's
//! seeded RNG, a run is fully deterministic: same seed + same terrain +
//! same pointer events = same wander.
//!
//! # Example
//!
//! ```
//! use perch_engine::prelude::*;
//!
//! let mut tick_loop = TickLoop::new(
//!     SimConfig::default(),
//!     TickConfig::default(),
//!     AnimationTable::default(),
//!     BehaviorMachine::with_seed(7),
//!     Box::new(EmptyTerrain),
//!     Box::new(NullRenderer),
//!     &FixedSizeAssets::new(96, 128),
//! )
//! .unwrap();
//!
//! tick_loop.run_ticks(10);
//! assert_eq!(tick_loop.tick_count(), 10);
//! ```

use std::time::{Duration, Instant};

use tracing::{info, warn};

use perch_core::agent::AgentState;
use perch_core::animation::{select_frame, AnimationTable, FramePick};
use perch_core::behavior::BehaviorMachine;
use perch_core::config::SimConfig;
use perch_core::drag::DragController;
use perch_core::physics::{apply_gravity, resolve_collision};

use crate::assets::{validate_assets, AssetSource};
use crate::input::PointerEvent;
use crate::render::{FramePresentation, Renderer, SizeHint};
use crate::terrain::TerrainProvider;
use crate::EngineError;

// ---------------------------------------------------------------------------
// TickConfig
// ---------------------------------------------------------------------------

/// Configuration for the tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Duration of one tick. Must be non-zero.
    pub tick_period: Duration,
    /// Headless mode: no real-time pacing, tick as fast as possible.
    pub headless: bool,
}

impl Default for TickConfig {
    /// Defaults to the observed 30 ms period, paced.
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(30),
            headless: false,
        }
    }
}

// ---------------------------------------------------------------------------
// TickDiagnostics
// ---------------------------------------------------------------------------

/// Wall-clock timings for the last tick.
#[derive(Debug, Clone, Default)]
pub struct TickDiagnostics {
    /// Time spent in the terrain query.
    pub terrain_time: Duration,
    /// Time spent in physics, collision, behavior, and frame selection.
    pub simulate_time: Duration,
    /// Time spent in the renderer.
    pub present_time: Duration,
    /// Total time for the tick.
    pub total_time: Duration,
}

// ---------------------------------------------------------------------------
// TickLoop
// ---------------------------------------------------------------------------

/// The fixed-period driver owning all simulation state.
pub struct TickLoop {
    agent: AgentState,
    machine: BehaviorMachine,
    table: AnimationTable,
    drag: DragController,
    terrain: Box<dyn TerrainProvider>,
    renderer: Box<dyn Renderer>,
    sim: SimConfig,
    config: TickConfig,
    tick_counter: u64,
    last_diagnostics: TickDiagnostics,
}

impl TickLoop {
    /// Compose and validate a tick loop.
    ///
    /// Validates the animation table and resolves every referenced sprite
    /// frame against `assets`; either failing is fatal and nothing starts.
    /// The agent's height is derived from the reference frame, and its
    /// start position from `sim`.
    ///
    /// # Panics
    ///
    /// Panics if `config.tick_period` is zero.
    pub fn new(
        sim: SimConfig,
        config: TickConfig,
        table: AnimationTable,
        machine: BehaviorMachine,
        terrain: Box<dyn TerrainProvider>,
        renderer: Box<dyn Renderer>,
        assets: &dyn AssetSource,
    ) -> Result<Self, EngineError> {
        assert!(
            !config.tick_period.is_zero(),
            "tick_period must be non-zero"
        );

        let height = validate_assets(assets, &table)?;
        let agent = AgentState::new(sim.start_x, sim.start_y, height);

        info!(
            height,
            start_x = sim.start_x,
            start_y = sim.start_y,
            period_ms = config.tick_period.as_millis() as u64,
            "companion ready"
        );

        Ok(Self {
            agent,
            machine,
            table,
            drag: DragController::new(),
            terrain,
            renderer,
            sim,
            config,
            tick_counter: 0,
            last_diagnostics: TickDiagnostics::default(),
        })
    }

    /// Execute one tick of the full pipeline. Returns the presented frame.
    pub fn tick(&mut self) -> FramePick {
        let tick_start = Instant::now();

        // Terrain. A failing provider leaves the agent alone on an empty
        // desktop rather than taking the loop down.
        let terrain_start = Instant::now();
        let rects = match self.terrain.obstacles() {
            Ok(rects) => rects,
            Err(err) => {
                warn!(%err, "terrain query failed; treating the desktop as empty");
                Vec::new()
            }
        };
        let terrain_time = terrain_start.elapsed();

        // Simulation stages, in pipeline order.
        let simulate_start = Instant::now();
        apply_gravity(&mut self.agent, &self.sim);
        resolve_collision(&mut self.agent, &rects, &self.sim);
        self.machine.transition(&mut self.agent, &self.sim);
        let pick = select_frame(&mut self.agent, &self.table, &self.sim);
        let simulate_time = simulate_start.elapsed();

        // Presentation.
        let present_start = Instant::now();
        let presentation = FramePresentation {
            frame: pick.frame,
            mirrored: pick.mirrored,
            x: self.agent.x,
            y: self.agent.y + pick.render_offset_y,
            size_hint: SizeHint {
                width: self.agent.height,
                height: self.agent.height,
            },
        };
        self.renderer.present(&presentation);
        let present_time = present_start.elapsed();

        self.tick_counter += 1;
        self.last_diagnostics = TickDiagnostics {
            terrain_time,
            simulate_time,
            present_time,
            total_time: tick_start.elapsed(),
        };

        pick
    }

    /// Run `count` ticks back to back, without pacing.
    pub fn run_ticks(&mut self, count: u64) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// Run forever, pacing each tick to the configured period unless
    /// headless. The only way out is process termination.
    pub fn run(&mut self) {
        loop {
            let start = Instant::now();
            self.tick();
            if !self.config.headless {
                if let Some(rest) = self.config.tick_period.checked_sub(start.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }
    }

    /// Forward a pointer event into the drag controller.
    ///
    /// Down begins a drag, moves reposition the agent by the pointer delta
    /// (bypassing physics entirely), and release drops the agent into a
    /// fall.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(point) => self.drag.begin(point, &mut self.agent),
            PointerEvent::Moved(point) => self.drag.update(point, &mut self.agent),
            PointerEvent::Up(_) => self.drag.release(&mut self.agent),
        }
    }

    // -- accessors ----------------------------------------------------------

    /// Read-only access to the agent.
    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    /// Mutable access to the agent. Prefer the pipeline for mutations;
    /// direct access is for setup and testing.
    pub fn agent_mut(&mut self) -> &mut AgentState {
        &mut self.agent
    }

    /// Number of ticks executed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_counter
    }

    /// Simulated time elapsed, computed as `tick_count * tick_period` to
    /// avoid drift from accumulation.
    pub fn sim_time(&self) -> Duration {
        let nanos = (self.config.tick_period.as_nanos() as u64).saturating_mul(self.tick_counter);
        Duration::from_nanos(nanos)
    }

    /// Whether a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether headless mode is enabled.
    pub fn is_headless(&self) -> bool {
        self.config.headless
    }

    /// The simulation constants in use.
    pub fn sim_config(&self) -> &SimConfig {
        &self.sim
    }

    /// Timings from the last tick.
    pub fn last_diagnostics(&self) -> &TickDiagnostics {
        &self.last_diagnostics
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
