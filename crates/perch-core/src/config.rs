//! Simulation tuning constants.
//!
//! Everything here is read once at startup and treated as immutable for the
//! process lifetime. The defaults reproduce the observed companion behavior
//! at the default 30 ms tick period; the per-tick transition probabilities
//! are tick-rate-dependent, so hosts that change the tick period should
//! rescale them to keep the wander visually equivalent.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

/// Constants governing physics, screen bounds, and behavior transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Downward acceleration in px/tick² applied while airborne.
    pub gravity: f64,
    /// Horizontal speed in px/tick while walking (and climbing a ceiling).
    pub walk_speed: f64,
    /// Vertical speed in px/tick while climbing a wall.
    pub climb_speed: f64,
    /// Horizontal drift in px/tick while falling.
    pub fall_drift_speed: f64,

    /// Screen width in pixels.
    pub screen_width: f64,
    /// Screen height in pixels.
    pub screen_height: f64,

    /// Agent start position, top-left anchored.
    pub start_x: f64,
    /// See [`start_x`](Self::start_x).
    pub start_y: f64,

    /// Height of the landing zone below a window's top edge. Tolerates
    /// title-bar thickness variance across window managers.
    pub landing_band: f64,
    /// Distance above the physical screen bottom where the synthetic floor
    /// sits, so the agent never visually sinks below the desktop.
    pub floor_margin: f64,

    /// How far past the left screen edge a walk may reach before the
    /// boundary rule fires.
    pub left_overhang: f64,
    /// How far short of the right screen edge the boundary rule fires.
    pub right_overhang: f64,
    /// How far above the top screen edge a wall climb may reach before the
    /// exit rule fires.
    pub ceiling_overhang: f64,

    /// Per-tick probability that hitting a walk boundary starts a wall
    /// climb instead of reversing direction.
    pub edge_climb_chance: f64,
    /// Probability that topping out a wall climb continues onto the ceiling
    /// instead of dropping.
    pub ceiling_from_wall_chance: f64,
    /// Per-tick probability of letting go of the ceiling.
    pub ceiling_drop_chance: f64,
    /// Per-tick probability that a resting state wakes into a walk.
    pub idle_wake_chance: f64,

    /// Frame-cursor advance per tick. 0.5 holds each logical frame for two
    /// ticks.
    pub frame_step: f64,
    /// Cosmetic vertical render offset while dangling legs off a ledge.
    /// Never touches the authoritative `y`.
    pub dangle_render_offset: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            walk_speed: 5.0,
            climb_speed: 5.0,
            fall_drift_speed: 5.0,

            screen_width: 1920.0,
            screen_height: 1080.0,

            start_x: 1400.0,
            start_y: 100.0,

            landing_band: 50.0,
            floor_margin: 40.0,

            left_overhang: 50.0,
            right_overhang: 75.0,
            ceiling_overhang: 50.0,

            edge_climb_chance: 1.0 / 5.0,
            ceiling_from_wall_chance: 1.0 / 5.0,
            ceiling_drop_chance: 1.0 / 101.0,
            idle_wake_chance: 1.0 / 101.0,

            frame_step: 0.5,
            dangle_render_offset: 15.0,
        }
    }
}

impl SimConfig {
    /// The x coordinate at which a leftward walk hits the screen boundary.
    pub fn walk_min_x(&self) -> f64 {
        -self.left_overhang
    }

    /// The x coordinate at which a rightward walk hits the screen boundary.
    pub fn walk_max_x(&self) -> f64 {
        self.screen_width - self.right_overhang
    }

    /// The resting y coordinate on the synthetic floor for an agent of the
    /// given height.
    pub fn floor_y(&self, agent_height: f64) -> f64 {
        self.screen_height - agent_height - self.floor_margin
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
