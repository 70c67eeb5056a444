//! Behavior states and the per-tick transition machine.
//!
//! The machine is evaluated exactly once per tick, after the physics step
//! and collision resolution, and decides which movement rule and animation
//! sequence apply next. All randomness flows through an injected, seedable
//! PCG generator so transition sequences are reproducible in tests: same
//! seed + same grounding inputs = same wander.
//!
//! The transition probabilities in [`SimConfig`](crate::config::SimConfig)
//! are per-tick and therefore tick-rate-dependent; see the config module
//! docs.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::AgentState;
use crate::config::SimConfig;

// ---------------------------------------------------------------------------
// BehaviorState
// ---------------------------------------------------------------------------

/// The fixed set of named behaviors. There is no terminal state; the
/// machine runs for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Airborne under gravity.
    Fall,
    /// Walking along a platform or the floor.
    Walk,
    /// Sitting still.
    Sit,
    /// Sitting upright.
    SitUp,
    /// Sitting on a ledge with legs hanging over it.
    DangleLegs,
    /// Lying down.
    LayDown,
    /// Lying down, swinging legs.
    LieDownSwingLegs,
    /// Holding onto the ceiling without moving.
    GrabCeiling,
    /// Traversing the ceiling.
    ClimbCeiling,
    /// Holding onto a wall without moving.
    GrabWall,
    /// Ascending a screen-edge wall.
    ClimbWall,
    /// Carried by the pointer; entered and exited only by the drag
    /// controller.
    Dragging,
}

impl BehaviorState {
    /// Every state, for table validation.
    pub const ALL: [BehaviorState; 12] = [
        BehaviorState::Fall,
        BehaviorState::Walk,
        BehaviorState::Sit,
        BehaviorState::SitUp,
        BehaviorState::DangleLegs,
        BehaviorState::LayDown,
        BehaviorState::LieDownSwingLegs,
        BehaviorState::GrabCeiling,
        BehaviorState::ClimbCeiling,
        BehaviorState::GrabWall,
        BehaviorState::ClimbWall,
        BehaviorState::Dragging,
    ];

    /// Whether gravity integration is suspended in this state. Climbing
    /// states move by their own rule; dragging follows the pointer.
    pub fn suspends_physics(self) -> bool {
        matches!(
            self,
            BehaviorState::ClimbWall | BehaviorState::ClimbCeiling | BehaviorState::Dragging
        )
    }

    /// Whether this is one of the idle/rest states that wake into a walk.
    pub fn is_resting(self) -> bool {
        matches!(
            self,
            BehaviorState::Sit
                | BehaviorState::SitUp
                | BehaviorState::DangleLegs
                | BehaviorState::LayDown
                | BehaviorState::LieDownSwingLegs
        )
    }
}

impl fmt::Display for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BehaviorState::Fall => "fall",
            BehaviorState::Walk => "walk",
            BehaviorState::Sit => "sit",
            BehaviorState::SitUp => "sit up",
            BehaviorState::DangleLegs => "dangle legs",
            BehaviorState::LayDown => "lay down",
            BehaviorState::LieDownSwingLegs => "lie down swing legs",
            BehaviorState::GrabCeiling => "grab ceiling",
            BehaviorState::ClimbCeiling => "climb ceiling",
            BehaviorState::GrabWall => "grab wall",
            BehaviorState::ClimbWall => "climb wall",
            BehaviorState::Dragging => "dragging",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// BehaviorMachine
// ---------------------------------------------------------------------------

/// The per-tick transition machine. Owns the random source; everything else
/// it needs arrives by reference each tick.
#[derive(Debug, Clone)]
pub struct BehaviorMachine {
    rng: Pcg64Mcg,
}

impl BehaviorMachine {
    /// Create a machine with an explicit seed. Tests use this for
    /// reproducible transition sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Create a machine seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Evaluate the transition table once.
    ///
    /// Must run after the physics step and collision resolution so that
    /// `agent.grounded` reflects this tick. Grounded movement (walking,
    /// climbing) is applied here; airborne movement belongs to
    /// [`apply_gravity`](crate::physics::apply_gravity).
    ///
    /// `Dragging` is deliberately untouched: the drag controller owns both
    /// its entry and its exit, so an active drag never races the table.
    pub fn transition(&mut self, agent: &mut AgentState, config: &SimConfig) {
        use BehaviorState::*;

        let before = agent.behavior;
        match agent.behavior {
            Fall if agent.grounded => {
                agent.behavior = match self.rng.gen_range(0..3) {
                    0 => DangleLegs,
                    1 => LieDownSwingLegs,
                    _ => Walk,
                };
            }
            Walk if agent.grounded => {
                agent.x += config.walk_speed * agent.facing.sign();
                if agent.x <= config.walk_min_x() || agent.x >= config.walk_max_x() {
                    if self.rng.gen_bool(config.edge_climb_chance) {
                        agent.behavior = ClimbWall;
                    } else {
                        agent.facing = agent.facing.flip();
                    }
                }
            }
            ClimbWall => {
                agent.y -= config.climb_speed;
                if agent.y <= -config.ceiling_overhang {
                    agent.facing = agent.facing.flip();
                    agent.behavior = if self.rng.gen_bool(config.ceiling_from_wall_chance) {
                        ClimbCeiling
                    } else {
                        Fall
                    };
                }
            }
            ClimbCeiling => {
                agent.x += config.walk_speed * agent.facing.sign();
                if self.rng.gen_bool(config.ceiling_drop_chance) {
                    agent.behavior = Fall;
                }
            }
            Sit | SitUp | DangleLegs | LayDown | LieDownSwingLegs => {
                if self.rng.gen_bool(config.idle_wake_chance) {
                    agent.behavior = Walk;
                }
            }
            Dragging => {}
            // Safety net: a state with no applicable rule must not hang
            // mid-air.
            _ if !agent.grounded => agent.behavior = Fall,
            _ => {}
        }

        if agent.behavior != before {
            debug!(from = %before, to = %agent.behavior, "behavior transition");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
