//! The agent aggregate.
//!
//! All mutable companion state lives in one [`AgentState`] value owned by
//! the driver and passed by reference into each pipeline stage -- there are
//! no ambient globals. Only the physics step, the behavior machine, and the
//! drag controller mutate it.

use serde::{Deserialize, Serialize};

use crate::behavior::BehaviorState;

// ---------------------------------------------------------------------------
// Facing
// ---------------------------------------------------------------------------

/// Which way the agent faces and drifts.
///
/// `Right` selects the mirrored sprite variant at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    /// Facing left; the sprite's original orientation.
    Left,
    /// Facing right; the mirrored sprite variant.
    Right,
}

impl Facing {
    /// Signed unit for movement math: -1.0 for left, +1.0 for right.
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// The opposite direction.
    pub fn flip(self) -> Facing {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Infer a facing from a horizontal delta. A zero delta carries no
    /// direction information and yields `None` -- callers must not flip on
    /// it.
    pub fn from_delta(dx: f64) -> Option<Facing> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    /// Whether the mirrored sprite variant should be shown.
    pub fn mirrored(self) -> bool {
        matches!(self, Facing::Right)
    }
}

// ---------------------------------------------------------------------------
// AgentState
// ---------------------------------------------------------------------------

/// The single companion agent.
///
/// Created once at startup and alive for the process lifetime.
///
/// Invariant: `grounded == true` implies `velocity_y == 0.0`. The collision
/// resolver zeroes the velocity on every grounding, and nothing else sets
/// `grounded`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Horizontal position, top-left anchored. Always finite.
    pub x: f64,
    /// Vertical position, top-left anchored. Always finite.
    pub y: f64,
    /// Vertical speed in px/tick; positive is downward.
    pub velocity_y: f64,
    /// Current facing / drift direction.
    pub facing: Facing,
    /// Current behavior state.
    pub behavior: BehaviorState,
    /// Fractional cursor into the active state's frame sequence.
    pub frame_cursor: f64,
    /// Whether a supporting surface was found this tick.
    pub grounded: bool,
    /// Pixel height of the reference sprite frame; fixed for the agent's
    /// lifetime.
    pub height: f64,
}

impl AgentState {
    /// Create the agent at a start position. It begins falling, facing
    /// left, with nothing underneath it.
    pub fn new(x: f64, y: f64, height: f64) -> Self {
        Self {
            x,
            y,
            velocity_y: 0.0,
            facing: Facing::Left,
            behavior: BehaviorState::Fall,
            frame_cursor: 0.0,
            grounded: false,
            height,
        }
    }

    /// The agent's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The agent's horizontal span as a square bounding-box approximation:
    /// `height` wide, matching the reference frame.
    pub fn span(&self) -> (f64, f64) {
        (self.x, self.x + self.height)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
