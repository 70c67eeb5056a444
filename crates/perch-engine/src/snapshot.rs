//! Serializable engine state for determinism testing.
//!
//! An [`EngineSnapshot`] captures everything that evolves tick to tick:
//! the agent aggregate and the tick counter. Two identically seeded runs
//! over the same terrain must produce byte-identical snapshot JSON -- the
//! determinism tests lean on that.
//!
//! Systems (the behavior machine's RNG stream position) are not captured;
//! snapshots are a comparison artifact, not a resume point.

use serde::{Deserialize, Serialize};

use perch_core::agent::AgentState;

use crate::tick::TickLoop;

// ---------------------------------------------------------------------------
// EngineSnapshot
// ---------------------------------------------------------------------------

/// A point-in-time capture of the simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// The full agent aggregate.
    pub agent: AgentState,
    /// Number of ticks executed at capture time.
    pub tick_counter: u64,
}

impl EngineSnapshot {
    /// Serialize to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl TickLoop {
    /// Capture the current simulation state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            agent: self.agent().clone(),
            tick_counter: self.tick_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
