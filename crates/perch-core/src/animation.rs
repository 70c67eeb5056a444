//! The animation table and per-tick frame selection.
//!
//! Every behavior state maps to an ordered, non-empty sequence of sprite
//! frame identifiers. The selector advances a fractional cursor each tick
//! and picks `floor(cursor) mod len`, so at the default step of 0.5 each
//! logical frame is held for two ticks. The mirrored sprite variant is
//! selected whenever the agent faces right.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::agent::AgentState;
use crate::behavior::BehaviorState;
use crate::config::SimConfig;

/// Identifier of a single sprite frame, as the asset source numbers them.
pub type FrameId = u32;

// ---------------------------------------------------------------------------
// AnimationError
// ---------------------------------------------------------------------------

/// Validation failure for an [`AnimationTable`].
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    /// A behavior state has no sequence at all.
    #[error("behavior state '{state}' has no animation sequence")]
    MissingSequence {
        /// The uncovered state.
        state: BehaviorState,
    },

    /// A behavior state maps to an empty sequence.
    #[error("behavior state '{state}' has an empty animation sequence")]
    EmptySequence {
        /// The state with the empty sequence.
        state: BehaviorState,
    },
}

// ---------------------------------------------------------------------------
// AnimationTable
// ---------------------------------------------------------------------------

/// Static mapping from behavior state to its frame sequence.
///
/// [`Default`] carries the stock companion sprite numbering. Hosts with
/// their own sprite sets can build a table with [`insert`](Self::insert)
/// and must pass [`validate`](Self::validate) before driving the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationTable {
    sequences: HashMap<BehaviorState, Vec<FrameId>>,
}

impl Default for AnimationTable {
    fn default() -> Self {
        let mut table = Self {
            sequences: HashMap::new(),
        };
        table.insert(BehaviorState::Walk, vec![1, 1, 2, 2, 1, 1, 3, 2]);
        table.insert(BehaviorState::Fall, vec![4]);
        table.insert(BehaviorState::Sit, vec![11]);
        table.insert(BehaviorState::SitUp, vec![26]);
        table.insert(
            BehaviorState::DangleLegs,
            vec![31, 31, 32, 32, 31, 31, 33, 33],
        );
        table.insert(BehaviorState::LayDown, vec![21]);
        table.insert(BehaviorState::LieDownSwingLegs, vec![20, 20, 21, 21]);
        table.insert(BehaviorState::GrabCeiling, vec![32]);
        table.insert(
            BehaviorState::ClimbCeiling,
            vec![25, 25, 23, 23, 23, 23, 23, 25],
        );
        table.insert(BehaviorState::GrabWall, vec![13]);
        table.insert(
            BehaviorState::ClimbWall,
            vec![14, 14, 12, 13, 13, 13, 12, 14],
        );
        table.insert(BehaviorState::Dragging, vec![4]);
        table
    }
}

impl AnimationTable {
    /// Set the frame sequence for a state, replacing any previous one.
    pub fn insert(&mut self, state: BehaviorState, frames: Vec<FrameId>) {
        self.sequences.insert(state, frames);
    }

    /// The sequence for `state`, if one exists.
    pub fn sequence(&self, state: BehaviorState) -> Option<&[FrameId]> {
        self.sequences.get(&state).map(Vec::as_slice)
    }

    /// The sequence for `state`.
    ///
    /// # Panics
    ///
    /// Panics if the table has no sequence for `state`. Run
    /// [`validate`](Self::validate) at startup so this cannot happen at
    /// tick time.
    pub fn frames_for(&self, state: BehaviorState) -> &[FrameId] {
        self.sequence(state)
            .unwrap_or_else(|| panic!("animation table has no sequence for '{state}'"))
    }

    /// Check that every behavior state has a non-empty sequence.
    pub fn validate(&self) -> Result<(), AnimationError> {
        for state in BehaviorState::ALL {
            match self.sequence(state) {
                None => return Err(AnimationError::MissingSequence { state }),
                Some([]) => return Err(AnimationError::EmptySequence { state }),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Every frame identifier the table references, deduplicated and
    /// ordered. Asset validation walks this set at startup.
    pub fn referenced_frames(&self) -> BTreeSet<FrameId> {
        self.sequences.values().flatten().copied().collect()
    }
}

// ---------------------------------------------------------------------------
// Frame selection
// ---------------------------------------------------------------------------

/// The selector's per-tick output, handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePick {
    /// Sprite frame to show.
    pub frame: FrameId,
    /// Whether to show the mirrored variant.
    pub mirrored: bool,
    /// Cosmetic vertical offset to add at render time. The authoritative
    /// `y` is untouched.
    pub render_offset_y: f64,
}

/// Advance the frame cursor and pick this tick's frame.
///
/// The cursor wraps modulo the *current* state's sequence length, so a
/// state switch re-enters the shorter or longer sequence without ever
/// indexing out of bounds.
///
/// # Panics
///
/// Panics if the table has no sequence for the agent's current state; see
/// [`AnimationTable::frames_for`].
pub fn select_frame(agent: &mut AgentState, table: &AnimationTable, config: &SimConfig) -> FramePick {
    let sequence = table.frames_for(agent.behavior);
    let len = sequence.len() as f64;
    agent.frame_cursor = (agent.frame_cursor + config.frame_step) % len;
    let index = agent.frame_cursor.floor() as usize;

    let render_offset_y = if agent.behavior == BehaviorState::DangleLegs {
        config.dangle_render_offset
    } else {
        0.0
    };

    FramePick {
        frame: sequence[index],
        mirrored: agent.facing.mirrored(),
        render_offset_y,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
