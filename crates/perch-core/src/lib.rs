//! Perch Core -- deterministic simulation for a desktop companion sprite.
//!
//! This crate holds the per-tick decision engine: gravity integration, the
//! ledge-collision test against transient window rectangles, the behavior
//! state machine, animation frame selection, and the pointer-drag override.
//! It performs no I/O and reads no clocks; given a seed and a sequence of
//! terrain/pointer inputs, a run is fully reproducible.
//!
//! The driver crate (`perch-engine`) owns the tick loop and the seams to
//! the host platform (terrain queries, rendering, assets, pointer events).
//!
//! # Quick Start
//!
//! ```
//! use perch_core::prelude::*;
//!
//! let config = SimConfig::default();
//! let table = AnimationTable::default();
//! table.validate().unwrap();
//!
//! let mut agent = AgentState::new(config.start_x, config.start_y, 128.0);
//! let mut machine = BehaviorMachine::with_seed(7);
//!
//! // One decision-engine tick over an empty desktop.
//! apply_gravity(&mut agent, &config);
//! resolve_collision(&mut agent, &[], &config);
//! machine.transition(&mut agent, &config);
//! let pick = select_frame(&mut agent, &table, &config);
//!
//! assert_eq!(pick.frame, 4); // still falling
//! assert!(!pick.mirrored); // facing left
//! ```

#![deny(unsafe_code)]

pub mod agent;
pub mod animation;
pub mod behavior;
pub mod config;
pub mod drag;
pub mod geom;
pub mod physics;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::agent::{AgentState, Facing};
    pub use crate::animation::{
        select_frame, AnimationError, AnimationTable, FrameId, FramePick,
    };
    pub use crate::behavior::{BehaviorMachine, BehaviorState};
    pub use crate::config::SimConfig;
    pub use crate::drag::DragController;
    pub use crate::geom::{Point, Rect};
    pub use crate::physics::{apply_gravity, landing_platform, resolve_collision};
}
