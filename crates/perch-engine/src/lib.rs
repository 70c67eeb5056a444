//! Perch Engine -- tick-loop driver and host seams for the companion core.
//!
//! This crate builds on [`perch_core`] to provide the running system: a
//! fixed-period [`TickLoop`](tick::TickLoop) that executes the decision
//! pipeline once per tick, plus the narrow interfaces the host platform
//! plugs into -- terrain queries, rendering, sprite assets, and pointer
//! input.
//!
//! # Quick Start
//!
//! ```
//! use perch_engine::prelude::*;
//!
//! let mut tick_loop = TickLoop::new(
//!     SimConfig::default(),
//!     TickConfig { headless: true, ..Default::default() },
//!     AnimationTable::default(),
//!     BehaviorMachine::with_seed(42),
//!     Box::new(EmptyTerrain),
//!     Box::new(NullRenderer),
//!     &FixedSizeAssets::new(96, 128),
//! )
//! .unwrap();
//!
//! // With nothing to land on, the agent falls to the synthetic floor.
//! tick_loop.run_ticks(200);
//! assert!(tick_loop.agent().grounded);
//! ```

#![deny(unsafe_code)]

pub mod assets;
pub mod input;
pub mod render;
pub mod snapshot;
pub mod terrain;
pub mod tick;

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

/// Fatal startup failures. None of these can occur once the loop runs.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A sprite frame referenced by the animation table failed to resolve.
    #[error("startup asset validation failed: {0}")]
    Asset(#[from] assets::AssetError),

    /// The animation table does not cover every behavior state.
    #[error("animation table invalid: {0}")]
    Animation(#[from] perch_core::animation::AnimationError),
}

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the core crate for convenience.
pub use perch_core;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common engine usage.
pub mod prelude {
    // Everything from the core prelude.
    pub use perch_core::prelude::*;

    // Engine-specific exports.
    pub use crate::assets::{AssetError, AssetSource, FixedSizeAssets, FrameMeta};
    pub use crate::input::PointerEvent;
    pub use crate::render::{
        FramePresentation, NullRenderer, RecordingRenderer, Renderer, SizeHint,
    };
    pub use crate::snapshot::EngineSnapshot;
    pub use crate::terrain::{EmptyTerrain, StaticTerrain, TerrainError, TerrainProvider};
    pub use crate::tick::{TickConfig, TickDiagnostics, TickLoop};
    pub use crate::EngineError;
}
