//! Terrain acquisition seam.
//!
//! The tick loop asks a [`TerrainProvider`] for the current obstacle
//! rectangles -- the bounds of other visible windows -- exactly once per
//! tick. Platform-specific enumeration (Win32, X11, ...) lives entirely
//! behind this trait and is selected at composition time, never by runtime
//! platform checks inside the tick logic.
//!
//! A provider failure is recoverable: the tick loop logs it and proceeds
//! with an empty set, so the agent simply behaves as if alone on a bare
//! desktop and lands on the synthetic floor.

use perch_core::geom::Rect;

// ---------------------------------------------------------------------------
// TerrainError
// ---------------------------------------------------------------------------

/// A failed window-enumeration query.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// The platform query failed outright.
    #[error("platform window query failed: {0}")]
    Platform(String),
}

// ---------------------------------------------------------------------------
// TerrainProvider
// ---------------------------------------------------------------------------

/// Source of the current obstacle rectangle set.
///
/// Called once per tick; results are transient and never cached across
/// ticks. Implementations should exclude the companion's own overlay
/// window and invisible/minimized windows.
pub trait TerrainProvider {
    /// The current obstacle rectangles, in whatever order the platform
    /// reports them. Input order matters only for collision tie-breaks.
    fn obstacles(&mut self) -> Result<Vec<Rect>, TerrainError>;
}

// ---------------------------------------------------------------------------
// Shipped providers
// ---------------------------------------------------------------------------

/// A bare desktop: no windows, only the synthetic floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTerrain;

impl TerrainProvider for EmptyTerrain {
    fn obstacles(&mut self) -> Result<Vec<Rect>, TerrainError> {
        Ok(Vec::new())
    }
}

/// A fixed rectangle set, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticTerrain {
    rects: Vec<Rect>,
}

impl StaticTerrain {
    /// Create a provider that always reports `rects`.
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }
}

impl TerrainProvider for StaticTerrain {
    fn obstacles(&mut self) -> Result<Vec<Rect>, TerrainError> {
        Ok(self.rects.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
