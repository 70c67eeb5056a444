//! Sprite asset seam and startup validation.
//!
//! Actual image decoding and alpha compositing belong to the host; the
//! engine only needs to know, at startup, that every frame the animation
//! table references exists, and how tall the reference frame is (the
//! agent's collision box is derived from it). A frame that fails to
//! resolve is a fatal startup error -- the tick loop must never start with
//! a partially loadable sprite set.

use perch_core::animation::{AnimationTable, FrameId};
use perch_core::behavior::BehaviorState;

use crate::EngineError;

// ---------------------------------------------------------------------------
// AssetError
// ---------------------------------------------------------------------------

/// A frame that could not be resolved to image data.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// No asset exists for the frame identifier.
    #[error("sprite frame {frame} not found")]
    MissingFrame {
        /// The unresolvable frame.
        frame: FrameId,
    },

    /// The asset exists but could not be read or decoded.
    #[error("sprite frame {frame} could not be read: {reason}")]
    Unreadable {
        /// The offending frame.
        frame: FrameId,
        /// Host-provided detail.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// AssetSource
// ---------------------------------------------------------------------------

/// Pixel dimensions of a resolved sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameMeta {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Resolves frame identifiers to image metadata at startup.
pub trait AssetSource {
    /// Resolve one frame.
    fn frame_meta(&self, frame: FrameId) -> Result<FrameMeta, AssetError>;
}

/// Uniform-size assets for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedSizeAssets {
    meta: FrameMeta,
}

impl FixedSizeAssets {
    /// Every frame resolves to `width` x `height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            meta: FrameMeta { width, height },
        }
    }
}

impl AssetSource for FixedSizeAssets {
    fn frame_meta(&self, _frame: FrameId) -> Result<FrameMeta, AssetError> {
        Ok(self.meta)
    }
}

// ---------------------------------------------------------------------------
// Startup validation
// ---------------------------------------------------------------------------

/// Validate the table and resolve every frame it references, returning the
/// agent's reference height in pixels.
///
/// The reference frame is the first frame of the fall sequence -- the
/// sprite the agent spends its first ticks showing. Any missing or
/// unreadable frame aborts startup.
pub fn validate_assets(
    assets: &dyn AssetSource,
    table: &AnimationTable,
) -> Result<f64, EngineError> {
    table.validate()?;

    for frame in table.referenced_frames() {
        assets.frame_meta(frame)?;
    }

    let reference = table.frames_for(BehaviorState::Fall)[0];
    let meta = assets.frame_meta(reference)?;
    Ok(f64::from(meta.height))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
