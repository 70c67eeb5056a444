//! Pointer input seam.
//!
//! The host windowing layer delivers raw pointer events asynchronously;
//! the tick loop forwards them synchronously into the drag controller via
//! [`TickLoop::pointer_event`](crate::tick::TickLoop::pointer_event).
//! Because everything runs on one logical thread, no locking is involved:
//! an event is fully applied before the next tick begins.

use perch_core::geom::Point;

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed on the companion.
    Down(Point),
    /// Pointer moved while the button is held.
    Moved(Point),
    /// Primary button released.
    Up(Point),
}
