//! Pointer-drag override.
//!
//! While the pointer is held, the drag controller owns the agent: position
//! follows the pointer delta exactly, facing follows the pointer's
//! horizontal velocity sign, and both the physics step and the behavior
//! table stand aside (the `Dragging` state suspends physics, and the table
//! never touches `Dragging`). Release hands the agent back to the normal
//! pipeline as a fresh fall.

use crate::agent::{AgentState, Facing};
use crate::behavior::BehaviorState;
use crate::geom::Point;

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// State captured at pointer-down, alive until release.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Pointer position at the moment of pickup.
    origin_pointer: Point,
    /// Agent position at the moment of pickup.
    origin_agent: Point,
    /// Last observed pointer x, for facing inference.
    last_pointer_x: f64,
}

// ---------------------------------------------------------------------------
// DragController
// ---------------------------------------------------------------------------

/// Routes pointer events into direct agent mutation.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer pressed: capture the session and take the agent over.
    pub fn begin(&mut self, pointer: Point, agent: &mut AgentState) {
        self.session = Some(DragSession {
            origin_pointer: pointer,
            origin_agent: Point::new(agent.x, agent.y),
            last_pointer_x: pointer.x,
        });
        agent.behavior = BehaviorState::Dragging;
    }

    /// Pointer moved while held: reposition the agent by the pointer delta
    /// and infer facing from the move direction. A zero horizontal delta
    /// never flips the facing. No-op without an active session.
    pub fn update(&mut self, pointer: Point, agent: &mut AgentState) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        agent.behavior = BehaviorState::Dragging;
        agent.x = session.origin_agent.x + (pointer.x - session.origin_pointer.x);
        agent.y = session.origin_agent.y + (pointer.y - session.origin_pointer.y);
        if let Some(facing) = Facing::from_delta(pointer.x - session.last_pointer_x) {
            agent.facing = facing;
        }
        session.last_pointer_x = pointer.x;
    }

    /// Pointer released: drop the session and let the agent fall from
    /// wherever it was carried to. No-op without an active session.
    pub fn release(&mut self, agent: &mut AgentState) {
        if self.session.take().is_some() {
            agent.behavior = BehaviorState::Fall;
            agent.grounded = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> AgentState {
        AgentState::new(400.0, 500.0, 100.0)
    }

    #[test]
    fn begin_enters_dragging_and_captures_origin() {
        let mut drag = DragController::new();
        let mut agent = agent();
        drag.begin(Point::new(450.0, 520.0), &mut agent);
        assert!(drag.is_dragging());
        assert_eq!(agent.behavior, BehaviorState::Dragging);
        // Position untouched until the first move.
        assert_eq!((agent.x, agent.y), (400.0, 500.0));
    }

    #[test]
    fn position_tracks_pointer_delta_exactly() {
        let mut drag = DragController::new();
        let mut agent = agent();
        drag.begin(Point::new(450.0, 520.0), &mut agent);
        drag.update(Point::new(480.0, 490.0), &mut agent);
        assert_eq!((agent.x, agent.y), (430.0, 470.0));
        drag.update(Point::new(450.0, 520.0), &mut agent);
        assert_eq!((agent.x, agent.y), (400.0, 500.0));
    }

    #[test]
    fn facing_follows_pointer_velocity_sign() {
        let mut drag = DragController::new();
        let mut agent = agent();
        drag.begin(Point::new(100.0, 100.0), &mut agent);

        for x in [110.0, 125.0, 160.0] {
            drag.update(Point::new(x, 100.0), &mut agent);
            assert_eq!(agent.facing, Facing::Right);
        }
        for x in [150.0, 130.0, 90.0] {
            drag.update(Point::new(x, 100.0), &mut agent);
            assert_eq!(agent.facing, Facing::Left);
        }
    }

    #[test]
    fn zero_delta_never_flips_facing() {
        let mut drag = DragController::new();
        let mut agent = agent();
        drag.begin(Point::new(100.0, 100.0), &mut agent);
        drag.update(Point::new(90.0, 100.0), &mut agent);
        assert_eq!(agent.facing, Facing::Left);
        // Pure vertical move: x delta is zero.
        drag.update(Point::new(90.0, 180.0), &mut agent);
        assert_eq!(agent.facing, Facing::Left);
    }

    #[test]
    fn release_drops_into_fall() {
        let mut drag = DragController::new();
        let mut agent = agent();
        agent.grounded = true;
        drag.begin(Point::new(100.0, 100.0), &mut agent);
        drag.update(Point::new(300.0, 50.0), &mut agent);
        drag.release(&mut agent);
        assert!(!drag.is_dragging());
        assert_eq!(agent.behavior, BehaviorState::Fall);
        assert!(!agent.grounded);
    }

    #[test]
    fn update_and_release_without_session_are_noops() {
        let mut drag = DragController::new();
        let mut agent = agent();
        drag.update(Point::new(900.0, 900.0), &mut agent);
        assert_eq!((agent.x, agent.y), (400.0, 500.0));
        drag.release(&mut agent);
        assert_eq!(agent.behavior, BehaviorState::Fall); // initial state, untouched
        assert!(!agent.grounded);
    }
}
