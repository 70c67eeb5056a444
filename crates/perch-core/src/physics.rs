//! Gravity integration and terrain collision.
//!
//! The physics step and the collision resolver run back-to-back at the top
//! of every tick. Both are pure arithmetic over [`AgentState`] and the
//! tick's transient terrain rectangles -- no side effects, no failure
//! modes. Same inputs, same outputs.

use crate::agent::AgentState;
use crate::config::SimConfig;
use crate::geom::Rect;

// ---------------------------------------------------------------------------
// Physics step
// ---------------------------------------------------------------------------

/// Integrate one tick of airborne motion.
///
/// While the agent is airborne and its state does not suspend physics
/// (climbing states and dragging move by their own rules), vertical
/// velocity accumulates gravity, the position integrates the velocity, and
/// the agent drifts horizontally along its facing.
pub fn apply_gravity(agent: &mut AgentState, config: &SimConfig) {
    if agent.grounded || agent.behavior.suspends_physics() {
        return;
    }
    agent.velocity_y += config.gravity;
    agent.y += agent.velocity_y;
    agent.x += config.fall_drift_speed * agent.facing.sign();
}

// ---------------------------------------------------------------------------
// Collision resolver
// ---------------------------------------------------------------------------

/// Find the platform the agent's projected position would land on, if any.
///
/// A rectangle qualifies when its top edge is on-screen (`top > 0`), the
/// agent's bottom edge sits inside the landing band `[top, top +
/// landing_band)` just below that edge, and the horizontal spans overlap.
/// Among qualifying rectangles the highest one (smallest `top`) wins;
/// ties go to the first qualifying rectangle in input order.
pub fn landing_platform<'a>(
    agent: &AgentState,
    terrain: &'a [Rect],
    config: &SimConfig,
) -> Option<&'a Rect> {
    let bottom = agent.bottom();
    let (span_lo, span_hi) = agent.span();

    let mut platform: Option<&Rect> = None;
    for rect in terrain {
        let in_band = bottom >= rect.top && bottom < rect.top + config.landing_band;
        if rect.top > 0.0 && in_band && rect.overlaps_span(span_lo, span_hi) {
            if platform.map_or(true, |best| rect.top < best.top) {
                platform = Some(rect);
            }
        }
    }
    platform
}

/// Resolve the agent against this tick's terrain, updating `grounded` and
/// `velocity_y`. Returns whether the agent rests on something.
///
/// Landing on a window rectangle does not snap `y` to the platform top --
/// the agent rests where it was projected, a deliberately lenient behavior
/// the landing band makes invisible. The synthetic floor does clamp, so
/// the agent can never sink below the desktop.
pub fn resolve_collision(agent: &mut AgentState, terrain: &[Rect], config: &SimConfig) -> bool {
    if landing_platform(agent, terrain, config).is_some() {
        agent.velocity_y = 0.0;
        agent.grounded = true;
        return true;
    }

    if agent.bottom() >= config.screen_height - config.floor_margin {
        agent.y = config.floor_y(agent.height);
        agent.velocity_y = 0.0;
        agent.grounded = true;
        return true;
    }

    agent.grounded = false;
    false
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Facing;
    use crate::behavior::BehaviorState;

    fn airborne_agent() -> AgentState {
        AgentState::new(400.0, 300.0, 100.0)
    }

    // -- 1. Gravity integration ----------------------------------------------

    #[test]
    fn gravity_accumulates_and_drifts() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.facing = Facing::Left;

        apply_gravity(&mut agent, &config);
        assert_eq!(agent.velocity_y, config.gravity);
        assert_eq!(agent.y, 300.0 + config.gravity);
        assert_eq!(agent.x, 400.0 - config.fall_drift_speed);

        apply_gravity(&mut agent, &config);
        assert_eq!(agent.velocity_y, 2.0 * config.gravity);
    }

    #[test]
    fn gravity_skipped_while_grounded() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.grounded = true;
        apply_gravity(&mut agent, &config);
        assert_eq!(agent.velocity_y, 0.0);
        assert_eq!((agent.x, agent.y), (400.0, 300.0));
    }

    #[test]
    fn gravity_skipped_in_suspended_states() {
        let config = SimConfig::default();
        for state in [
            BehaviorState::ClimbWall,
            BehaviorState::ClimbCeiling,
            BehaviorState::Dragging,
        ] {
            let mut agent = airborne_agent();
            agent.behavior = state;
            apply_gravity(&mut agent, &config);
            assert_eq!(agent.velocity_y, 0.0, "{state} suspends physics");
            assert_eq!((agent.x, agent.y), (400.0, 300.0));
        }
    }

    // -- 2. Platform qualification -------------------------------------------

    #[test]
    fn lands_inside_the_band() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.y = 410.0; // bottom edge 510, inside [500, 550)
        let terrain = [Rect::new(300.0, 500.0, 900.0, 800.0)];
        assert!(resolve_collision(&mut agent, &terrain, &config));
        assert!(agent.grounded);
        assert_eq!(agent.velocity_y, 0.0);
        assert_eq!(agent.y, 410.0, "window landings do not snap y");
    }

    #[test]
    fn band_is_half_open() {
        let config = SimConfig::default();
        let terrain = [Rect::new(300.0, 500.0, 900.0, 800.0)];

        let mut at_top = airborne_agent();
        at_top.y = 400.0; // bottom exactly 500
        assert!(resolve_collision(&mut at_top, &terrain, &config));

        let mut at_band_end = airborne_agent();
        at_band_end.y = 450.0; // bottom exactly 550 -- just past the band
        assert!(!resolve_collision(&mut at_band_end, &terrain, &config));
    }

    #[test]
    fn offscreen_top_never_qualifies() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.y = -80.0; // bottom edge 20, inside the band of a top<=0 rect
        let terrain = [Rect::new(0.0, 0.0, 1920.0, 1080.0)];
        assert!(!resolve_collision(&mut agent, &terrain, &config));
        assert!(!agent.grounded);
    }

    #[test]
    fn horizontal_miss_never_qualifies() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.x = 1000.0;
        agent.y = 410.0;
        let terrain = [Rect::new(300.0, 500.0, 900.0, 800.0)];
        assert!(!resolve_collision(&mut agent, &terrain, &config));
    }

    // -- 3. Closest-platform selection ---------------------------------------

    #[test]
    fn highest_qualifying_platform_wins() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.height = 200.0;
        agent.y = 410.0; // bottom edge 610: inside both [600,650) and [590,640)
        let far = Rect::new(300.0, 600.0, 900.0, 800.0);
        let near = Rect::new(300.0, 590.0, 900.0, 700.0);
        let platforms = [far, near];
        let chosen = landing_platform(&agent, &platforms, &config).unwrap();
        assert_eq!(chosen.top, 590.0);
    }

    #[test]
    fn tie_break_is_first_in_input_order() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.y = 410.0;
        let a = Rect::new(300.0, 500.0, 600.0, 800.0);
        let b = Rect::new(350.0, 500.0, 700.0, 800.0);
        let platforms = [a, b];
        let chosen = landing_platform(&agent, &platforms, &config).unwrap();
        assert_eq!(chosen.right, 600.0, "first qualifying rect wins ties");
    }

    #[test]
    fn resolver_is_deterministic() {
        let config = SimConfig::default();
        let terrain = [
            Rect::new(300.0, 500.0, 900.0, 800.0),
            Rect::new(100.0, 450.0, 500.0, 700.0),
        ];
        let mut agent = airborne_agent();
        agent.y = 410.0;
        let first = landing_platform(&agent, &terrain, &config).copied();
        for _ in 0..10 {
            assert_eq!(landing_platform(&agent, &terrain, &config).copied(), first);
        }
    }

    // -- 4. Synthetic floor --------------------------------------------------

    #[test]
    fn floor_clamps_and_grounds() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        agent.velocity_y = 12.0;
        agent.y = config.screen_height; // far below the floor line
        assert!(resolve_collision(&mut agent, &[], &config));
        assert!(agent.grounded);
        assert_eq!(agent.velocity_y, 0.0);
        assert_eq!(agent.y, config.floor_y(agent.height));
    }

    #[test]
    fn empty_terrain_above_floor_stays_airborne() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        assert!(!resolve_collision(&mut agent, &[], &config));
        assert!(!agent.grounded);
    }

    // -- 5. Physics invariant ------------------------------------------------

    #[test]
    fn grounded_implies_zero_velocity() {
        let config = SimConfig::default();
        let mut agent = airborne_agent();
        for _ in 0..2_000 {
            apply_gravity(&mut agent, &config);
            resolve_collision(&mut agent, &[], &config);
            if agent.grounded {
                assert_eq!(agent.velocity_y, 0.0);
            }
        }
        assert!(agent.grounded, "agent must reach the floor eventually");
    }
}
