//! Per-frame update
//!
//! Order within a frame: sample the clock, place the paddle, bounce off
//! walls and paddle, advance the ball, resolve brick contacts, then advance
//! and compact the particle pool.

use glam::Vec2;

use super::effects;
use super::resolve::resolve_bricks;
use super::state::{GameEvent, SimState};
use crate::{consts, polar_to_cartesian, reflect, vec_angle};

/// External inputs for a single frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Absolute paddle position (left edge) for this frame, clamped to the
    /// field. `None` leaves the paddle where it is.
    pub paddle_x: Option<f32>,
    /// Emit the ball exhaust trail this frame.
    pub emit_trail: bool,
}

/// Advance the simulation to the given wall-clock timestamp (milliseconds).
pub fn tick(state: &mut SimState, input: &TickInput, now_ms: f64) {
    let frame = state.clock.sample(now_ms);

    let prev_paddle = state.paddle_x;
    if let Some(x) = input.paddle_x {
        state.paddle_x = x.clamp(0.0, state.config.field_width - state.config.paddle_width);
    }
    let paddle_drift = state.paddle_x - prev_paddle;

    step_ball(state, frame.dt, paddle_drift);

    if state.ball_in_play {
        resolve_bricks(state);
    }

    // Debris from this frame's contacts ages with the pool; the exhaust
    // trail is emitted afterwards and starts aging next frame.
    state.pool.step(frame.delta_ms);

    if input.emit_trail && state.ball_in_play {
        let heat = state.speed_heat();
        effects::ball_trail(
            &mut state.pool,
            &mut state.rng,
            state.ball.pos,
            state.ball.vel,
            state.ball.radius,
            heat,
        );
    }
}

/// Wall bounces, paddle bounce, loss detection and position integration.
///
/// Bounces test the predicted position (`pos + dt * vel`) so a fast ball
/// cannot step through a boundary in one frame.
fn step_ball(state: &mut SimState, dt: f32, paddle_drift: f32) {
    let r = state.ball.radius;
    let w = state.config.field_width;
    let h = state.config.field_height;
    let pw = state.config.paddle_width;
    let ph = state.config.paddle_height;

    let next = state.ball.pos + state.ball.vel * dt;

    if next.x > w - r || next.x < r {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if next.y <= r {
        state.ball.vel.y = -state.ball.vel.y;
    } else if next.y > h - r {
        if state.ball_in_play {
            // Out the bottom: retire the ball but keep integrating so the
            // debris and the ball drift on while the outer layer decides
            // what happens next.
            state.ball_in_play = false;
            state.events.push(GameEvent::BallLost);
            let paddle = state.paddle_rect();
            effects::paddle_burst(&mut state.pool, &mut state.rng, &paddle, paddle_drift);
            log::debug!("ball lost at x={:.1}", state.ball.pos.x);
        }
    } else if state.ball_in_play
        && next.y > h - r - ph
        && state.ball.pos.x >= state.paddle_x
        && state.ball.pos.x <= state.paddle_x + pw
    {
        bounce_off_paddle(state);
        state.events.push(GameEvent::PaddleBounce);
    }

    state.ball.pos += state.ball.vel * dt;
}

/// Reflect off the paddle with a normal tilted by where the ball struck,
/// then force a minimum upward speed so the ball cannot graze sideways
/// along the paddle forever.
fn bounce_off_paddle(state: &mut SimState) {
    let hit = (state.ball.pos.x - state.paddle_x) / state.config.paddle_width - 0.5;
    let normal_angle = -std::f32::consts::FRAC_PI_2 + hit;
    let normal = Vec2::new(normal_angle.cos(), normal_angle.sin());
    state.ball.vel = reflect(state.ball.vel, normal);

    if state.ball.vel.y > -consts::PADDLE_MIN_RISE {
        state.ball.vel.y = -consts::PADDLE_MIN_RISE;
        let angle = vec_angle(state.ball.vel);
        state.ball.vel = polar_to_cartesian(state.ball_speed, angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimConfig;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Brick, BrickState};

    /// Milliseconds per frame at the baseline rate.
    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn test_state() -> SimState {
        let mut config = SimConfig::default();
        config.pool_capacity = 256;
        let mut state = SimState::new(config, 11);
        state.start_speed = 5.0;
        state.end_speed = 5.0;
        state.ball_speed = 5.0;
        state
    }

    fn run_frames(state: &mut SimState, input: &TickInput, frames: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for i in 0..=frames {
            tick(state, input, i as f64 * FRAME_MS);
            events.extend(state.take_events());
        }
        events
    }

    #[test]
    fn test_first_frame_does_not_move() {
        let mut state = test_state();
        let start = state.ball.pos;
        tick(&mut state, &TickInput::default(), 5000.0);
        assert_eq!(state.ball.pos, start);
    }

    #[test]
    fn test_brick_destroyed_once_per_overlap() {
        let mut state = test_state();
        state.ball.pos = Vec2::new(320.0, 200.0);
        state.ball.vel = Vec2::new(0.0, -5.0);
        state.bricks = vec![Brick {
            rect: Rect::new(300.0, 150.0, 40.0, 15.0),
            state: BrickState::Live,
            color: [80.0, 160.0, 40.0],
        }];

        let events = run_frames(&mut state, &TickInput::default(), 10);

        let destroyed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .collect();
        assert_eq!(destroyed.len(), 1);
        assert_eq!(state.bricks[0].state, BrickState::Destroyed);
        // Downward after the flip.
        assert!(state.ball.vel.y > 0.0);
        // 40x15 brick: 8x1 debris grid, still well within its 800 ms life.
        assert_eq!(state.pool.alive(), 8);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = test_state();
        state.ball.pos = Vec2::new(12.0, 180.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        run_frames(&mut state, &TickInput::default(), 2);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = test_state();
        state.ball.pos = Vec2::new(320.0, 12.0);
        state.ball.vel = Vec2::new(0.0, -5.0);
        run_frames(&mut state, &TickInput::default(), 2);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_paddle_bounce_center() {
        let mut state = test_state();
        let paddle_center = state.paddle_x + state.config.paddle_width / 2.0;
        state.ball.pos = Vec2::new(paddle_center, 330.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        let events = run_frames(&mut state, &TickInput::default(), 3);

        assert!(events.contains(&GameEvent::PaddleBounce));
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball_in_play);
    }

    #[test]
    fn test_shallow_paddle_bounce_clamps_rise() {
        let mut state = test_state();
        // Strike far off-center, moving with the tilt: the reflected
        // velocity would point down without the clamp.
        state.ball.pos = Vec2::new(state.paddle_x + 73.0, 334.8);
        state.ball.vel = Vec2::new(5.0, 0.5);
        state.ball_speed = 5.0;

        run_frames(&mut state, &TickInput::default(), 2);

        assert!(state.ball.vel.y <= -consts::PADDLE_MIN_RISE + 1e-4);
        assert!((state.ball.vel.length() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_ball_lost_fires_once() {
        let mut state = test_state();
        // Outside the paddle's span so nothing saves it.
        state.ball.pos = Vec2::new(50.0, 340.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        let events = run_frames(&mut state, &TickInput::default(), 8);

        let lost = events.iter().filter(|e| **e == GameEvent::BallLost).count();
        assert_eq!(lost, 1);
        assert!(!state.ball_in_play);
        // Paddle shatter: 15x2 debris squares.
        assert_eq!(state.pool.alive(), 30);
    }

    #[test]
    fn test_retired_ball_ignores_bricks() {
        let mut state = test_state();
        state.ball.pos = Vec2::new(50.0, 340.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        state.bricks = vec![Brick {
            rect: Rect::new(30.0, 100.0, 40.0, 16.0),
            state: BrickState::Live,
            color: [255.0; 3],
        }];

        // Lose the ball, then keep integrating well past the loss.
        run_frames(&mut state, &TickInput::default(), 120);

        assert_eq!(state.bricks[0].state, BrickState::Live);
    }

    #[test]
    fn test_paddle_input_clamped() {
        let mut state = test_state();
        let input = TickInput {
            paddle_x: Some(10_000.0),
            emit_trail: false,
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(
            state.paddle_x,
            state.config.field_width - state.config.paddle_width
        );

        let input = TickInput {
            paddle_x: Some(-50.0),
            emit_trail: false,
        };
        tick(&mut state, &input, FRAME_MS);
        assert_eq!(state.paddle_x, 0.0);
    }

    #[test]
    fn test_trail_emission() {
        let mut state = test_state();
        state.ball.pos = Vec2::new(320.0, 180.0);
        state.ball.vel = Vec2::new(3.0, -4.0);
        let input = TickInput {
            paddle_x: None,
            emit_trail: true,
        };
        run_frames(&mut state, &input, 4);
        // Two exhaust particles per frame, none old enough to die yet.
        assert_eq!(state.pool.alive(), 5 * effects::TRAIL_EMITS_PER_FRAME);
    }
}
