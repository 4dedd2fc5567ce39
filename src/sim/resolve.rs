//! Brick collision resolution
//!
//! One pass per frame: sweep the ball against every collidable brick, pick
//! the most urgent contact, then respond - destruction, debris, an axis flip
//! and the level's speed schedule.

use glam::Vec2;

use super::state::{BrickState, GameEvent, SimState};
use super::sweep::{SweepResult, sweep_aabb};
use crate::{polar_to_cartesian, vec_angle};

/// Winning contact of a resolver pass.
#[derive(Debug, Clone, Copy)]
struct Contact {
    index: usize,
    normal: Vec2,
}

/// Scan all collidable bricks and resolve the earliest contact, if any.
///
/// A brick the ball already overlaps (negative sweep ratio) overrides any
/// swept candidate; the first such brick in scan order stands. Overlap shows
/// up after a wall reflection moved the ball without a collision pass.
pub fn resolve_bricks(state: &mut SimState) {
    let ball_rect = state.ball.rect();
    let vel = state.ball.vel;

    let mut best_ratio = 1.0_f32;
    let mut contact: Option<Contact> = None;
    let mut overlapping = false;

    for (index, brick) in state.bricks.iter().enumerate() {
        if !brick.is_collidable() {
            continue;
        }
        let SweepResult { ratio, normal } = sweep_aabb(&ball_rect, vel, &brick.rect);
        if ratio < 0.0 {
            if !overlapping {
                overlapping = true;
                best_ratio = 0.0;
                contact = Some(Contact { index, normal });
            }
        } else if ratio < best_ratio {
            best_ratio = ratio;
            contact = Some(Contact { index, normal });
        }
    }

    let Some(Contact { index, normal }) = contact else {
        return;
    };

    if state.bricks[index].state == BrickState::Live {
        // Debris flies out of the struck face: mirror the contact normal.
        state.destroy_brick(index, -normal);
        state.events.push(GameEvent::BrickDestroyed { brick: index });
    }

    // Axis flip only. Bricks are axis-aligned, so a full vector reflection
    // is never needed here; a zero normal (overlap case) flips y.
    if normal.x == 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    } else {
        state.ball.vel.x = -state.ball.vel.x;
    }

    adjust_ball_speed(state);
}

/// Re-derive the ball speed from the level's schedule, preserving the angle
/// of the just-flipped velocity.
///
/// Speed climbs from `start_speed` toward `end_speed` with the fraction of
/// bricks destroyed since the last player reset.
pub fn adjust_ball_speed(state: &mut SimState) {
    let angle = vec_angle(state.ball.vel);
    let destroyed = state
        .destroyed_count()
        .saturating_sub(state.destroyed_at_reset);
    let progress = (destroyed + 1) as f32 / state.bricks.len() as f32;
    state.ball_speed = state.start_speed + (state.end_speed - state.start_speed) * progress;
    state.ball.vel = polar_to_cartesian(state.ball_speed, angle);
}
