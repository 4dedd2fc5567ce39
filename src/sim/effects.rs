//! Particle emission recipes
//!
//! Destruction debris, the paddle shatter and the ball exhaust all draw from
//! the shared pool; a recipe only fills in freshly acquired particles.
//! Velocities are in px/ms to match the pool's millisecond integration.

use glam::{Vec2, Vec4};
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::PI;

use super::particles::{ParticlePool, ParticleShape};
use super::rect::Rect;

/// Downward pull applied to debris, px/ms².
const DEBRIS_GRAVITY: f32 = 0.002;

/// Debris lifetime for a destroyed brick, milliseconds.
const BRICK_DEBRIS_LIFE_MS: f32 = 800.0;

/// Debris lifetime for the shattered paddle, milliseconds.
const PADDLE_DEBRIS_LIFE_MS: f32 = 1000.0;

/// Exhaust particles emitted behind the ball each frame.
pub const TRAIL_EMITS_PER_FRAME: usize = 2;

/// Paddle fill color (`#0288D1`), 0-255 channels.
pub const PADDLE_COLOR: [f32; 3] = [2.0, 136.0, 209.0];

/// Ball exhaust ramp: base color (`#fcd737`) toward hot color (`#ff2700`).
pub const TRAIL_COLOR: [f32; 3] = [252.0, 215.0, 55.0];
pub const TRAIL_HOT_COLOR: [f32; 3] = [255.0, 39.0, 0.0];

#[inline]
fn rgba(rgb: [f32; 3], alpha: f32) -> Vec4 {
    Vec4::new(rgb[0], rgb[1], rgb[2], alpha)
}

/// Debris grid dimensions for a rect: one column per 5 px of width, one row
/// per 10 px of height.
pub fn burst_grid(rect: &Rect) -> (usize, usize) {
    ((rect.w / 5.0) as usize, (rect.h / 10.0) as usize)
}

/// Spread angle for debris leaving a face with the given outward normal.
fn burst_angle(rng: &mut Pcg32, normal: Vec2) -> f32 {
    if normal.x == 0.0 {
        if normal.y > 0.0 {
            rng.random_range(0.0..1.0) * PI
        } else {
            rng.random_range(1.0..2.0) * PI
        }
    } else if normal.x > 0.0 {
        rng.random_range(-0.5..0.5) * PI
    } else {
        rng.random_range(0.5..1.5) * PI
    }
}

/// Burst a destroyed brick into a grid of falling squares tinted with the
/// brick's color. `normal` is the outward-facing burst direction. Returns the
/// number of particles emitted.
pub fn brick_burst(
    pool: &mut ParticlePool,
    rng: &mut Pcg32,
    rect: &Rect,
    normal: Vec2,
    color: [f32; 3],
) -> usize {
    // Fractional counts keep the spacing of the truncated grid centered.
    let cols_f = rect.w / 5.0;
    let rows_f = rect.h / 10.0;
    let step_x = rect.w / (cols_f + 1.0);
    let step_y = rect.h / (rows_f + 1.0);
    let (cols, rows) = burst_grid(rect);

    for c in 1..=cols {
        for r in 1..=rows {
            let speed_x = rng.random_range(0.1..0.2);
            let speed_y = rng.random_range(0.5..0.6);
            let angle = burst_angle(rng, normal);
            let size = rng.random_range(2.0 * step_x..4.0 * step_x);

            let p = pool.acquire();
            p.pos = Vec2::new(rect.x + c as f32 * step_x, rect.y + r as f32 * step_y);
            p.vel = Vec2::new(speed_x * angle.cos(), speed_y * angle.sin());
            p.size_from = size;
            p.color_from = rgba(color, 1.0);
            p.color_to = rgba(color, 1.0);
            p.life = BRICK_DEBRIS_LIFE_MS;
            p.shape = ParticleShape::Square;
            p.accel.y = DEBRIS_GRAVITY;
        }
    }

    cols * rows
}

/// Shatter the paddle when the ball is lost. `drift` is the paddle's recent
/// horizontal motion; debris leans away from the direction of travel and
/// flies faster sideways while moving. Returns the number emitted.
pub fn paddle_burst(pool: &mut ParticlePool, rng: &mut Pcg32, paddle: &Rect, drift: f32) -> usize {
    const COLS: usize = 15;
    const ROWS: usize = 2;
    let step_x = paddle.w / (COLS as f32 + 1.0);
    let step_y = paddle.h / (ROWS as f32 + 1.0);

    for c in 1..=COLS {
        for r in 1..=ROWS {
            let mut speed_x = rng.random_range(0.1..0.2);
            let speed_y = rng.random_range(0.8..1.0);
            let angle = if drift < 0.0 {
                speed_x *= 2.0;
                rng.random_range(1.2..1.6) * PI
            } else if drift > 0.0 {
                speed_x *= 2.0;
                rng.random_range(1.4..1.8) * PI
            } else {
                rng.random_range(1.2..1.8) * PI
            };
            let size = rng.random_range(3.0 * step_x..4.0 * step_x);

            let p = pool.acquire();
            p.pos = Vec2::new(paddle.x + c as f32 * step_x, paddle.y + r as f32 * step_y);
            p.vel = Vec2::new(speed_x * angle.cos(), speed_y * angle.sin());
            p.size_from = size;
            p.color_from = rgba(PADDLE_COLOR, 1.0);
            p.color_to = rgba(PADDLE_COLOR, 1.0);
            p.life = PADDLE_DEBRIS_LIFE_MS;
            p.shape = ParticleShape::Square;
            p.accel.y = DEBRIS_GRAVITY;
        }
    }

    COLS * ROWS
}

/// Per-frame exhaust behind the ball. `heat` in [0, 1] follows the level's
/// speed schedule: a hotter ball leaves a redder, longer-lived trail.
pub fn ball_trail(
    pool: &mut ParticlePool,
    rng: &mut Pcg32,
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    heat: f32,
) {
    for _ in 0..TRAIL_EMITS_PER_FRAME {
        let jitter_x = rng.random_range(0.7..1.3);
        let jitter_y = rng.random_range(0.7..1.3);

        let p = pool.acquire();
        p.pos = pos;
        p.vel = Vec2::new(-jitter_x * vel.x * 0.01, -jitter_y * vel.y * 0.01);
        p.size_from = radius * 2.0;
        p.size_to = radius / 2.0;
        p.color_from = rgba(TRAIL_COLOR, 1.0);
        p.color_to = rgba(TRAIL_HOT_COLOR, 0.0);
        p.life = 300.0 + 300.0 * heat;
        p.shape = ParticleShape::Circle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_burst_grid_truncates() {
        assert_eq!(burst_grid(&Rect::new(0.0, 0.0, 32.0, 16.0)), (6, 1));
        assert_eq!(burst_grid(&Rect::new(0.0, 0.0, 30.0, 20.0)), (6, 2));
        assert_eq!(burst_grid(&Rect::new(0.0, 0.0, 4.0, 8.0)), (0, 0));
    }

    #[test]
    fn test_brick_burst_count_and_tint() {
        let mut pool = ParticlePool::new(64);
        let rect = Rect::new(100.0, 50.0, 32.0, 16.0);
        let emitted = brick_burst(
            &mut pool,
            &mut rng(),
            &rect,
            Vec2::new(0.0, -1.0),
            [255.0, 0.0, 0.0],
        );
        assert_eq!(emitted, 6);
        assert_eq!(pool.alive(), 6);
        for p in pool.live() {
            assert_eq!(p.shape, ParticleShape::Square);
            assert_eq!(p.color_from.x, 255.0);
            assert_eq!(p.life, 800.0);
            // Spawn points stay inside the brick.
            assert!(p.pos.x > rect.left() && p.pos.x < rect.right());
            assert!(p.pos.y > rect.top() && p.pos.y < rect.bottom());
        }
    }

    #[test]
    fn test_burst_direction_follows_normal() {
        let mut pool = ParticlePool::new(64);
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);

        // Upward-facing burst: vertical velocity never positive.
        brick_burst(&mut pool, &mut rng(), &rect, Vec2::new(0.0, -1.0), [0.0; 3]);
        for p in pool.live() {
            assert!(p.vel.y <= 1e-6);
        }

        pool.clear();

        // Right-facing burst: horizontal velocity never negative.
        brick_burst(&mut pool, &mut rng(), &rect, Vec2::new(1.0, 0.0), [0.0; 3]);
        for p in pool.live() {
            assert!(p.vel.x >= -1e-6);
        }
    }

    #[test]
    fn test_paddle_burst_count_and_rise() {
        let mut pool = ParticlePool::new(64);
        let paddle = Rect::new(280.0, 345.0, 75.0, 15.0);
        let emitted = paddle_burst(&mut pool, &mut rng(), &paddle, 0.0);
        assert_eq!(emitted, 30);
        assert_eq!(pool.alive(), 30);
        for p in pool.live() {
            // Angles in (1.2π, 1.8π): everything flies upward.
            assert!(p.vel.y < 0.0);
            assert_eq!(p.life, 1000.0);
        }
    }

    #[test]
    fn test_ball_trail_opposes_travel() {
        let mut pool = ParticlePool::new(8);
        ball_trail(
            &mut pool,
            &mut rng(),
            Vec2::new(320.0, 180.0),
            Vec2::new(5.0, -3.0),
            10.0,
            0.5,
        );
        assert_eq!(pool.alive(), TRAIL_EMITS_PER_FRAME);
        for p in pool.live() {
            assert!(p.vel.x < 0.0);
            assert!(p.vel.y > 0.0);
            assert_eq!(p.shape, ParticleShape::Circle);
            assert!((p.life - 450.0).abs() < 1e-6);
            assert_eq!(p.size_from, 20.0);
            assert_eq!(p.size_to, 5.0);
        }
    }
}
