//! Brickfall - a brick-breaker simulation kernel
//!
//! Core modules:
//! - `sim`: deterministic simulation (swept collisions, particle pool, frame clock)
//! - `config`: tunable simulation parameters
//! - `level`: JSON level data and brick layout expansion
//!
//! Rendering, input devices, scoring and menu flow live in the embedding
//! application; the kernel exposes state to read and events to consume.

pub mod config;
pub mod level;
pub mod sim;

pub use config::SimConfig;
pub use level::LevelSpec;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 360.0;

    /// Reference frame rate; the per-frame scale factor is 1.0 here
    pub const BASELINE_FPS: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch direction off the paddle (up and to the right)
    pub const LAUNCH_ANGLE: f32 = -std::f32::consts::FRAC_PI_4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Minimum upward speed after a paddle bounce
    pub const PADDLE_MIN_RISE: f32 = 2.5;

    /// Particle pool capacity; allocated once, reused forever
    pub const POOL_CAPACITY: usize = 10_000;
}

/// Angle of `v` with the x axis, in radians.
#[inline]
pub fn vec_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Reflect `v` off a surface with the given `normal`.
///
/// `normal` must be unit length; no normalization is performed here.
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(normal) * normal
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
