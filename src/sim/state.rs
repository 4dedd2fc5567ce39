//! Simulation state and core entity types
//!
//! The kernel owns the ball, the brick markers and the particle pool. The
//! brick list geometry comes from the level collaborator; the kernel only
//! flips markers to `Destroyed` and reads rectangles.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::FrameClock;
use super::effects;
use super::particles::ParticlePool;
use super::rect::Rect;
use crate::config::SimConfig;
use crate::level::LevelSpec;
use crate::{consts, polar_to_cartesian};

/// Ball speed before any level is loaded.
const DEFAULT_SPEED: f32 = 7.0;

/// Brick lifecycle marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickState {
    /// Destructible and collidable.
    Live,
    /// Removed from play; skipped by collision tests.
    Destroyed,
    /// Collidable but indestructible; does not count toward level clear.
    Fixed,
}

/// A static obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub state: BrickState,
    /// RGB fill, 0-255 channels; also tints the destruction debris.
    pub color: [f32; 3],
}

impl Brick {
    #[inline]
    pub fn is_collidable(&self) -> bool {
        self.state != BrickState::Destroyed
    }
}

/// The moving actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-frame velocity at the baseline frame rate, px/frame.
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Bounding rectangle fed to the swept test.
    pub fn rect(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }
}

/// Fire-and-forget notifications for the embedding layer (scoring, audio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A live brick was destroyed; index into [`SimState::bricks`].
    BrickDestroyed { brick: usize },
    /// The ball bounced off the paddle.
    PaddleBounce,
    /// The ball crossed the bottom edge and is out of play.
    BallLost,
}

/// Complete kernel state for one level attempt.
pub struct SimState {
    pub config: SimConfig,
    pub clock: FrameClock,
    pub ball: Ball,
    /// Current scalar speed; the speed schedule re-derives the velocity from
    /// this and the post-bounce angle.
    pub ball_speed: f32,
    /// Paddle left edge; the embedding layer positions it through tick input.
    pub paddle_x: f32,
    pub bricks: Vec<Brick>,
    pub pool: ParticlePool,
    /// Events queued since the last drain.
    pub events: Vec<GameEvent>,
    /// Speed schedule endpoints for the loaded level.
    pub start_speed: f32,
    pub end_speed: f32,
    /// Bricks already destroyed when the player was last reset. Keeps the
    /// speed schedule from counting pre-retry destruction twice.
    pub destroyed_at_reset: usize,
    /// False once the ball crossed the bottom edge; brick and paddle
    /// interaction stop while integration continues.
    pub ball_in_play: bool,
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl SimState {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let pool = ParticlePool::new(config.pool_capacity);
        let ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
        };
        let mut state = Self {
            clock: FrameClock::new(),
            ball,
            ball_speed: DEFAULT_SPEED,
            paddle_x: 0.0,
            bricks: Vec::new(),
            pool,
            events: Vec::new(),
            start_speed: DEFAULT_SPEED,
            end_speed: DEFAULT_SPEED,
            destroyed_at_reset: 0,
            ball_in_play: true,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        state.reset_player();
        state
    }

    /// Install a level's bricks and speed schedule, then reset the player.
    pub fn load_level(&mut self, level: &LevelSpec) {
        self.bricks = level.build_bricks();
        self.start_speed = level.start_speed;
        self.end_speed = level.end_speed;
        self.reset_player();
        log::info!(
            "level loaded: {} bricks, speed {} -> {}",
            self.bricks.len(),
            self.start_speed,
            self.end_speed
        );
    }

    /// Center the paddle, seat the ball on it and rearm the launch velocity.
    pub fn reset_player(&mut self) {
        let c = &self.config;
        self.paddle_x = (c.field_width - c.paddle_width) / 2.0;
        self.ball.pos = Vec2::new(
            self.paddle_x + c.paddle_width / 2.0,
            c.field_height - c.paddle_height - self.ball.radius,
        );
        self.ball_speed = self.start_speed;
        self.ball.vel = polar_to_cartesian(self.ball_speed, consts::LAUNCH_ANGLE);
        self.ball_in_play = true;
        self.destroyed_at_reset = self.destroyed_count();
    }

    pub fn destroyed_count(&self) -> usize {
        self.bricks
            .iter()
            .filter(|b| b.state == BrickState::Destroyed)
            .count()
    }

    /// Level is clear when nothing destructible remains.
    pub fn cleared(&self) -> bool {
        self.bricks
            .iter()
            .all(|b| matches!(b.state, BrickState::Destroyed | BrickState::Fixed))
    }

    pub fn paddle_rect(&self) -> Rect {
        Rect::new(
            self.paddle_x,
            self.config.field_height - self.config.paddle_height,
            self.config.paddle_width,
            self.config.paddle_height,
        )
    }

    /// Fraction of the speed schedule covered so far; drives the trail ramp.
    pub fn speed_heat(&self) -> f32 {
        if self.start_speed >= self.end_speed {
            1.0
        } else {
            (self.ball_speed - self.start_speed) / (self.end_speed - self.start_speed)
        }
    }

    /// Mark a brick destroyed and burst its debris. Callers decide whether a
    /// [`GameEvent::BrickDestroyed`] accompanies it.
    pub(crate) fn destroy_brick(&mut self, index: usize, normal: Vec2) {
        self.bricks[index].state = BrickState::Destroyed;
        let rect = self.bricks[index].rect;
        let color = self.bricks[index].color;
        effects::brick_burst(&mut self.pool, &mut self.rng, &rect, normal, color);
    }

    /// Destroy every remaining brick, fixed ones included. The embedding
    /// layer uses this for end-of-game sweeps.
    pub fn destroy_all_bricks(&mut self) {
        for index in 0..self.bricks.len() {
            if self.bricks[index].state != BrickState::Destroyed {
                self.destroy_brick(index, Vec2::new(0.0, -1.0));
            }
        }
    }

    /// Take all queued events, leaving the queue empty.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
