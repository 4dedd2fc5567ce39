//! Fixed-capacity particle pool
//!
//! All particles are allocated once at construction; emission reuses slots in
//! place and a per-frame compaction keeps the live range contiguous, so
//! steady-state operation never allocates. When the pool is full, emission
//! overwrites slots ring-robin across the whole pool, not oldest-dead-first:
//! a still-visible particle can be evicted early.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Default particle lifetime, milliseconds.
pub const DEFAULT_LIFE_MS: f32 = 1000.0;

/// Ease-out cubic: fast start, slow finish.
#[inline]
pub fn cubic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParticleShape {
    #[default]
    Circle,
    Square,
}

/// One pooled particle. Fields are public: emitters fill them in directly on
/// the handle returned by [`ParticlePool::acquire`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    pub size_from: f32,
    pub size_to: f32,
    /// Age and maximum age, milliseconds. `life` must stay positive.
    pub age: f32,
    pub life: f32,
    /// RGBA endpoints; rgb channels in 0-255, alpha in 0-1.
    pub color_from: Vec4,
    pub color_to: Vec4,
    pub shape: ParticleShape,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            size_from: 0.0,
            size_to: 0.0,
            age: 0.0,
            life: DEFAULT_LIFE_MS,
            color_from: Vec4::ZERO,
            color_to: Vec4::ZERO,
            shape: ParticleShape::Circle,
        }
    }
}

impl Particle {
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// A particle stays alive through `age == life` inclusive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age <= self.life
    }

    /// Advance one step; `dt_ms` is the raw frame delta in milliseconds.
    fn update(&mut self, dt_ms: f32) {
        self.age += dt_ms;
        if self.age > self.life {
            return;
        }
        if self.accel == Vec2::ZERO {
            self.pos += self.vel * dt_ms;
        } else {
            // Semi-implicit Euler with a half-step position term.
            let dv = self.accel * dt_ms;
            self.pos += (self.vel + 0.5 * dv) * dt_ms;
            self.vel += dv;
        }
    }

    #[inline]
    fn elapsed_frac(&self) -> f32 {
        self.age / self.life
    }

    /// Rendered size: eased from `size_from` toward `size_to` with an
    /// ease-out cubic on the remaining life.
    pub fn size_at(&self) -> f32 {
        let s = cubic_out(1.0 - self.elapsed_frac());
        s * self.size_from + (1.0 - s) * self.size_to
    }

    /// Rendered color: plain linear blend. Deliberately not eased like size.
    pub fn color_at(&self) -> Vec4 {
        let t = self.elapsed_frac();
        (1.0 - t) * self.color_from + t * self.color_to
    }
}

/// Pool of reusable particles with in-place liveness compaction.
///
/// Indices below `alive` are live; the rest hold stale data and are reused
/// without reallocation.
pub struct ParticlePool {
    particles: Vec<Particle>,
    alive: usize,
    next_overwrite: usize,
}

impl ParticlePool {
    /// Allocate `capacity` particles up front. `capacity` must be nonzero.
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: vec![Particle::default(); capacity],
            alive: 0,
            next_overwrite: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn alive(&self) -> usize {
        self.alive
    }

    /// Live particles; survivor order is preserved across compaction.
    pub fn live(&self) -> &[Particle] {
        &self.particles[..self.alive]
    }

    /// Drop all live particles without touching storage.
    pub fn clear(&mut self) {
        self.alive = 0;
        self.next_overwrite = 0;
    }

    /// Hand out a clean particle for the caller to populate.
    ///
    /// Below capacity this activates the next free slot. At capacity it
    /// recycles slots ring-robin, evicting whatever lives there - even a
    /// particle with life left.
    pub fn acquire(&mut self) -> &mut Particle {
        let index = if self.alive == self.particles.len() {
            let index = self.next_overwrite;
            self.next_overwrite = (self.next_overwrite + 1) % self.particles.len();
            index
        } else {
            let index = self.alive;
            self.alive += 1;
            index
        };
        let particle = &mut self.particles[index];
        particle.reset();
        particle
    }

    /// Age and integrate all live particles, then compact the live range.
    ///
    /// Compaction swaps each survivor down to the write cursor, preserving
    /// relative order, in one linear pass with no reallocation.
    pub fn step(&mut self, dt_ms: f32) {
        let mut j = 0;
        for i in 0..self.alive {
            self.particles[i].update(dt_ms);
            if self.particles[i].is_alive() {
                if i > j {
                    self.particles.swap(i, j);
                }
                j += 1;
            }
        }
        self.alive = j;
    }
}
