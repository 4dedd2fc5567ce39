//! Deterministic simulation module
//!
//! All kernel logic lives here: continuous collision, particle pooling and
//! frame-rate independent integration. This module must stay pure:
//! - Seeded RNG only
//! - Stable scan order (brick-array order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod effects;
pub mod particles;
pub mod rect;
pub mod resolve;
pub mod state;
pub mod sweep;
pub mod tick;

pub use clock::{FrameClock, FrameSample};
pub use particles::{Particle, ParticlePool, ParticleShape};
pub use rect::Rect;
pub use resolve::resolve_bricks;
pub use state::{Ball, Brick, BrickState, GameEvent, SimState};
pub use sweep::{SweepResult, sweep_aabb};
pub use tick::{TickInput, tick};
