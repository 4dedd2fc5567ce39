//! Simulation tuning parameters
//!
//! Geometry and capacities the embedding application may override. Defaults
//! reproduce the classic 640x360 field. All fields are optional in JSON so a
//! partial config document works.

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Fixed particle pool capacity; allocated once at construction.
    pub pool_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            ball_radius: consts::BALL_RADIUS,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            pool_capacity: consts::POOL_CAPACITY,
        }
    }
}
